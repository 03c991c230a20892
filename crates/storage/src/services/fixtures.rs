use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Category, Distance, Gender, Participant, RaceResult};

pub(crate) fn participant(id: u128, name: &str, team: &str, gender: Gender) -> Participant {
    Participant {
        participant_id: Uuid::from_u128(id),
        name: name.to_string(),
        team: team.to_string(),
        gender,
        category: Category::Senior,
        results: Vec::new(),
        created_at: NaiveDate::from_ymd_opt(2025, 5, 17)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap(),
    }
}

pub(crate) fn with_result(
    mut participant: Participant,
    distance: Distance,
    time: &str,
    points: u8,
) -> Participant {
    let index = participant.results.len() as u128;
    participant.results.push(RaceResult {
        result_id: Uuid::from_u128(participant.participant_id.as_u128() * 100 + index),
        participant_id: participant.participant_id,
        distance,
        time: time.to_string(),
        points,
        recorded_at: participant.created_at,
    });
    participant
}
