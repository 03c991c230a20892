use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storage::models::Participant;
use utoipa::ToSchema;
use uuid::Uuid;

pub const FORMAT_VERSION: &str = "1.0.0";

/// Interchange format for participant rosters.
///
/// Enumerations are kept as raw strings so that validation can report every
/// bad row instead of failing on the first one during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterFile {
    pub format_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    pub participants: Vec<RosterParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterParticipant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub team: String,
    pub gender: String,
    pub category: String,
    #[serde(default)]
    pub results: Vec<RosterResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterResult {
    pub distance: String,
    pub time: String,
    /// Written on export; ignored on import, where points are recomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u8>,
}

impl RosterFile {
    pub fn from_participants(participants: &[Participant]) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            exported_at: Some(Utc::now()),
            participants: participants.iter().map(RosterParticipant::from).collect(),
        }
    }
}

impl From<&Participant> for RosterParticipant {
    fn from(participant: &Participant) -> Self {
        Self {
            id: Some(participant.participant_id),
            name: participant.name.clone(),
            team: participant.team.clone(),
            gender: participant.gender.to_string(),
            category: participant.category.to_string(),
            results: participant
                .results
                .iter()
                .map(|r| RosterResult {
                    distance: r.distance.to_string(),
                    time: r.time.clone(),
                    points: Some(r.points),
                })
                .collect(),
        }
    }
}
