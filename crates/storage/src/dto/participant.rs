use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Category, Distance, Gender, Participant, RaceResult};
use crate::services::time_codec;

/// Participant with results and the sum of their result points
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub name: String,
    pub team: String,
    pub gender: Gender,
    pub category: Category,
    pub results: Vec<RaceResult>,
    pub total_points: u32,
    pub created_at: NaiveDateTime,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        let total_points = participant
            .results
            .iter()
            .map(|r| u32::from(r.points))
            .sum();

        Self {
            participant_id: participant.participant_id,
            name: participant.name,
            team: participant.team,
            gender: participant.gender,
            category: participant.category,
            results: participant.results,
            total_points,
            created_at: participant.created_at,
        }
    }
}

/// Request payload for registering a participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantRequest {
    #[validate(length(
        min = 2,
        max = 255,
        message = "Name must be between 2 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 2,
        max = 255,
        message = "Team name must be between 2 and 255 characters"
    ))]
    pub team: String,

    pub gender: Gender,

    pub category: Category,
}

/// Request payload for editing a participant; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateParticipantRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 2, max = 255))]
    pub team: Option<String>,

    pub gender: Option<Gender>,

    pub category: Option<Category>,
}

/// Adds a result, or replaces the result with `result_id` when given
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordResultRequest {
    pub result_id: Option<Uuid>,

    pub distance: Distance,

    #[validate(custom(function = "validate_race_time"))]
    pub time: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParticipantSearch {
    /// Case-insensitive match on name or team
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantHistoryResponse {
    pub participant_id: Uuid,
    pub name: String,
    pub history: String,
}

/// One participant row as supplied by a bulk import
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantImport {
    pub participant_id: Option<Uuid>,
    pub name: String,
    pub team: String,
    pub gender: Gender,
    pub category: Category,
    pub results: Vec<ResultImport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultImport {
    pub distance: Distance,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub results: usize,
}

fn validate_race_time(time: &str) -> Result<(), validator::ValidationError> {
    if time_codec::is_well_formed(time) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_time");
        error.message = Some("Time must be in MM:SS.ss or MM:SS.sss format (e.g., 01:30.12)".into());
        Err(error)
    }
}
