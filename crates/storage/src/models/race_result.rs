use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Distance;

/// A single timed attempt. `points` is derived from `distance` and `time` by the
/// store's scoring table and is rewritten on every recalculation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResult {
    pub result_id: Uuid,
    pub participant_id: Uuid,
    pub distance: Distance,
    /// Race clock in `MM:SS.ss` or `MM:SS.sss`
    pub time: String,
    pub points: u8,
    pub recorded_at: NaiveDateTime,
}
