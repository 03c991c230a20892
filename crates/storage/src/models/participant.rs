use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Category, Distance, Gender, RaceResult};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub name: String,
    /// Originating school or club. Team assembly groups on exact equality of this field.
    pub team: String,
    pub gender: Gender,
    pub category: Category,
    pub results: Vec<RaceResult>,
    pub created_at: NaiveDateTime,
}

impl Participant {
    pub fn results_at(&self, distance: Distance) -> impl Iterator<Item = &RaceResult> {
        self.results.iter().filter(move |r| r.distance == distance)
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}
