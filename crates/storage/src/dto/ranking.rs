use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{Category, Distance, Gender, Participant};

use super::common::PaginationParams;

/// Ordering key of an individual leaderboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RankingOrder {
    /// Points, highest first
    #[default]
    Points,
    /// Raw time, fastest first
    Time,
}

/// Conjunctive leaderboard filters. An absent field places no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeaderboardFilter {
    pub gender: Option<Gender>,
    pub category: Option<Category>,
    pub distance: Option<Distance>,
}

impl LeaderboardFilter {
    /// Checks the participant-level predicates; `distance` applies to results.
    pub fn matches(&self, participant: &Participant) -> bool {
        self.gender.is_none_or(|g| participant.gender == g)
            && self.category.is_none_or(|c| participant.category == c)
    }

    pub fn accepts_distance(&self, distance: Distance) -> bool {
        self.distance.is_none_or(|d| d == distance)
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    #[serde(default = "super::common::default_page")]
    pub page: u32,
    #[serde(default = "super::common::default_page_size")]
    pub page_size: u32,
    pub gender: Option<Gender>,
    pub category: Option<Category>,
    pub distance: Option<Distance>,
    #[serde(default)]
    pub order: RankingOrder,
}

impl LeaderboardQuery {
    pub fn filter(&self) -> LeaderboardFilter {
        LeaderboardFilter {
            gender: self.gender,
            category: self.category,
            distance: self.distance,
        }
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub participant_id: Uuid,
    pub name: String,
    pub team: String,
    pub gender: Gender,
    pub category: Category,
    pub distance: Distance,
    pub time: String,
    /// Parsed clock; absent when the stored clock is malformed
    pub seconds: Option<f64>,
    pub points: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistanceScore {
    pub distance: Distance,
    pub time: String,
    pub points: u8,
}

/// Multi-distance ranking row: sum of best points per distance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OverallEntry {
    pub rank: u32,
    pub participant_id: Uuid,
    pub name: String,
    pub team: String,
    pub gender: Gender,
    pub category: Category,
    pub total_points: u32,
    pub distances: Vec<DistanceScore>,
}

/// Affiliation ranked by the points of every result of every member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AffiliationStanding {
    pub rank: u32,
    pub team: String,
    pub total_points: u32,
    pub member_count: usize,
    pub members: Vec<String>,
}
