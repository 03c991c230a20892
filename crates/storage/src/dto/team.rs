use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Category, Distance, Gender};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamMetric {
    /// Highest points first
    #[default]
    Points,
    /// Fastest aggregate time first; requires a distance
    Time,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamQuery {
    #[serde(default = "default_quota")]
    #[validate(range(max = 50))]
    pub males: u32,
    #[serde(default = "default_quota")]
    #[validate(range(max = 50))]
    pub females: u32,
    pub distance: Option<Distance>,
    #[serde(default)]
    pub metric: TeamMetric,
}

fn default_quota() -> u32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SquadMember {
    pub participant_id: Uuid,
    pub name: String,
    pub team: String,
    pub gender: Gender,
    pub category: Category,
    /// Set for the points metric
    pub points: Option<u32>,
    /// Set for the time metric
    pub seconds: Option<f64>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssembledTeam {
    pub rank: u32,
    pub team: String,
    pub members: Vec<SquadMember>,
    pub total_points: Option<u32>,
    pub total_seconds: Option<f64>,
    pub total_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamAssemblyResponse {
    pub metric: TeamMetric,
    pub distance: Option<Distance>,
    pub males: u32,
    pub females: u32,
    pub teams: Vec<AssembledTeam>,
    /// Individually qualifying participants left out of every squad, best first
    pub unassigned: Vec<SquadMember>,
}
