use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Distance;
use crate::services::scoring::ScoringTable;
use crate::services::time_codec::{TimePrecision, format_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoringTableResponse {
    pub precision: TimePrecision,
    pub distances: Vec<DistanceReference>,
}

/// Gold/base reference for one distance, both as clocks and as seconds
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistanceReference {
    pub distance: Distance,
    pub gold: String,
    pub base: String,
    pub gold_seconds: f64,
    pub base_seconds: f64,
}

impl From<&ScoringTable> for ScoringTableResponse {
    fn from(table: &ScoringTable) -> Self {
        let precision = table.precision();
        Self {
            precision,
            distances: table
                .distances()
                .map(|(distance, reference)| DistanceReference {
                    distance,
                    gold: format_time(reference.gold, precision),
                    base: format_time(reference.base, precision),
                    gold_seconds: reference.gold,
                    base_seconds: reference.base,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ScoreRequest {
    /// Distance name, e.g. "500m". Unknown names score 0.
    #[validate(length(min = 1, max = 16))]
    pub distance: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub distance: String,
    pub time: String,
    /// Parsed clock, absent when the clock is malformed
    pub seconds: Option<f64>,
    pub points: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreChartRow {
    pub time: String,
    pub seconds: f64,
    pub points: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecalculateResponse {
    pub results_recalculated: usize,
}

/// Scoring table as written in configuration files and accepted by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScoringConfig {
    #[serde(default)]
    pub precision: TimePrecision,
    pub distances: BTreeMap<Distance, ReferenceClocks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferenceClocks {
    pub gold: String,
    pub base: String,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScoreChartQuery {
    /// Number of intervals between gold and base
    #[serde(default = "default_steps")]
    #[validate(range(min = 1, max = 200))]
    pub steps: usize,
}

fn default_steps() -> usize {
    10
}
