use std::collections::BTreeMap;
use std::path::Path;

use crate::dto::scoring::{ScoreChartRow, ScoringConfig};
use crate::error::{Result, StorageError};
use crate::models::Distance;

use super::time_codec::{TimePrecision, format_time, parse_time};

pub const MAX_POINTS: u8 = 100;

/// Reference times for one distance, in elapsed seconds.
///
/// At or below `gold` a result earns [`MAX_POINTS`]; at or above `base` it earns 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTimes {
    pub gold: f64,
    pub base: f64,
}

impl ReferenceTimes {
    pub fn new(gold: f64, base: f64) -> Self {
        Self { gold, base }
    }
}

/// Linear interpolation between the reference times, rounded once at the end.
///
/// Points = round(100 × (base − t) / (base − gold)), clamped to [0, 100].
pub fn compute_points(seconds: f64, reference: ReferenceTimes) -> u8 {
    if seconds.is_nan() {
        return 0;
    }
    if seconds <= reference.gold {
        return MAX_POINTS;
    }
    if seconds >= reference.base {
        return 0;
    }

    let ratio = f64::from(MAX_POINTS) * (reference.base - seconds) / (reference.base - reference.gold);
    ratio.round().clamp(0.0, f64::from(MAX_POINTS)) as u8
}

/// Per-distance scoring configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTable {
    precision: TimePrecision,
    distances: BTreeMap<Distance, ReferenceTimes>,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::new(TimePrecision::Hundredths)
            .with_distance(Distance::M500, 90.0, 135.0)
            .with_distance(Distance::M1000, 190.0, 270.0)
    }
}

impl ScoringTable {
    /// An empty table: every distance is unscored until configured.
    pub fn new(precision: TimePrecision) -> Self {
        Self {
            precision,
            distances: BTreeMap::new(),
        }
    }

    pub fn with_distance(mut self, distance: Distance, gold: f64, base: f64) -> Self {
        self.distances
            .insert(distance, ReferenceTimes::new(gold, base));
        self
    }

    pub fn with_precision(mut self, precision: TimePrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    pub fn reference(&self, distance: Distance) -> Option<ReferenceTimes> {
        self.distances.get(&distance).copied()
    }

    pub fn distances(&self) -> impl Iterator<Item = (Distance, ReferenceTimes)> + '_ {
        self.distances.iter().map(|(d, r)| (*d, *r))
    }

    pub fn validate(&self) -> Result<()> {
        for (distance, reference) in &self.distances {
            if !reference.gold.is_finite() || !reference.base.is_finite() {
                return Err(StorageError::InvalidConfiguration(format!(
                    "{}: reference times must be finite",
                    distance
                )));
            }
            if reference.gold <= 0.0 {
                return Err(StorageError::InvalidConfiguration(format!(
                    "{}: gold time must be positive",
                    distance
                )));
            }
            if reference.base <= reference.gold {
                return Err(StorageError::InvalidConfiguration(format!(
                    "{}: base time must be slower than gold time",
                    distance
                )));
            }
        }
        Ok(())
    }

    /// Points for a race clock. Unconfigured distances and malformed clocks score 0.
    pub fn score(&self, distance: Distance, time: &str) -> u8 {
        match parse_time(time) {
            Some(seconds) => self.score_seconds(distance, seconds),
            None => 0,
        }
    }

    pub fn score_seconds(&self, distance: Distance, seconds: f64) -> u8 {
        self.reference(distance)
            .map(|reference| compute_points(seconds, reference))
            .unwrap_or(0)
    }

    /// Like [`score`](Self::score) but takes the distance by name; unknown names score 0.
    pub fn score_named(&self, distance: &str, time: &str) -> u8 {
        distance
            .parse::<Distance>()
            .map(|d| self.score(d, time))
            .unwrap_or(0)
    }

    /// `steps + 1` evenly spaced clocks from gold to base with their points.
    pub fn score_chart(&self, distance: Distance, steps: usize) -> Vec<ScoreChartRow> {
        let Some(reference) = self.reference(distance) else {
            return Vec::new();
        };

        let steps = steps.max(1);
        let step = (reference.base - reference.gold) / steps as f64;

        (0..=steps)
            .map(|i| {
                let seconds = reference.gold + i as f64 * step;
                let time = format_time(seconds, self.precision);
                let points = self.score(distance, &time);
                ScoreChartRow {
                    time,
                    seconds,
                    points,
                }
            })
            .collect()
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        let mut table = Self::new(config.precision);
        for (distance, clocks) in &config.distances {
            let gold = parse_time(&clocks.gold).ok_or_else(|| {
                StorageError::InvalidConfiguration(format!(
                    "{}: malformed gold time '{}'",
                    distance, clocks.gold
                ))
            })?;
            let base = parse_time(&clocks.base).ok_or_else(|| {
                StorageError::InvalidConfiguration(format!(
                    "{}: malformed base time '{}'",
                    distance, clocks.base
                ))
            })?;
            table = table.with_distance(*distance, gold, base);
        }

        table.validate()?;
        Ok(table)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        Self::from_config(&config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_500() -> ScoringTable {
        ScoringTable::new(TimePrecision::Hundredths).with_distance(Distance::M500, 90.0, 125.0)
    }

    #[test]
    fn test_reference_boundaries() {
        let table = table_500();
        assert_eq!(table.score(Distance::M500, "01:30.00"), 100);
        assert_eq!(table.score(Distance::M500, "02:05.00"), 0);
        assert_eq!(table.score(Distance::M500, "01:47.50"), 50);
    }

    #[test]
    fn test_interpolation_rounds_once() {
        let table = table_500();
        // 100 × 24 / 35 = 68.57
        assert_eq!(table.score(Distance::M500, "01:41.00"), 69);
        // 100 × 34.5 / 35 = 98.57
        assert_eq!(table.score(Distance::M500, "01:30.50"), 99);
    }

    #[test]
    fn test_out_of_range_times_are_clamped() {
        let table = table_500();
        assert_eq!(table.score(Distance::M500, "00:01.00"), 100);
        assert_eq!(table.score(Distance::M500, "00:00.00"), 100);
        assert_eq!(table.score(Distance::M500, "59:59.99"), 0);
        assert_eq!(table.score_seconds(Distance::M500, 1.0e9), 0);
    }

    #[test]
    fn test_unknown_distance_and_malformed_time_score_zero() {
        let table = table_500();
        assert_eq!(table.score(Distance::M1000, "01:30.00"), 0);
        assert_eq!(table.score_named("400m", "01:30.00"), 0);
        assert_eq!(table.score_named("500m", "01:30.00"), 100);
        assert_eq!(table.score(Distance::M500, ""), 0);
        assert_eq!(table.score(Distance::M500, "fast"), 0);
    }

    #[test]
    fn test_score_is_monotonic_in_time() {
        let table = ScoringTable::default();
        for (distance, reference) in table.distances() {
            let mut previous = MAX_POINTS;
            let mut t = 0.0;
            while t < reference.base * 2.0 {
                let points = table.score_seconds(distance, t);
                assert!(points <= previous, "{distance} at {t}s: {points} > {previous}");
                assert!(points <= MAX_POINTS);
                previous = points;
                t += 0.25;
            }
            assert_eq!(table.score_seconds(distance, reference.gold), MAX_POINTS);
            assert_eq!(table.score_seconds(distance, reference.base), 0);
        }
    }

    #[test]
    fn test_default_table() {
        let table = ScoringTable::default();
        assert_eq!(table.score(Distance::M500, "01:30.00"), 100);
        assert_eq!(table.score(Distance::M500, "02:15.00"), 0);
        assert_eq!(table.score(Distance::M1000, "03:10.00"), 100);
        assert_eq!(table.score(Distance::M1000, "03:50.00"), 50);
        assert_eq!(table.score(Distance::M1500, "04:00.00"), 0);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_references() {
        let table =
            ScoringTable::new(TimePrecision::Hundredths).with_distance(Distance::M500, 120.0, 90.0);
        assert!(matches!(
            table.validate(),
            Err(StorageError::InvalidConfiguration(_))
        ));

        let table =
            ScoringTable::new(TimePrecision::Hundredths).with_distance(Distance::M500, 0.0, 90.0);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_score_chart() {
        let chart = ScoringTable::default().score_chart(Distance::M500, 10);
        assert_eq!(chart.len(), 11);
        assert_eq!(chart[0].time, "01:30.00");
        assert_eq!(chart[0].points, 100);
        assert_eq!(chart[5].time, "01:52.50");
        assert_eq!(chart[5].points, 50);
        assert_eq!(chart[10].time, "02:15.00");
        assert_eq!(chart[10].points, 0);

        assert!(ScoringTable::default().score_chart(Distance::M1500, 10).is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "precision": "milliseconds",
            "distances": {
                "500m": { "gold": "01:30.000", "base": "02:05.000" },
                "1500m": { "gold": "05:00.000", "base": "07:00.000" }
            }
        }"#;

        let table = ScoringTable::from_json_str(json).unwrap();
        assert_eq!(table.precision(), TimePrecision::Milliseconds);
        assert_eq!(table.reference(Distance::M1500), Some(ReferenceTimes::new(300.0, 420.0)));
        assert_eq!(table.reference(Distance::M1000), None);
        assert_eq!(table.score(Distance::M500, "01:47.500"), 50);
    }

    #[test]
    fn test_from_json_str_rejects_bad_clocks() {
        let json = r#"{ "distances": { "500m": { "gold": "soon", "base": "02:05.00" } } }"#;
        assert!(matches!(
            ScoringTable::from_json_str(json),
            Err(StorageError::InvalidConfiguration(_))
        ));

        let json = r#"{ "distances": { "500m": { "gold": "02:05.00", "base": "01:30.00" } } }"#;
        assert!(ScoringTable::from_json_str(json).is_err());
    }
}
