use super::models::{FORMAT_VERSION, RosterFile};
use crate::{ImporterError, Result};
use std::collections::HashSet;
use storage::models::{Category, Distance, Gender};
use storage::services::time_codec;
use tracing::warn;

pub struct RosterValidator;

impl RosterValidator {
    pub fn validate(roster: &RosterFile) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if roster.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                roster.format_version, FORMAT_VERSION
            ));
        }

        if roster.participants.is_empty() {
            report
                .warnings
                .push("Roster contains no participants".to_string());
        }

        let mut ids = HashSet::new();
        for (idx, participant) in roster.participants.iter().enumerate() {
            let label = format!("{}. {}", idx + 1, participant.name);

            if participant.name.trim().is_empty() {
                report
                    .errors
                    .push(format!("Participant #{} has empty name", idx + 1));
            }
            if participant.team.trim().is_empty() {
                report
                    .errors
                    .push(format!("Participant '{}' has empty team", label));
            }
            if let Some(id) = participant.id
                && !ids.insert(id)
            {
                report.errors.push(format!(
                    "Participant '{}' repeats id {}",
                    label, id
                ));
            }
            if participant.gender.parse::<Gender>().is_err() {
                report.errors.push(format!(
                    "Participant '{}' has invalid gender: '{}'. Must be 'M' or 'F'",
                    label, participant.gender
                ));
            }
            if participant.category.parse::<Category>().is_err() {
                report.errors.push(format!(
                    "Participant '{}' has unknown category: '{}'",
                    label, participant.category
                ));
            }

            if participant.results.is_empty() {
                report
                    .warnings
                    .push(format!("Participant '{}' has no results", label));
            }

            for result in &participant.results {
                if result.distance.parse::<Distance>().is_err() {
                    report.errors.push(format!(
                        "Participant '{}' has result for unknown distance: '{}'",
                        label, result.distance
                    ));
                }
                if !time_codec::is_well_formed(&result.time) {
                    report.errors.push(format!(
                        "Participant '{}', distance '{}': malformed time '{}'",
                        label, result.distance, result.time
                    ));
                }
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::models::{RosterParticipant, RosterResult};
    use uuid::Uuid;

    fn row(name: &str, gender: &str, results: &[(&str, &str)]) -> RosterParticipant {
        RosterParticipant {
            id: None,
            name: name.to_string(),
            team: "Eagles".to_string(),
            gender: gender.to_string(),
            category: "U20".to_string(),
            results: results
                .iter()
                .map(|(distance, time)| RosterResult {
                    distance: distance.to_string(),
                    time: time.to_string(),
                    points: None,
                })
                .collect(),
        }
    }

    fn roster(participants: Vec<RosterParticipant>) -> RosterFile {
        RosterFile {
            format_version: FORMAT_VERSION.to_string(),
            exported_at: None,
            participants,
        }
    }

    #[test]
    fn test_valid_roster_reports_warnings_only() {
        let report = RosterValidator::validate(&roster(vec![
            row("Alice Johnson", "F", &[("500m", "01:40.00")]),
            row("Bob Smith", "Male", &[]),
        ]))
        .unwrap();

        assert!(report.errors.is_empty());
        assert_eq!(report.warnings, vec!["Participant '2. Bob Smith' has no results"]);
    }

    #[test]
    fn test_collects_every_error() {
        let mut bad_version = roster(vec![
            row("Alice Johnson", "X", &[("800m", "1:40")]),
            row("Bob Smith", "M", &[("500m", "01:75.00")]),
        ]);
        bad_version.format_version = "0.9".to_string();

        let err = RosterValidator::validate(&bad_version).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("5 error(s)"), "{message}");
        assert!(message.contains("Unsupported format version: 0.9"));
        assert!(message.contains("'1. Alice Johnson' has invalid gender: 'X'"));
        assert!(message.contains("unknown distance: '800m'"));
        assert!(message.contains("'2. Bob Smith', distance '500m': malformed time '01:75.00'"));
    }

    #[test]
    fn test_rejects_repeated_ids() {
        let id = Uuid::from_u128(42);
        let mut first = row("Alice Johnson", "F", &[("500m", "01:40.00")]);
        first.id = Some(id);
        let mut second = row("Alice Clone", "F", &[("500m", "01:41.00")]);
        second.id = Some(id);

        let err = RosterValidator::validate(&roster(vec![first, second])).unwrap_err();
        assert!(err.to_string().contains("'2. Alice Clone' repeats id"));
    }
}
