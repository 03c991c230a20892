pub mod models;
pub mod transformer;
pub mod validator;

use std::path::Path;

use crate::Result;
use models::RosterFile;

/// Reads and deserializes a roster JSON file.
pub async fn load_roster(path: impl AsRef<Path>) -> Result<RosterFile> {
    let json_content = tokio::fs::read_to_string(path.as_ref()).await?;
    let roster: RosterFile = serde_json::from_str(&json_content)?;

    tracing::debug!(
        path = %path.as_ref().display(),
        participants = roster.participants.len(),
        "roster loaded"
    );
    Ok(roster)
}

/// Writes a roster as pretty-printed JSON, creating parent directories.
pub async fn save_roster(roster: &RosterFile, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(roster)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{RosterParticipant, RosterResult};

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("roster-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("roster.json");

        let roster = RosterFile {
            format_version: models::FORMAT_VERSION.to_string(),
            exported_at: None,
            participants: vec![RosterParticipant {
                id: None,
                name: "Alice Johnson".to_string(),
                team: "Eagles".to_string(),
                gender: "F".to_string(),
                category: "Senior".to_string(),
                results: vec![RosterResult {
                    distance: "500m".to_string(),
                    time: "01:40.00".to_string(),
                    points: None,
                }],
            }],
        };

        save_roster(&roster, &path).await.unwrap();
        let loaded = load_roster(&path).await.unwrap();
        assert_eq!(loaded, roster);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = load_roster("/nonexistent/roster.json").await.unwrap_err();
        assert!(matches!(err, crate::ImporterError::Io(_)));
    }
}
