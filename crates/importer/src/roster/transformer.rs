use super::models::{RosterFile, RosterParticipant};
use crate::{ImporterError, Result};
use storage::dto::participant::{ImportSummary, ParticipantImport, ResultImport};
use storage::repository::ParticipantStore;
use tracing::info;

/// Loads a validated roster into a participant store.
pub struct RosterTransformer<'a> {
    store: &'a mut ParticipantStore,
}

impl<'a> RosterTransformer<'a> {
    pub fn new(store: &'a mut ParticipantStore) -> Self {
        Self { store }
    }

    /// Upserts every roster row in one batch. Points are recomputed with the
    /// store's scoring table; any points carried by the file are discarded.
    pub fn import_to_store(&mut self, roster: &RosterFile) -> Result<ImportSummary> {
        let rows = Self::to_imports(roster)?;

        info!("Importing {} participants...", rows.len());
        let summary = self.store.bulk_import(rows)?;

        Ok(summary)
    }

    pub fn to_imports(roster: &RosterFile) -> Result<Vec<ParticipantImport>> {
        roster
            .participants
            .iter()
            .enumerate()
            .map(|(idx, participant)| Self::to_import(participant).map_err(|e| {
                ImporterError::TransformationError(format!(
                    "{}. {}: {}",
                    idx + 1,
                    participant.name,
                    e
                ))
            }))
            .collect()
    }

    fn to_import(participant: &RosterParticipant) -> Result<ParticipantImport> {
        let results = participant
            .results
            .iter()
            .map(|r| {
                Ok(ResultImport {
                    distance: r.distance.parse()?,
                    time: r.time.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ParticipantImport {
            participant_id: participant.id,
            name: participant.name.clone(),
            team: participant.team.clone(),
            gender: participant.gender.parse()?,
            category: participant.category.parse()?,
            results,
        })
    }
}
