use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StorageError};
use crate::repository::ParticipantStore;
use crate::services::scoring::ScoringTable;

/// Shared handle to the participant store.
#[derive(Debug, Clone, Default)]
pub struct Database {
    store: Arc<RwLock<ParticipantStore>>,
}

impl Database {
    pub fn new(scoring: ScoringTable) -> Result<Self> {
        scoring.validate()?;

        Ok(Self {
            store: Arc::new(RwLock::new(ParticipantStore::new(scoring))),
        })
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, ParticipantStore>> {
        self.store.read().map_err(|_| StorageError::LockPoisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, ParticipantStore>> {
        self.store.write().map_err(|_| StorageError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::participant::CreateParticipantRequest;
    use crate::models::{Category, Distance, Gender};
    use crate::services::time_codec::TimePrecision;

    #[test]
    fn test_clones_share_the_store() {
        let db = Database::default();
        let other = db.clone();

        other
            .write()
            .unwrap()
            .add(&CreateParticipantRequest {
                name: "Alice Johnson".to_string(),
                team: "Eagles".to_string(),
                gender: Gender::Female,
                category: Category::Senior,
            });

        assert_eq!(db.read().unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_invalid_scoring_table() {
        let table = ScoringTable::new(TimePrecision::Hundredths).with_distance(Distance::M500, 90.0, 90.0);
        assert!(Database::new(table).is_err());
    }
}
