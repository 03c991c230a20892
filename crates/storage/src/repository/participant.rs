use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::participant::{
    CreateParticipantRequest, ImportSummary, ParticipantImport, RecordResultRequest,
    UpdateParticipantRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{Participant, RaceResult};
use crate::services::leaderboard;
use crate::services::scoring::ScoringTable;

/// Ordered in-memory participant collection.
///
/// Every write that touches a result scores it with the store's table, and
/// replacing the table rescores everything, so cached `points` always match
/// the current configuration.
#[derive(Debug, Clone, Default)]
pub struct ParticipantStore {
    participants: Vec<Participant>,
    scoring: ScoringTable,
}

impl ParticipantStore {
    pub fn new(scoring: ScoringTable) -> Self {
        Self {
            participants: Vec::new(),
            scoring,
        }
    }

    pub fn scoring_table(&self) -> &ScoringTable {
        &self.scoring
    }

    /// Validates and installs a new table, then rescores every result.
    pub fn set_scoring_table(&mut self, scoring: ScoringTable) -> Result<usize> {
        scoring.validate()?;
        self.scoring = scoring;
        Ok(self.recalculate_all_scores())
    }

    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    /// Owned copy of the collection for the ranking functions.
    pub fn snapshot(&self) -> Vec<Participant> {
        self.participants.clone()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.participant_id == id)
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.participant_id == id)
            .ok_or(StorageError::NotFound)
    }

    pub fn search(&self, query: &str) -> Vec<&Participant> {
        leaderboard::search(&self.participants, query)
    }

    pub fn add(&mut self, request: &CreateParticipantRequest) -> Participant {
        let participant = Participant {
            participant_id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            team: request.team.trim().to_string(),
            gender: request.gender,
            category: request.category,
            results: Vec::new(),
            created_at: Utc::now().naive_utc(),
        };

        tracing::debug!(participant_id = %participant.participant_id, "participant added");
        self.participants.push(participant.clone());
        participant
    }

    pub fn update(&mut self, id: Uuid, request: &UpdateParticipantRequest) -> Result<Participant> {
        let participant = self.find_mut(id)?;

        if let Some(ref name) = request.name {
            participant.name = name.trim().to_string();
        }
        if let Some(ref team) = request.team {
            participant.team = team.trim().to_string();
        }
        if let Some(gender) = request.gender {
            participant.gender = gender;
        }
        if let Some(category) = request.category {
            participant.category = category;
        }

        tracing::debug!(participant_id = %id, "participant updated");
        Ok(participant.clone())
    }

    /// Removes the participant together with all of their results.
    pub fn delete(&mut self, id: Uuid) -> Result<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| p.participant_id == id)
            .ok_or(StorageError::NotFound)?;

        tracing::debug!(participant_id = %id, "participant deleted");
        Ok(self.participants.remove(index))
    }

    /// Appends a result, or replaces the one named by `result_id`.
    pub fn add_or_update_result(
        &mut self,
        participant_id: Uuid,
        request: &RecordResultRequest,
    ) -> Result<RaceResult> {
        let points = self.scoring.score(request.distance, &request.time);
        let participant = self.find_mut(participant_id)?;

        let result = match request.result_id {
            Some(result_id) => {
                let existing = participant
                    .results
                    .iter_mut()
                    .find(|r| r.result_id == result_id)
                    .ok_or(StorageError::NotFound)?;
                existing.distance = request.distance;
                existing.time = request.time.trim().to_string();
                existing.points = points;
                existing.clone()
            }
            None => {
                let result = RaceResult {
                    result_id: Uuid::new_v4(),
                    participant_id,
                    distance: request.distance,
                    time: request.time.trim().to_string(),
                    points,
                    recorded_at: Utc::now().naive_utc(),
                };
                participant.results.push(result.clone());
                result
            }
        };

        tracing::debug!(
            participant_id = %participant_id,
            result_id = %result.result_id,
            distance = %result.distance,
            points = result.points,
            "result recorded"
        );
        Ok(result)
    }

    pub fn delete_result(&mut self, participant_id: Uuid, result_id: Uuid) -> Result<()> {
        let participant = self.find_mut(participant_id)?;
        let index = participant
            .results
            .iter()
            .position(|r| r.result_id == result_id)
            .ok_or(StorageError::NotFound)?;

        participant.results.remove(index);
        Ok(())
    }

    /// Rescores every stored result in place and returns how many were visited.
    /// Order and identity of participants and results are untouched.
    pub fn recalculate_all_scores(&mut self) -> usize {
        let scoring = &self.scoring;
        let mut count = 0;

        for participant in &mut self.participants {
            for result in &mut participant.results {
                result.points = scoring.score(result.distance, &result.time);
                count += 1;
            }
        }

        tracing::info!(results = count, "recalculated all scores");
        count
    }

    /// Upserts a batch keyed by participant id. Rows without an id, or with an
    /// unknown id, create participants; known ids get their profile and results
    /// replaced. A batch repeating an id is rejected before anything changes.
    pub fn bulk_import(&mut self, rows: Vec<ParticipantImport>) -> Result<ImportSummary> {
        let mut seen = HashSet::new();
        for (index, row) in rows.iter().enumerate() {
            if let Some(id) = row.participant_id
                && !seen.insert(id)
            {
                return Err(StorageError::ConstraintViolation(format!(
                    "row {}: participant id {} appears more than once",
                    index + 1,
                    id
                )));
            }
        }

        let mut summary = ImportSummary::default();
        let now = Utc::now().naive_utc();

        for row in rows {
            let participant_id = row.participant_id.unwrap_or_else(Uuid::new_v4);
            let results: Vec<RaceResult> = row
                .results
                .iter()
                .map(|r| RaceResult {
                    result_id: Uuid::new_v4(),
                    participant_id,
                    distance: r.distance,
                    time: r.time.trim().to_string(),
                    points: self.scoring.score(r.distance, &r.time),
                    recorded_at: now,
                })
                .collect();
            summary.results += results.len();

            match self.find_mut(participant_id) {
                Ok(existing) => {
                    existing.name = row.name.trim().to_string();
                    existing.team = row.team.trim().to_string();
                    existing.gender = row.gender;
                    existing.category = row.category;
                    existing.results = results;
                    summary.updated += 1;
                }
                Err(_) => {
                    self.participants.push(Participant {
                        participant_id,
                        name: row.name.trim().to_string(),
                        team: row.team.trim().to_string(),
                        gender: row.gender,
                        category: row.category,
                        results,
                        created_at: now,
                    });
                    summary.created += 1;
                }
            }
        }

        tracing::info!(
            created = summary.created,
            updated = summary.updated,
            results = summary.results,
            "bulk import applied"
        );
        Ok(summary)
    }
}
