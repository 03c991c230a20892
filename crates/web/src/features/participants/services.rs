use storage::{
    Database,
    dto::participant::{
        CreateParticipantRequest, ParticipantHistoryResponse, RecordResultRequest,
        UpdateParticipantRequest,
    },
    error::{Result, StorageError},
    models::{Participant, RaceResult},
    services::format_history,
};
use uuid::Uuid;

/// List participants, optionally narrowed by a name or team search
pub fn list_participants(db: &Database, query: Option<&str>) -> Result<Vec<Participant>> {
    let store = db.read()?;

    Ok(match query {
        Some(q) => store.search(q).into_iter().cloned().collect(),
        None => store.snapshot(),
    })
}

pub fn get_participant(db: &Database, id: Uuid) -> Result<Participant> {
    db.read()?.find(id).cloned().ok_or(StorageError::NotFound)
}

pub fn create_participant(db: &Database, request: &CreateParticipantRequest) -> Result<Participant> {
    Ok(db.write()?.add(request))
}

pub fn update_participant(
    db: &Database,
    id: Uuid,
    request: &UpdateParticipantRequest,
) -> Result<Participant> {
    db.write()?.update(id, request)
}

pub fn delete_participant(db: &Database, id: Uuid) -> Result<()> {
    db.write()?.delete(id)?;
    Ok(())
}

pub fn record_result(
    db: &Database,
    id: Uuid,
    request: &RecordResultRequest,
) -> Result<RaceResult> {
    db.write()?.add_or_update_result(id, request)
}

pub fn delete_result(db: &Database, id: Uuid, result_id: Uuid) -> Result<()> {
    db.write()?.delete_result(id, result_id)
}

pub fn get_history(db: &Database, id: Uuid) -> Result<ParticipantHistoryResponse> {
    let participant = get_participant(db, id)?;

    Ok(ParticipantHistoryResponse {
        participant_id: participant.participant_id,
        history: format_history(&participant),
        name: participant.name,
    })
}
