use importer::{Result, RosterFile, RosterTransformer, RosterValidator};
use storage::{Database, dto::participant::ImportSummary};

/// Validate a roster and upsert it into the store in one batch
pub fn import_roster(db: &Database, roster: &RosterFile) -> Result<ImportSummary> {
    let report = RosterValidator::validate(roster)?;
    report.log_warnings();

    let mut store = db.write()?;
    RosterTransformer::new(&mut store).import_to_store(roster)
}

pub fn export_roster(db: &Database) -> Result<RosterFile> {
    Ok(RosterFile::from_participants(db.read()?.list()))
}
