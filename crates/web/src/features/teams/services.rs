use storage::{
    Database,
    dto::team::{TeamAssemblyResponse, TeamQuery},
    error::Result,
    services::{TeamCriterion, TeamQuota, assemble_teams},
};

pub fn get_teams(db: &Database, query: &TeamQuery) -> Result<TeamAssemblyResponse> {
    let quota = TeamQuota::new(query.males as usize, query.females as usize)?;
    let criterion = TeamCriterion::new(query.metric, query.distance)?;

    let store = db.read()?;
    let precision = store.scoring_table().precision();

    Ok(assemble_teams(store.list(), quota, criterion, precision))
}
