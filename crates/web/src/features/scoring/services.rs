use storage::{
    Database,
    dto::scoring::{
        RecalculateResponse, ScoreChartRow, ScoreResponse, ScoringConfig, ScoringTableResponse,
    },
    error::{Result, StorageError},
    models::Distance,
    services::{ScoringTable, parse_time},
};

pub fn get_scoring_table(db: &Database) -> Result<ScoringTableResponse> {
    Ok(ScoringTableResponse::from(db.read()?.scoring_table()))
}

/// Scores a clock for a distance given by name; unknown names score 0
pub fn score_time(db: &Database, distance: &str, time: &str) -> Result<ScoreResponse> {
    let points = db.read()?.scoring_table().score_named(distance, time);

    Ok(ScoreResponse {
        distance: distance.to_string(),
        time: time.to_string(),
        seconds: parse_time(time),
        points,
    })
}

pub fn get_score_chart(db: &Database, distance: Distance, steps: usize) -> Result<Vec<ScoreChartRow>> {
    let store = db.read()?;
    let table = store.scoring_table();

    if table.reference(distance).is_none() {
        return Err(StorageError::NotFound);
    }

    Ok(table.score_chart(distance, steps))
}

/// Installs a new table and rescores every stored result
pub fn replace_scoring_table(db: &Database, config: &ScoringConfig) -> Result<RecalculateResponse> {
    let table = ScoringTable::from_config(config)?;
    let results_recalculated = db.write()?.set_scoring_table(table)?;

    Ok(RecalculateResponse {
        results_recalculated,
    })
}

pub fn recalculate_all(db: &Database) -> Result<RecalculateResponse> {
    Ok(RecalculateResponse {
        results_recalculated: db.write()?.recalculate_all_scores(),
    })
}
