use storage::{
    Database,
    dto::ranking::{AffiliationStanding, LeaderboardEntry, LeaderboardQuery, OverallEntry},
    error::Result,
    services::{
        affiliation_standings, build_leaderboard, build_overall_leaderboard, check_order,
    },
};

/// Get one page of the individual leaderboard and the total row count
pub fn get_individual_ranking(
    db: &Database,
    query: &LeaderboardQuery,
) -> Result<(Vec<LeaderboardEntry>, usize)> {
    let filter = query.filter();
    check_order(&filter, query.order)?;

    let entries = build_leaderboard(db.read()?.list(), &filter, query.order);

    Ok(query.pagination().paginate(entries))
}

pub fn get_overall_ranking(
    db: &Database,
    query: &LeaderboardQuery,
) -> Result<(Vec<OverallEntry>, usize)> {
    let entries = build_overall_leaderboard(db.read()?.list(), &query.filter());

    Ok(query.pagination().paginate(entries))
}

pub fn get_affiliation_standings(db: &Database) -> Result<Vec<AffiliationStanding>> {
    Ok(affiliation_standings(db.read()?.list()))
}
