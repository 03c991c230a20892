pub mod history;
pub mod leaderboard;
pub mod scoring;
pub mod team_assembly;
pub mod time_codec;

#[cfg(test)]
pub(crate) mod fixtures;

pub use history::format_history;
pub use leaderboard::{
    affiliation_standings, best_result, build_leaderboard, build_overall_leaderboard, check_order,
    search,
};
pub use scoring::{ReferenceTimes, ScoringTable, compute_points};
pub use team_assembly::{TeamCriterion, TeamQuota, assemble_teams};
pub use time_codec::{
    TimePrecision, format_time, parse_time, parse_time_or_worst, parse_time_or_zero,
};
