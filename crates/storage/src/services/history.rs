use crate::models::Participant;

pub const NO_RESULTS: &str = "No results recorded yet.";

/// Plain-text performance history, one line per result in recorded order.
///
/// This is the input handed to an external insight service.
pub fn format_history(participant: &Participant) -> String {
    if participant.results.is_empty() {
        return NO_RESULTS.to_string();
    }

    participant
        .results
        .iter()
        .map(|r| format!("{}: {} ({} pts)", r.distance, r.time, r.points))
        .collect::<Vec<_>>()
        .join("\n")
}
