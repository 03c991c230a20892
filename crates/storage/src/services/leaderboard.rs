//! Individual, overall and affiliation rankings over a participant snapshot.
//!
//! Ranks are 1-based positions in the sorted, filtered sequence. Equal keys fall
//! back to participant id ascending so identical inputs always rank identically.

use std::collections::BTreeMap;

use crate::dto::ranking::{
    AffiliationStanding, DistanceScore, LeaderboardEntry, LeaderboardFilter, OverallEntry,
    RankingOrder,
};
use crate::error::{Result, StorageError};
use crate::models::{Distance, Participant, RaceResult};

use super::time_codec::{parse_time, parse_time_or_worst};

/// Fastest result at `distance`; malformed clocks count as slowest and the
/// earliest recorded result wins ties.
pub fn best_result(participant: &Participant, distance: Distance) -> Option<&RaceResult> {
    participant
        .results_at(distance)
        .min_by(|a, b| parse_time_or_worst(&a.time).total_cmp(&parse_time_or_worst(&b.time)))
}

/// Highest-scoring result at any distance, earliest on ties.
pub fn top_scoring_result(participant: &Participant) -> Option<&RaceResult> {
    participant
        .results
        .iter()
        .min_by(|a, b| b.points.cmp(&a.points))
}

/// Raw times are only comparable within one distance, so a time order needs a
/// distance filter.
pub fn check_order(filter: &LeaderboardFilter, order: RankingOrder) -> Result<()> {
    if order == RankingOrder::Time && filter.distance.is_none() {
        return Err(StorageError::InvalidInput(
            "time-ordered leaderboards require a distance".to_string(),
        ));
    }
    Ok(())
}

/// Ranks one result per participant. Yields nothing for a combination
/// [`check_order`] rejects.
pub fn build_leaderboard(
    participants: &[Participant],
    filter: &LeaderboardFilter,
    order: RankingOrder,
) -> Vec<LeaderboardEntry> {
    if check_order(filter, order).is_err() {
        return Vec::new();
    }

    let mut rows: Vec<(&Participant, &RaceResult, Option<f64>)> = participants
        .iter()
        .filter(|p| filter.matches(p))
        .filter_map(|p| {
            let result = match filter.distance {
                Some(distance) => best_result(p, distance),
                None => top_scoring_result(p),
            }?;
            Some((p, result, parse_time(&result.time)))
        })
        .filter(|(_, _, seconds)| order == RankingOrder::Points || seconds.is_some())
        .collect();

    rows.sort_by(|(pa, ra, sa), (pb, rb, sb)| {
        let primary = match order {
            RankingOrder::Points => rb.points.cmp(&ra.points),
            RankingOrder::Time => sa
                .unwrap_or(f64::INFINITY)
                .total_cmp(&sb.unwrap_or(f64::INFINITY)),
        };
        primary.then_with(|| pa.participant_id.cmp(&pb.participant_id))
    });

    rows.into_iter()
        .enumerate()
        .map(|(index, (participant, result, seconds))| LeaderboardEntry {
            rank: index as u32 + 1,
            participant_id: participant.participant_id,
            name: participant.name.clone(),
            team: participant.team.clone(),
            gender: participant.gender,
            category: participant.category,
            distance: result.distance,
            time: result.time.clone(),
            seconds,
            points: result.points,
        })
        .collect()
}

/// Sum of best points per distance. Participants totalling zero are left out
/// entirely rather than ranked last. A distance filter restricts which
/// distances contribute.
pub fn build_overall_leaderboard(
    participants: &[Participant],
    filter: &LeaderboardFilter,
) -> Vec<OverallEntry> {
    let mut entries: Vec<OverallEntry> = participants
        .iter()
        .filter(|p| filter.matches(p))
        .filter_map(|p| {
            let distances: Vec<DistanceScore> = Distance::all()
                .iter()
                .filter(|d| filter.accepts_distance(**d))
                .filter_map(|d| best_result(p, *d))
                .map(|r| DistanceScore {
                    distance: r.distance,
                    time: r.time.clone(),
                    points: r.points,
                })
                .collect();

            let total_points: u32 = distances.iter().map(|d| u32::from(d.points)).sum();
            if total_points == 0 {
                return None;
            }

            Some(OverallEntry {
                rank: 0,
                participant_id: p.participant_id,
                name: p.name.clone(),
                team: p.team.clone(),
                gender: p.gender,
                category: p.category,
                total_points,
                distances,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.participant_id.cmp(&b.participant_id))
    });
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }

    entries
}

/// Every affiliation with the points of all its members' results, best first.
pub fn affiliation_standings(participants: &[Participant]) -> Vec<AffiliationStanding> {
    let mut groups: BTreeMap<&str, (u32, Vec<String>)> = BTreeMap::new();

    for participant in participants {
        let (total, members) = groups.entry(participant.team.as_str()).or_default();
        *total += participant
            .results
            .iter()
            .map(|r| u32::from(r.points))
            .sum::<u32>();
        members.push(participant.name.clone());
    }

    let mut standings: Vec<AffiliationStanding> = groups
        .into_iter()
        .map(|(team, (total_points, members))| AffiliationStanding {
            rank: 0,
            team: team.to_string(),
            total_points,
            member_count: members.len(),
            members,
        })
        .collect();

    // Stable: equal totals stay in team-name order.
    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index as u32 + 1;
    }

    standings
}

/// Case-insensitive substring search on name or team. An empty query matches all.
pub fn search<'a>(participants: &'a [Participant], query: &str) -> Vec<&'a Participant> {
    let needle = query.trim().to_lowercase();
    participants
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.team.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Gender};
    use crate::services::fixtures::{participant, with_result};

    fn field() -> Vec<Participant> {
        vec![
            with_result(
                participant(1, "Alice Johnson", "Eagles", Gender::Female),
                Distance::M500,
                "01:40.00",
                78,
            ),
            with_result(
                with_result(
                    participant(2, "Bob Smith", "Lions", Gender::Male),
                    Distance::M500,
                    "01:35.00",
                    89,
                ),
                Distance::M1000,
                "03:30.00",
                75,
            ),
            with_result(
                participant(3, "Charlie Brown", "Eagles", Gender::Male),
                Distance::M1000,
                "03:20.00",
                88,
            ),
            participant(4, "Diana Prince", "Tigers", Gender::Female),
        ]
    }

    #[test]
    fn test_points_leaderboard_without_filters() {
        let entries = build_leaderboard(&field(), &LeaderboardFilter::default(), RankingOrder::Points);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bob Smith", "Charlie Brown", "Alice Johnson"]);
        assert_eq!(
            entries.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(entries[0].distance, Distance::M500);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filter = LeaderboardFilter {
            gender: Some(Gender::Male),
            category: Some(Category::Senior),
            distance: Some(Distance::M1000),
        };
        let entries = build_leaderboard(&field(), &filter, RankingOrder::Points);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Charlie Brown");
        assert_eq!(entries[1].name, "Bob Smith");
        assert!(entries.iter().all(|e| e.gender == Gender::Male));
        assert!(entries.iter().all(|e| e.distance == Distance::M1000));

        let filter = LeaderboardFilter {
            category: Some(Category::Masters),
            ..LeaderboardFilter::default()
        };
        assert!(build_leaderboard(&field(), &filter, RankingOrder::Points).is_empty());
    }

    #[test]
    fn test_time_order_is_fastest_first() {
        let filter = LeaderboardFilter {
            distance: Some(Distance::M500),
            ..LeaderboardFilter::default()
        };
        let entries = build_leaderboard(&field(), &filter, RankingOrder::Time);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Bob Smith");
        assert_eq!(entries[0].seconds, Some(95.0));
        assert_eq!(entries[1].seconds, Some(100.0));
    }

    #[test]
    fn test_time_order_drops_malformed_clocks() {
        let participants = vec![
            with_result(
                participant(1, "Alice Johnson", "Eagles", Gender::Female),
                Distance::M500,
                "bad",
                0,
            ),
            with_result(
                participant(2, "Bob Smith", "Lions", Gender::Male),
                Distance::M500,
                "01:50.00",
                40,
            ),
        ];
        let filter = LeaderboardFilter {
            distance: Some(Distance::M500),
            ..LeaderboardFilter::default()
        };

        let by_time = build_leaderboard(&participants, &filter, RankingOrder::Time);
        assert_eq!(by_time.len(), 1);
        assert_eq!(by_time[0].name, "Bob Smith");

        let by_points = build_leaderboard(&participants, &filter, RankingOrder::Points);
        assert_eq!(by_points.len(), 2);
        assert_eq!(by_points[1].seconds, None);
    }

    #[test]
    fn test_time_order_never_mixes_distances() {
        let participants = vec![
            with_result(
                participant(1, "Fast Thousand", "Eagles", Gender::Female),
                Distance::M1000,
                "03:10.00",
                100,
            ),
            with_result(
                participant(2, "Slow Five Hundred", "Lions", Gender::Female),
                Distance::M500,
                "02:14.00",
                2,
            ),
        ];
        let unfiltered = LeaderboardFilter::default();

        assert!(check_order(&unfiltered, RankingOrder::Time).is_err());
        assert!(check_order(&unfiltered, RankingOrder::Points).is_ok());
        assert!(build_leaderboard(&participants, &unfiltered, RankingOrder::Time).is_empty());

        let by_points = build_leaderboard(&participants, &unfiltered, RankingOrder::Points);
        assert_eq!(by_points[0].name, "Fast Thousand");

        let filter = LeaderboardFilter {
            distance: Some(Distance::M1000),
            ..LeaderboardFilter::default()
        };
        assert!(check_order(&filter, RankingOrder::Time).is_ok());
        let by_time = build_leaderboard(&participants, &filter, RankingOrder::Time);
        assert_eq!(by_time.len(), 1);
        assert_eq!(by_time[0].name, "Fast Thousand");
    }

    #[test]
    fn test_ties_fall_back_to_participant_id() {
        let participants = vec![
            with_result(
                participant(9, "Zelda", "Eagles", Gender::Female),
                Distance::M500,
                "01:30.00",
                100,
            ),
            with_result(
                participant(5, "Ethan Hunt", "Lions", Gender::Male),
                Distance::M500,
                "01:29.00",
                100,
            ),
        ];

        let entries =
            build_leaderboard(&participants, &LeaderboardFilter::default(), RankingOrder::Points);
        assert_eq!(entries[0].name, "Ethan Hunt");
        assert_eq!(entries[1].name, "Zelda");
    }

    #[test]
    fn test_best_result_prefers_fastest_then_earliest() {
        let p = with_result(
            with_result(
                with_result(
                    participant(1, "Alice Johnson", "Eagles", Gender::Female),
                    Distance::M500,
                    "01:45.00",
                    57,
                ),
                Distance::M500,
                "01:38.00",
                73,
            ),
            Distance::M500,
            "01:38.00",
            73,
        );

        let best = best_result(&p, Distance::M500).unwrap();
        assert_eq!(best.result_id, p.results[1].result_id);
        assert!(best_result(&p, Distance::M1000).is_none());
    }

    #[test]
    fn test_overall_sums_best_per_distance_and_excludes_zero() {
        let mut participants = field();
        participants.push(with_result(
            participant(5, "Ethan Hunt", "Lions", Gender::Male),
            Distance::M500,
            "03:00.00",
            0,
        ));

        let entries = build_overall_leaderboard(&participants, &LeaderboardFilter::default());

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Bob Smith");
        assert_eq!(entries[0].total_points, 164);
        assert_eq!(entries[0].distances.len(), 2);
        assert_eq!(entries[1].total_points, 88);
        assert_eq!(entries[2].total_points, 78);
        assert!(entries.iter().all(|e| e.total_points > 0));
        assert!(entries.iter().all(|e| e.name != "Ethan Hunt"));
        assert!(entries.iter().all(|e| e.name != "Diana Prince"));
    }

    #[test]
    fn test_overall_with_distance_restriction() {
        let filter = LeaderboardFilter {
            distance: Some(Distance::M1000),
            ..LeaderboardFilter::default()
        };
        let entries = build_overall_leaderboard(&field(), &filter);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Charlie Brown");
        assert_eq!(entries[1].total_points, 75);
    }

    #[test]
    fn test_affiliation_standings() {
        let standings = affiliation_standings(&field());

        assert_eq!(standings.len(), 3);
        assert_eq!(standings[0].team, "Eagles");
        assert_eq!(standings[0].total_points, 166);
        assert_eq!(standings[0].member_count, 2);
        assert_eq!(standings[1].team, "Lions");
        assert_eq!(standings[2].team, "Tigers");
        assert_eq!(standings[2].total_points, 0);
        assert_eq!(standings[2].rank, 3);
    }

    #[test]
    fn test_search() {
        let participants = field();
        assert_eq!(search(&participants, "eag").len(), 2);
        assert_eq!(search(&participants, "BOB").len(), 1);
        assert_eq!(search(&participants, "  ").len(), 4);
        assert!(search(&participants, "nobody").is_empty());
    }
}
