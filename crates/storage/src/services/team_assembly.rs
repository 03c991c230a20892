//! Builds best-of-affiliation squads under a gender quota.
//!
//! Each affiliation with enough qualifying members of both genders fields one
//! squad made of its best males and best females. Everyone who qualified
//! individually but did not make a squad is reported as unassigned, so squads
//! and the unassigned list always partition the qualifying participants.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::dto::team::{AssembledTeam, SquadMember, TeamAssemblyResponse, TeamMetric};
use crate::error::{Result, StorageError};
use crate::models::{Distance, Gender, Participant};

use super::leaderboard::best_result;
use super::time_codec::{TimePrecision, format_time, parse_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamQuota {
    males: usize,
    females: usize,
}

impl TeamQuota {
    pub fn new(males: usize, females: usize) -> Result<Self> {
        if males == 0 && females == 0 {
            return Err(StorageError::InvalidInput(
                "team quota must require at least one member".to_string(),
            ));
        }
        Ok(Self { males, females })
    }

    pub fn males(&self) -> usize {
        self.males
    }

    pub fn females(&self) -> usize {
        self.females
    }
}

/// What a participant is measured by when picking squads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamCriterion {
    /// Best points at `distance`, or the overall sum of best points per
    /// distance when no distance is given (zero totals do not qualify).
    Points { distance: Option<Distance> },
    /// Best time at `distance`.
    Time { distance: Distance },
}

impl TeamCriterion {
    pub fn new(metric: TeamMetric, distance: Option<Distance>) -> Result<Self> {
        match (metric, distance) {
            (TeamMetric::Points, distance) => Ok(Self::Points { distance }),
            (TeamMetric::Time, Some(distance)) => Ok(Self::Time { distance }),
            (TeamMetric::Time, None) => Err(StorageError::InvalidInput(
                "time-based teams require a distance".to_string(),
            )),
        }
    }

    pub fn metric(&self) -> TeamMetric {
        match self {
            Self::Points { .. } => TeamMetric::Points,
            Self::Time { .. } => TeamMetric::Time,
        }
    }

    pub fn distance(&self) -> Option<Distance> {
        match self {
            Self::Points { distance } => *distance,
            Self::Time { distance } => Some(*distance),
        }
    }

    /// `Less` when `a` is the better value.
    fn compare(&self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Points { .. } => b.total_cmp(&a),
            Self::Time { .. } => a.total_cmp(&b),
        }
    }

    fn candidate<'a>(&self, participant: &'a Participant) -> Option<Candidate<'a>> {
        match *self {
            Self::Points {
                distance: Some(distance),
            } => best_result(participant, distance).map(|r| Candidate {
                participant,
                metric: f64::from(r.points),
                time: Some(r.time.as_str()),
            }),
            Self::Points { distance: None } => {
                let total: u32 = Distance::all()
                    .iter()
                    .filter_map(|d| best_result(participant, *d))
                    .map(|r| u32::from(r.points))
                    .sum();
                (total > 0).then_some(Candidate {
                    participant,
                    metric: f64::from(total),
                    time: None,
                })
            }
            Self::Time { distance } => {
                let result = best_result(participant, distance)?;
                let seconds = parse_time(&result.time)?;
                Some(Candidate {
                    participant,
                    metric: seconds,
                    time: Some(result.time.as_str()),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    participant: &'a Participant,
    metric: f64,
    time: Option<&'a str>,
}

pub fn assemble_teams(
    participants: &[Participant],
    quota: TeamQuota,
    criterion: TeamCriterion,
    precision: TimePrecision,
) -> TeamAssemblyResponse {
    let best_first = |a: &Candidate, b: &Candidate| {
        criterion
            .compare(a.metric, b.metric)
            .then_with(|| a.participant.participant_id.cmp(&b.participant.participant_id))
    };

    let mut groups: BTreeMap<&str, (Vec<Candidate>, Vec<Candidate>)> = BTreeMap::new();
    for candidate in participants.iter().filter_map(|p| criterion.candidate(p)) {
        let (males, females) = groups
            .entry(candidate.participant.team.as_str())
            .or_default();
        match candidate.participant.gender {
            Gender::Male => males.push(candidate),
            Gender::Female => females.push(candidate),
        }
    }

    let mut squads: Vec<(&str, Vec<Candidate>, f64)> = Vec::new();
    let mut unassigned: Vec<Candidate> = Vec::new();

    for (team, (mut males, mut females)) in groups {
        males.sort_by(best_first);
        females.sort_by(best_first);

        if males.len() < quota.males || females.len() < quota.females {
            tracing::debug!(
                team,
                males = males.len(),
                females = females.len(),
                "affiliation cannot fill quota"
            );
            unassigned.extend(males);
            unassigned.extend(females);
            continue;
        }

        unassigned.extend(males.split_off(quota.males));
        unassigned.extend(females.split_off(quota.females));

        let mut members = males;
        members.extend(females);
        let total = members.iter().map(|c| c.metric).sum();
        squads.push((team, members, total));
    }

    // Stable: equal aggregates stay in affiliation-name order.
    squads.sort_by(|a, b| criterion.compare(a.2, b.2));
    unassigned.sort_by(best_first);

    let to_member = |c: &Candidate| SquadMember {
        participant_id: c.participant.participant_id,
        name: c.participant.name.clone(),
        team: c.participant.team.clone(),
        gender: c.participant.gender,
        category: c.participant.category,
        points: (criterion.metric() == TeamMetric::Points).then_some(c.metric as u32),
        seconds: (criterion.metric() == TeamMetric::Time).then_some(c.metric),
        time: c.time.map(str::to_string),
    };

    let teams = squads
        .into_iter()
        .enumerate()
        .map(|(index, (team, members, total))| {
            let is_time = criterion.metric() == TeamMetric::Time;
            AssembledTeam {
                rank: index as u32 + 1,
                team: team.to_string(),
                members: members.iter().map(to_member).collect(),
                total_points: (!is_time).then_some(total as u32),
                total_seconds: is_time.then_some(total),
                total_time: is_time.then(|| format_time(total, precision)),
            }
        })
        .collect();

    TeamAssemblyResponse {
        metric: criterion.metric(),
        distance: criterion.distance(),
        males: quota.males as u32,
        females: quota.females as u32,
        teams,
        unassigned: unassigned.iter().map(to_member).collect(),
    }
}
