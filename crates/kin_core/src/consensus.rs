//! Consensus aggregation over recorded votes.
//!
//! # Responsibility
//! - Fold one item's votes into a family score, tier and disagreement flag.
//! - Decide, through a pluggable policy, whether a score may be revealed.
//!
//! # Invariants
//! - No votes always yields `Consensus::Incomplete`.
//! - `contested` is `spread > CONTESTED_SPREAD`; the threshold is fixed.
//! - Pure: no storage access, no validation (votes were validated on write).

use crate::model::vote::Vote;
use serde::Serialize;

/// Largest score spread that still counts as agreement.
pub const CONTESTED_SPREAD: u8 = 3;
/// Averages at or above this are `ScoreTier::High`.
pub const HIGH_TIER_MIN: f64 = 8.0;
/// Averages at or below this are `ScoreTier::Low`.
pub const LOW_TIER_MAX: f64 = 4.0;

/// Presentational band for an average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn for_average(average: f64) -> Self {
        if average >= HIGH_TIER_MIN {
            Self::High
        } else if average <= LOW_TIER_MAX {
            Self::Low
        } else {
            Self::Medium
        }
    }
}

/// How much of the roster has voted on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteProgress {
    NoVotes,
    PartiallyVoted,
    FullyVoted,
}

impl VoteProgress {
    pub fn from_counts(voter_count: usize, roster_size: usize) -> Self {
        match voter_count {
            0 => Self::NoVotes,
            count if count >= roster_size => Self::FullyVoted,
            _ => Self::PartiallyVoted,
        }
    }
}

/// Decides whether an item's score may be shown yet.
pub trait CompletenessPolicy {
    /// Called only with `voter_count > 0`.
    fn reveals(&self, voter_count: usize, roster_size: usize) -> bool;
}

/// Reveal as soon as any vote exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyVote;

impl CompletenessPolicy for AnyVote {
    fn reveals(&self, voter_count: usize, _roster_size: usize) -> bool {
        voter_count > 0
    }
}

/// Reveal only once every roster member has voted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullRoster;

impl CompletenessPolicy for FullRoster {
    fn reveals(&self, voter_count: usize, roster_size: usize) -> bool {
        voter_count >= roster_size
    }
}

/// Aggregated view of one item's votes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Mean of all scores, in `[1.0, 10.0]`.
    pub average_score: f64,
    pub voter_count: usize,
    /// `max(score) - min(score)`.
    pub spread: u8,
    pub contested: bool,
    pub tier: ScoreTier,
    pub progress: VoteProgress,
    /// Per-member breakdown, in roster order.
    pub votes: Vec<Vote>,
}

/// Result of summarizing one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Consensus {
    /// No score is shown: no votes yet, or the policy withholds it.
    Incomplete {
        voter_count: usize,
        progress: VoteProgress,
    },
    Scored(Summary),
}

impl Consensus {
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Self::Scored(summary) => Some(summary),
            Self::Incomplete { .. } => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}

/// Folds votes into a consensus under `policy`.
pub fn summarize(
    votes: Vec<Vote>,
    roster_size: usize,
    policy: &dyn CompletenessPolicy,
) -> Consensus {
    let voter_count = votes.len();
    let progress = VoteProgress::from_counts(voter_count, roster_size);

    let (Some(min), Some(max)) = (
        votes.iter().map(|vote| vote.score.value()).min(),
        votes.iter().map(|vote| vote.score.value()).max(),
    ) else {
        return Consensus::Incomplete {
            voter_count,
            progress,
        };
    };
    if !policy.reveals(voter_count, roster_size) {
        return Consensus::Incomplete {
            voter_count,
            progress,
        };
    }

    let total: u32 = votes.iter().map(|vote| u32::from(vote.score.value())).sum();
    let average_score = f64::from(total) / voter_count as f64;
    let spread = max - min;

    Consensus::Scored(Summary {
        average_score,
        voter_count,
        spread,
        contested: spread > CONTESTED_SPREAD,
        tier: ScoreTier::for_average(average_score),
        progress,
        votes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vote::Score;
    use crate::registry;

    fn votes(scores: &[i64]) -> Vec<Vote> {
        registry::all_members()
            .into_iter()
            .zip(scores)
            .map(|(member, score)| Vote {
                item_id: 1,
                member,
                score: Score::new(*score).unwrap(),
                tag: None,
                created_at: 0,
            })
            .collect()
    }

    #[test]
    fn empty_votes_are_incomplete() {
        let consensus = summarize(Vec::new(), 5, &AnyVote);
        assert_eq!(
            consensus,
            Consensus::Incomplete {
                voter_count: 0,
                progress: VoteProgress::NoVotes
            }
        );
    }

    #[test]
    fn agreeing_votes_average_without_contest() {
        let consensus = summarize(votes(&[8, 9, 10]), 5, &AnyVote);
        let summary = consensus.summary().expect("scored");
        assert_eq!(summary.average_score, 9.0);
        assert_eq!(summary.voter_count, 3);
        assert_eq!(summary.spread, 2);
        assert!(!summary.contested);
        assert_eq!(summary.tier, ScoreTier::High);
        assert_eq!(summary.progress, VoteProgress::PartiallyVoted);
    }

    #[test]
    fn wide_spread_is_contested() {
        let consensus = summarize(votes(&[2, 9]), 5, &AnyVote);
        let summary = consensus.summary().expect("scored");
        assert_eq!(summary.average_score, 5.5);
        assert_eq!(summary.spread, 7);
        assert!(summary.contested);
        assert_eq!(summary.tier, ScoreTier::Medium);
    }

    #[test]
    fn spread_of_exactly_three_is_not_contested() {
        let summary = summarize(votes(&[5, 8]), 5, &AnyVote);
        assert!(!summary.summary().unwrap().contested);
        let summary = summarize(votes(&[4, 8]), 5, &AnyVote);
        assert!(summary.summary().unwrap().contested);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(ScoreTier::for_average(8.0), ScoreTier::High);
        assert_eq!(ScoreTier::for_average(7.9), ScoreTier::Medium);
        assert_eq!(ScoreTier::for_average(4.0), ScoreTier::Low);
        assert_eq!(ScoreTier::for_average(4.5), ScoreTier::Medium);
    }

    #[test]
    fn full_roster_policy_withholds_partial_results() {
        let partial = summarize(votes(&[7, 7, 7, 7]), 5, &FullRoster);
        assert_eq!(
            partial,
            Consensus::Incomplete {
                voter_count: 4,
                progress: VoteProgress::PartiallyVoted
            }
        );

        let full = summarize(votes(&[7, 7, 7, 7, 2]), 5, &FullRoster);
        let summary = full.summary().expect("scored once everyone voted");
        assert_eq!(summary.progress, VoteProgress::FullyVoted);
        assert_eq!(summary.average_score, 6.0);
    }

    #[test]
    fn single_vote_is_revealed_under_any_vote() {
        let consensus = summarize(votes(&[1]), 5, &AnyVote);
        let summary = consensus.summary().expect("scored");
        assert_eq!(summary.tier, ScoreTier::Low);
        assert_eq!(summary.spread, 0);
    }
}
