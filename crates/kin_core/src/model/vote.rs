//! Vote domain model.
//!
//! # Invariants
//! - At most one vote exists per `(item_id, member)`; storage enforces this
//!   with a primary-key constraint.
//! - Votes are immutable once created.

use crate::model::item::ItemId;
use crate::model::member::Member;
use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Rating inside the closed `[MIN_SCORE, MAX_SCORE]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Validates a raw score.
    ///
    /// Takes `i64` so out-of-range caller input (including negatives) reaches
    /// validation instead of failing on conversion.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(MIN_SCORE) || value > i64::from(MAX_SCORE) {
            return Err(ValidationError::ScoreOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// One member's blind rating of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub item_id: ItemId,
    pub member: Member,
    pub score: Score,
    /// Optional single tag such as `spicy` or `boring`.
    pub tag: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Validated input for a new vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteDraft {
    pub item_id: ItemId,
    pub member: Member,
    pub score: Score,
    pub tag: Option<String>,
}

/// Trims a tag and collapses inner whitespace; blank tags become `None`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let collapsed = WHITESPACE_RE.replace_all(tag.trim(), " ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, Score};
    use crate::model::validation::ValidationError;

    #[test]
    fn score_bounds_are_inclusive() {
        assert_eq!(Score::new(1).unwrap().value(), 1);
        assert_eq!(Score::new(10).unwrap().value(), 10);
        assert_eq!(Score::new(0), Err(ValidationError::ScoreOutOfRange(0)));
        assert_eq!(Score::new(11), Err(ValidationError::ScoreOutOfRange(11)));
        assert_eq!(Score::new(-3), Err(ValidationError::ScoreOutOfRange(-3)));
    }

    #[test]
    fn tags_are_trimmed_and_collapsed() {
        assert_eq!(normalize_tag("  Spicy  ").as_deref(), Some("Spicy"));
        assert_eq!(normalize_tag("too \t\n long").as_deref(), Some("too long"));
        assert_eq!(normalize_tag("   "), None);
    }
}
