//! Input validation errors for household records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Malformed caller input. Always recoverable; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Item name is empty or whitespace-only.
    BlankName,
    /// Category is not in the registry's category set.
    UnknownCategory(String),
    /// Member is not on the household roster.
    UnknownMember(String),
    /// Score lies outside the closed `[1, 10]` range.
    ScoreOutOfRange(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "item name must not be blank"),
            Self::UnknownCategory(value) => write!(f, "unknown category: `{value}`"),
            Self::UnknownMember(value) => write!(f, "unknown household member: `{value}`"),
            Self::ScoreOutOfRange(value) => write!(
                f,
                "score {value} is out of range; expected {}..={}",
                super::vote::MIN_SCORE,
                super::vote::MAX_SCORE
            ),
        }
    }
}

impl Error for ValidationError {}
