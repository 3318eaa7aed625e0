//! Item domain model.
//!
//! # Responsibility
//! - Define the proposed-item record and its category taxonomy.
//! - Normalize free-text item input before persistence.
//!
//! # Invariants
//! - `id` is assigned by storage, increases monotonically and is never reused.
//! - `name` is non-empty after trimming.
//! - Items are never mutated; deletion removes the record and its votes.

use crate::model::member::Member;
use crate::model::validation::ValidationError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Storage-assigned item identifier.
pub type ItemId = i64;

/// Display grouping for proposed items. Carries no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Recipe,
    Movie,
    Restaurant,
    House,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 4] = [
        Category::Recipe,
        Category::Movie,
        Category::Restaurant,
        Category::House,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recipe => "Recipe",
            Self::Movie => "Movie",
            Self::Restaurant => "Restaurant",
            Self::House => "House",
        }
    }

    pub(crate) fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived item lifecycle. Computed from vote presence on read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// No household member has voted yet.
    Pending,
    /// At least one vote is recorded.
    Rated,
}

/// Proposed item as persisted in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed display name.
    pub name: String,
    pub category: Category,
    /// Member who proposed the item (`added_by` column).
    pub proposer: Member,
    /// Free-text notes or a link. `None` when blank.
    pub notes: Option<String>,
    pub status: ItemStatus,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Validated input for a new ledger item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub proposer: Member,
    pub notes: Option<String>,
}

impl ItemDraft {
    /// Builds a draft from already-typed fields, normalizing text.
    ///
    /// # Errors
    /// - `ValidationError::BlankName` when `name` is empty after trim.
    pub fn new(
        name: &str,
        category: Category,
        proposer: Member,
        notes: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: normalize_name(name)?,
            category,
            proposer,
            notes: notes.and_then(normalize_notes),
        })
    }

    /// Re-checks invariants on a draft whose public fields may have been
    /// edited after construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        normalize_name(&self.name).map(|_| ())
    }
}

/// Trims an item name and rejects blank values.
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(trimmed.to_string())
}

/// Trims notes; blank notes become `None`.
pub fn normalize_notes(notes: &str) -> Option<String> {
    let trimmed = notes.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_name, normalize_notes, Category};
    use crate::model::validation::ValidationError;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(normalize_name("   \t"), Err(ValidationError::BlankName));
        assert_eq!(normalize_name(""), Err(ValidationError::BlankName));
        assert_eq!(normalize_name("  Dune 2 ").unwrap(), "Dune 2");
    }

    #[test]
    fn blank_notes_collapse_to_none() {
        assert_eq!(normalize_notes("  "), None);
        assert_eq!(normalize_notes(" spicy ").as_deref(), Some("spicy"));
    }

    #[test]
    fn category_names_are_exact() {
        assert_eq!(Category::from_name("Movie"), Some(Category::Movie));
        assert_eq!(Category::from_name("movie"), None);
        assert_eq!(Category::from_name("Boat"), None);
    }
}
