//! Membership registry: the fixed household roster and category set.
//!
//! # Responsibility
//! - Provide the only way to obtain typed `Member` and `Category` values.
//! - Answer validity questions for boundary input.
//!
//! # Invariants
//! - The roster is fixed for the process lifetime and ordered.
//! - Lookups are exact and case-sensitive after trimming.

use crate::model::item::Category;
use crate::model::member::Member;
use crate::model::validation::ValidationError;

/// Household roster in display order.
pub const FAMILY_MEMBERS: [&str; 5] = ["Dillon", "Rache", "Melissa", "Rowen", "Jace"];

/// Returns whether `name` is on the roster.
pub fn is_valid_member(name: &str) -> bool {
    find_member(name).is_some()
}

/// Returns whether `name` is a known category.
pub fn is_valid_category(name: &str) -> bool {
    Category::from_name(name.trim()).is_some()
}

/// Resolves a roster member by name.
///
/// # Errors
/// - `ValidationError::UnknownMember` when `name` is not on the roster.
pub fn member(name: &str) -> Result<Member, ValidationError> {
    find_member(name).ok_or_else(|| ValidationError::UnknownMember(name.trim().to_string()))
}

/// Resolves a category by name.
///
/// # Errors
/// - `ValidationError::UnknownCategory` when `name` is not a known category.
pub fn category(name: &str) -> Result<Category, ValidationError> {
    let trimmed = name.trim();
    Category::from_name(trimmed).ok_or_else(|| ValidationError::UnknownCategory(trimmed.to_string()))
}

/// Every roster member, in roster order.
pub fn all_members() -> Vec<Member> {
    FAMILY_MEMBERS
        .iter()
        .enumerate()
        .map(|(position, name)| Member::new(position, *name))
        .collect()
}

pub fn all_categories() -> &'static [Category] {
    &Category::ALL
}

pub fn roster_size() -> usize {
    FAMILY_MEMBERS.len()
}

fn find_member(name: &str) -> Option<Member> {
    let trimmed = name.trim();
    FAMILY_MEMBERS
        .iter()
        .position(|candidate| *candidate == trimmed)
        .map(|position| Member::new(position, FAMILY_MEMBERS[position]))
}
