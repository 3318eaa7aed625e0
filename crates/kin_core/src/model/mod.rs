//! Typed household records shared by ledger, vote store and aggregation.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own input normalization and validation for every write path.
//!
//! # Invariants
//! - `Member` and `Category` values can only be obtained from the registry,
//!   so a constructed value is always valid.
//! - `Score` is always inside `[MIN_SCORE, MAX_SCORE]`.

pub mod item;
pub mod member;
pub mod validation;
pub mod vote;
