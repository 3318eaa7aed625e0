//! Core use-case services.
//!
//! # Responsibility
//! - Validate boundary input and orchestrate repository calls.
//! - Keep boundary layers (CLI) decoupled from storage details.
//!
//! # Invariants
//! - Every operation takes the acting member as an explicit argument.

pub mod consensus_service;
pub mod ledger_service;
pub mod pending_resolver;
pub mod vote_service;
