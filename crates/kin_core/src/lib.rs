//! Core domain logic for Kin, the family consensus ledger.
//! This crate is the single source of truth for blind-voting invariants.

pub mod consensus;
pub mod db;
pub mod logging;
pub mod model;
pub mod registry;
pub mod repo;
pub mod service;

pub use consensus::{
    summarize, AnyVote, CompletenessPolicy, Consensus, FullRoster, ScoreTier, Summary,
    VoteProgress, CONTESTED_SPREAD,
};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LogSettings};
pub use model::item::{Category, Item, ItemDraft, ItemId, ItemStatus};
pub use model::member::Member;
pub use model::validation::ValidationError;
pub use model::vote::{Score, Vote, VoteDraft, MAX_SCORE, MIN_SCORE};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::vote_repo::{SqliteVoteRepository, VoteRepository};
pub use repo::{RepoError, RepoResult};
pub use service::consensus_service::{ConsensusService, DashboardEntry};
pub use service::ledger_service::{LedgerService, NewItem};
pub use service::pending_resolver::PendingResolver;
pub use service::vote_service::{NewVote, VoteService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
