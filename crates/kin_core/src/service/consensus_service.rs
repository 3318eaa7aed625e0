//! Dashboard use-case service.
//!
//! # Responsibility
//! - Read an item's votes and fold them with the configured policy.
//! - Pair every ledger item with its consensus for dashboard display.

use crate::consensus::{summarize, AnyVote, CompletenessPolicy, Consensus};
use crate::model::item::Item;
use crate::registry;
use crate::repo::item_repo::ItemRepository;
use crate::repo::vote_repo::VoteRepository;
use crate::repo::RepoResult;
use serde::Serialize;

/// One dashboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardEntry {
    pub item: Item,
    pub consensus: Consensus,
}

pub struct ConsensusService<I: ItemRepository, V: VoteRepository> {
    items: I,
    votes: V,
    policy: Box<dyn CompletenessPolicy>,
}

impl<I: ItemRepository, V: VoteRepository> ConsensusService<I, V> {
    /// Creates a service that reveals a score as soon as any vote exists.
    pub fn new(items: I, votes: V) -> Self {
        Self::with_policy(items, votes, Box::new(AnyVote))
    }

    pub fn with_policy(items: I, votes: V, policy: Box<dyn CompletenessPolicy>) -> Self {
        Self {
            items,
            votes,
            policy,
        }
    }

    /// Summarizes the current votes on `item`.
    pub fn summarize(&self, item: &Item) -> RepoResult<Consensus> {
        let votes = self.votes.votes_for(item.id)?;
        Ok(summarize(votes, registry::roster_size(), self.policy.as_ref()))
    }

    /// Every item in ledger order with its consensus.
    pub fn dashboard(&self) -> RepoResult<Vec<DashboardEntry>> {
        self.items
            .list_items()?
            .into_iter()
            .map(|item| {
                let consensus = self.summarize(&item)?;
                Ok(DashboardEntry { item, consensus })
            })
            .collect()
    }
}
