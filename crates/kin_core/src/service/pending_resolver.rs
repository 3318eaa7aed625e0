//! Pending-set resolution for blind voting.
//!
//! An item stays in a member's queue until that member votes on it, and
//! never returns afterwards. Always computed fresh from storage.

use crate::model::item::Item;
use crate::model::member::Member;
use crate::repo::item_repo::ItemRepository;
use crate::repo::RepoResult;

pub struct PendingResolver<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> PendingResolver<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Items `member` has not voted on, in ledger order.
    pub fn pending_for(&self, member: Member) -> RepoResult<Vec<Item>> {
        self.repo.list_pending_items(member)
    }

    pub fn pending_count(&self, member: Member) -> RepoResult<usize> {
        Ok(self.pending_for(member)?.len())
    }
}
