//! Item ledger use-case service.
//!
//! # Invariants
//! - A rejected `add_item` writes nothing.
//! - The returned item is read back from storage, so it matches later
//!   `list_items` output exactly.

use crate::model::item::{Item, ItemDraft, ItemId};
use crate::registry;
use crate::repo::item_repo::ItemRepository;
use crate::repo::{RepoError, RepoResult};

/// Raw boundary input for proposing an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub proposer: String,
    pub notes: Option<String>,
}

/// Item ledger facade over repository implementations.
pub struct LedgerService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> LedgerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a new item with status `Pending`.
    ///
    /// # Errors
    /// - `RepoError::Validation` for a blank name, unknown category or
    ///   unknown proposer.
    pub fn add_item(&self, request: &NewItem) -> RepoResult<Item> {
        let draft = ItemDraft::new(
            &request.name,
            registry::category(&request.category)?,
            registry::member(&request.proposer)?,
            request.notes.as_deref(),
        )?;
        let id = self.repo.create_item(&draft)?;
        self.repo.get_item(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created item {id} not found in read-back"))
        })
    }

    /// Lists every item in creation order.
    pub fn list_items(&self) -> RepoResult<Vec<Item>> {
        self.repo.list_items()
    }

    pub fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        self.repo.get_item(id)
    }

    /// Deletes an item and every vote cast on it.
    ///
    /// # Errors
    /// - `RepoError::ItemNotFound` when `id` does not exist.
    pub fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        self.repo.delete_item(id)
    }
}
