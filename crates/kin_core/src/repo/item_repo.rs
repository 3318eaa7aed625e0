//! Item ledger contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist, list and delete proposed items.
//! - Resolve the per-member pending set with one bound query.
//!
//! # Invariants
//! - Listings are ordered by `id ASC` (creation order).
//! - `status` is derived from vote presence at read time.
//! - Deleting an item removes its votes in the same transaction.

use crate::model::item::{Item, ItemDraft, ItemId, ItemStatus};
use crate::model::member::Member;
use crate::registry;
use crate::repo::{ensure_connection_ready, now_epoch_ms, RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const ITEM_SELECT_SQL: &str = "SELECT
    i.id,
    i.name,
    i.category,
    i.added_by,
    i.notes,
    i.created_at,
    EXISTS(SELECT 1 FROM votes v WHERE v.item_id = i.id) AS has_votes
FROM items i";

/// Repository interface for the item ledger.
pub trait ItemRepository {
    /// Persists a new item and returns its storage-assigned id.
    fn create_item(&self, draft: &ItemDraft) -> RepoResult<ItemId>;
    /// Loads one item by id.
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Lists every item in creation order.
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    /// Lists items `member` has not voted on, in creation order.
    fn list_pending_items(&self, member: Member) -> RepoResult<Vec<Item>>;
    /// Deletes one item together with its votes.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item ledger.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, draft: &ItemDraft) -> RepoResult<ItemId> {
        draft.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO items (name, category, added_by, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.name.as_str(),
                draft.category.as_str(),
                draft.proposer.name(),
                draft.notes.as_deref(),
                now_epoch_ms(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(
            "event=item_add module=ledger status=ok item_id={id} category={} proposer={}",
            draft.category, draft.proposer
        );
        Ok(id)
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE i.id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }
        Ok(None)
    }

    fn list_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY i.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn list_pending_items(&self, member: Member) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE NOT EXISTS (
                SELECT 1
                FROM votes mine
                WHERE mine.item_id = i.id
                  AND mine.member = ?1
             )
             ORDER BY i.id ASC;"
        ))?;
        let mut rows = stmt.query([member.name()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let removed_votes = tx.execute("DELETE FROM votes WHERE item_id = ?1;", [id])?;
        let removed_items = tx.execute("DELETE FROM items WHERE id = ?1;", [id])?;
        if removed_items == 0 {
            return Err(RepoError::ItemNotFound(id));
        }
        tx.commit()?;

        info!(
            "event=item_delete module=ledger status=ok item_id={id} removed_votes={removed_votes}"
        );
        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let id: i64 = row.get("id")?;

    let category_text: String = row.get("category")?;
    let category = registry::category(&category_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid category `{category_text}` in items.category for item {id}"
        ))
    })?;

    let proposer_text: String = row.get("added_by")?;
    let proposer = registry::member(&proposer_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid member `{proposer_text}` in items.added_by for item {id}"
        ))
    })?;

    let status = match row.get::<_, i64>("has_votes")? {
        0 => ItemStatus::Pending,
        _ => ItemStatus::Rated,
    };

    Ok(Item {
        id,
        name: row.get("name")?,
        category,
        proposer,
        notes: row.get("notes")?,
        status,
        created_at: row.get("created_at")?,
    })
}
