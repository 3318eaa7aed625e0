//! Vote store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Append immutable votes and read them back per item.
//! - Translate storage constraint violations into semantic errors.
//!
//! # Invariants
//! - `(item_id, member)` is the primary key of `votes`; a second insert for
//!   the same pair fails with `RepoError::DuplicateVote`. There is no
//!   read-before-insert check for duplicates.
//! - No update or delete path exists for individual votes.

use crate::model::item::ItemId;
use crate::model::member::Member;
use crate::model::vote::{Score, Vote, VoteDraft};
use crate::registry;
use crate::repo::{ensure_connection_ready, now_epoch_ms, RepoError, RepoResult};
use log::{info, warn};
use rusqlite::{ffi, params, Connection, Row, Transaction, TransactionBehavior};

/// Repository interface for the vote store.
pub trait VoteRepository {
    /// Appends one vote. Fails if the item is missing or the pair already voted.
    fn insert_vote(&self, draft: &VoteDraft) -> RepoResult<Vote>;
    /// Lists all votes on one item, in roster order.
    fn votes_for(&self, item_id: ItemId) -> RepoResult<Vec<Vote>>;
    /// Returns whether `member` has a vote on `item_id`.
    fn has_voted(&self, item_id: ItemId, member: Member) -> RepoResult<bool>;
}

/// SQLite-backed vote store.
pub struct SqliteVoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVoteRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl VoteRepository for SqliteVoteRepository<'_> {
    fn insert_vote(&self, draft: &VoteDraft) -> RepoResult<Vote> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let item_exists: i64 = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1);",
            [draft.item_id],
            |row| row.get(0),
        )?;
        if item_exists == 0 {
            return Err(RepoError::ItemNotFound(draft.item_id));
        }

        let created_at = now_epoch_ms();
        let inserted = tx.execute(
            "INSERT INTO votes (item_id, member, score, tag, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.item_id,
                draft.member.name(),
                draft.score.value(),
                draft.tag.as_deref(),
                created_at,
            ],
        );
        if let Err(err) = inserted {
            return Err(match constraint_kind(&err) {
                Some(ConstraintKind::Key) => {
                    warn!(
                        "event=vote_cast module=vote status=rejected reason=duplicate item_id={} member={}",
                        draft.item_id, draft.member
                    );
                    RepoError::DuplicateVote {
                        item_id: draft.item_id,
                        member: draft.member,
                    }
                }
                Some(ConstraintKind::ForeignKey) => RepoError::ItemNotFound(draft.item_id),
                None => err.into(),
            });
        }
        tx.commit()?;

        info!(
            "event=vote_cast module=vote status=ok item_id={} member={}",
            draft.item_id, draft.member
        );
        Ok(Vote {
            item_id: draft.item_id,
            member: draft.member,
            score: draft.score,
            tag: draft.tag.clone(),
            created_at,
        })
    }

    fn votes_for(&self, item_id: ItemId) -> RepoResult<Vec<Vote>> {
        let mut stmt = self.conn.prepare(
            "SELECT item_id, member, score, tag, created_at
             FROM votes
             WHERE item_id = ?1;",
        )?;
        let mut rows = stmt.query([item_id])?;
        let mut votes = Vec::new();
        while let Some(row) = rows.next()? {
            votes.push(parse_vote_row(row)?);
        }
        votes.sort_by_key(|vote| vote.member);
        Ok(votes)
    }

    fn has_voted(&self, item_id: ItemId, member: Member) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM votes
                WHERE item_id = ?1 AND member = ?2
            );",
            params![item_id, member.name()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

enum ConstraintKind {
    Key,
    ForeignKey,
}

fn constraint_kind(err: &rusqlite::Error) -> Option<ConstraintKind> {
    match err {
        rusqlite::Error::SqliteFailure(inner, _) => match inner.extended_code {
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                Some(ConstraintKind::Key)
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(ConstraintKind::ForeignKey),
            _ => None,
        },
        _ => None,
    }
}

fn parse_vote_row(row: &Row<'_>) -> RepoResult<Vote> {
    let item_id: i64 = row.get("item_id")?;

    let member_text: String = row.get("member")?;
    let member = registry::member(&member_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid member `{member_text}` in votes.member for item {item_id}"
        ))
    })?;

    let raw_score: i64 = row.get("score")?;
    let score = Score::new(raw_score).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid score `{raw_score}` in votes.score for item {item_id}"
        ))
    })?;

    Ok(Vote {
        item_id,
        member,
        score,
        tag: row.get("tag")?,
        created_at: row.get("created_at")?,
    })
}
