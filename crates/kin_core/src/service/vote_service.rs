//! Vote store use-case service.
//!
//! # Invariants
//! - Member and score are validated before storage is touched.
//! - Duplicate detection is left to the storage constraint.

use crate::model::item::ItemId;
use crate::model::member::Member;
use crate::model::vote::{normalize_tag, Score, Vote, VoteDraft};
use crate::registry;
use crate::repo::vote_repo::VoteRepository;
use crate::repo::RepoResult;

/// Raw boundary input for casting a vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVote {
    pub item_id: ItemId,
    pub member: String,
    pub score: i64,
    pub tag: Option<String>,
}

/// Vote store facade over repository implementations.
pub struct VoteService<R: VoteRepository> {
    repo: R,
}

impl<R: VoteRepository> VoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records one blind vote.
    ///
    /// # Errors
    /// - `RepoError::Validation` for an unknown member or out-of-range score.
    /// - `RepoError::ItemNotFound` when the item does not exist.
    /// - `RepoError::DuplicateVote` when the member already voted on the item.
    pub fn cast_vote(&self, request: &NewVote) -> RepoResult<Vote> {
        let draft = VoteDraft {
            item_id: request.item_id,
            member: registry::member(&request.member)?,
            score: Score::new(request.score)?,
            tag: request.tag.as_deref().and_then(normalize_tag),
        };
        self.repo.insert_vote(&draft)
    }

    pub fn votes_for(&self, item_id: ItemId) -> RepoResult<Vec<Vote>> {
        self.repo.votes_for(item_id)
    }

    pub fn has_voted(&self, item_id: ItemId, member: Member) -> RepoResult<bool> {
        self.repo.has_voted(item_id, member)
    }
}
