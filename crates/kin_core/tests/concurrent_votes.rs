use kin_core::db::open_db;
use kin_core::{
    LedgerService, NewItem, NewVote, RepoError, SqliteItemRepository, SqliteVoteRepository,
    VoteService,
};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn racing_duplicate_votes_from_separate_connections_yield_one_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.sqlite3");

    let item_id = {
        let conn = open_db(&path).unwrap();
        LedgerService::new(SqliteItemRepository::try_new(&conn).unwrap())
            .add_item(&NewItem {
                name: "Dune 2".to_string(),
                category: "Movie".to_string(),
                proposer: "Jace".to_string(),
                notes: None,
            })
            .unwrap()
            .id
    };

    const CONTENDERS: usize = 4;
    let barrier = Arc::new(Barrier::new(CONTENDERS));
    let handles: Vec<_> = (0..CONTENDERS)
        .map(|idx| {
            let barrier = Arc::clone(&barrier);
            let path = path.clone();
            thread::spawn(move || {
                let conn = open_db(&path).unwrap();
                let votes = VoteService::new(SqliteVoteRepository::try_new(&conn).unwrap());
                barrier.wait();
                votes.cast_vote(&NewVote {
                    item_id,
                    member: "Rowen".to_string(),
                    score: 1 + idx as i64,
                    tag: None,
                })
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let winners = results.iter().filter(|result| result.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|result| matches!(result, Err(RepoError::DuplicateVote { .. })))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(duplicates, CONTENDERS - 1);

    let conn = open_db(&path).unwrap();
    let stored = VoteService::new(SqliteVoteRepository::try_new(&conn).unwrap())
        .votes_for(item_id)
        .unwrap();
    assert_eq!(stored.len(), 1);
}
