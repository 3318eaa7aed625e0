use kin_core::db::open_db_in_memory;
use kin_core::registry;
use kin_core::{
    Item, LedgerService, NewItem, NewVote, PendingResolver, SqliteItemRepository,
    SqliteVoteRepository, VoteService,
};
use rusqlite::Connection;

fn seed_items(conn: &Connection, names: &[&str]) -> Vec<Item> {
    let ledger = LedgerService::new(SqliteItemRepository::try_new(conn).unwrap());
    names
        .iter()
        .map(|name| {
            ledger
                .add_item(&NewItem {
                    name: name.to_string(),
                    category: "Recipe".to_string(),
                    proposer: "Melissa".to_string(),
                    notes: None,
                })
                .unwrap()
        })
        .collect()
}

fn cast(conn: &Connection, item: &Item, member: &str, score: i64) {
    VoteService::new(SqliteVoteRepository::try_new(conn).unwrap())
        .cast_vote(&NewVote {
            item_id: item.id,
            member: member.to_string(),
            score,
            tag: None,
        })
        .unwrap();
}

fn pending_names(conn: &Connection, member: &str) -> Vec<String> {
    let resolver = PendingResolver::new(SqliteItemRepository::try_new(conn).unwrap());
    resolver
        .pending_for(registry::member(member).unwrap())
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect()
}

#[test]
fn every_item_is_pending_for_everyone_initially() {
    let conn = open_db_in_memory().unwrap();
    seed_items(&conn, &["Pho", "Lasagna"]);

    for member in registry::all_members() {
        assert_eq!(pending_names(&conn, member.name()), ["Pho", "Lasagna"]);
    }
}

#[test]
fn voted_item_leaves_only_the_voters_queue() {
    let conn = open_db_in_memory().unwrap();
    let items = seed_items(&conn, &["Pho", "Lasagna", "Curry"]);

    cast(&conn, &items[1], "Rowen", 7);

    assert_eq!(pending_names(&conn, "Rowen"), ["Pho", "Curry"]);
    assert_eq!(pending_names(&conn, "Jace"), ["Pho", "Lasagna", "Curry"]);
}

#[test]
fn pending_reflects_votes_without_caching() {
    let conn = open_db_in_memory().unwrap();
    let items = seed_items(&conn, &["Pho", "Lasagna"]);
    let resolver = PendingResolver::new(SqliteItemRepository::try_new(&conn).unwrap());
    let dillon = registry::member("Dillon").unwrap();

    assert_eq!(resolver.pending_count(dillon).unwrap(), 2);
    cast(&conn, &items[0], "Dillon", 5);
    assert_eq!(resolver.pending_count(dillon).unwrap(), 1);
    cast(&conn, &items[1], "Dillon", 5);
    assert!(resolver.pending_for(dillon).unwrap().is_empty());
}

#[test]
fn new_items_appear_in_pending_after_member_caught_up() {
    let conn = open_db_in_memory().unwrap();
    let items = seed_items(&conn, &["Pho"]);
    cast(&conn, &items[0], "Rache", 9);
    assert!(pending_names(&conn, "Rache").is_empty());

    seed_items(&conn, &["Ramen"]);
    assert_eq!(pending_names(&conn, "Rache"), ["Ramen"]);
}

#[test]
fn votes_stored_under_hostile_member_text_never_leak_into_pending() {
    let conn = open_db_in_memory().unwrap();
    let items = seed_items(&conn, &["Pho"]);
    // A row whose member text looks like an injection payload must only ever be
    // compared as a literal value.
    conn.execute(
        "INSERT INTO votes (item_id, member, score) VALUES (?1, ?2, 5);",
        rusqlite::params![items[0].id, "Jace' OR '1'='1"],
    )
    .unwrap();

    assert_eq!(pending_names(&conn, "Jace"), ["Pho"]);
    assert_eq!(pending_names(&conn, "Dillon"), ["Pho"]);
}
