use crate::cli::{Commands, RevealPolicy};
use crate::render;
use anyhow::{anyhow, Result};
use kin_core::registry;
use kin_core::{
    AnyVote, CompletenessPolicy, ConsensusService, FullRoster, LedgerService, NewItem, NewVote,
    PendingResolver, SqliteItemRepository, SqliteVoteRepository, VoteService,
};
use rusqlite::Connection;

pub fn dispatch(conn: &Connection, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Members => render::members(json),
        Commands::Add {
            actor,
            name,
            category,
            notes,
        } => {
            let ledger = LedgerService::new(SqliteItemRepository::try_new(conn)?);
            let item = ledger.add_item(&NewItem {
                name,
                category,
                proposer: actor.member,
                notes,
            })?;
            render::item_added(&item, json)
        }
        Commands::List => {
            let ledger = LedgerService::new(SqliteItemRepository::try_new(conn)?);
            render::items(&ledger.list_items()?, json)
        }
        Commands::Pending { actor } => {
            let member = registry::member(&actor.member)?;
            let resolver = PendingResolver::new(SqliteItemRepository::try_new(conn)?);
            render::pending(member, &resolver.pending_for(member)?, json)
        }
        Commands::Vote {
            actor,
            item_id,
            score,
            tag,
        } => {
            let votes = VoteService::new(SqliteVoteRepository::try_new(conn)?);
            let vote = votes.cast_vote(&NewVote {
                item_id,
                member: actor.member,
                score,
                tag,
            })?;
            render::vote_cast(&vote, json)
        }
        Commands::Summary { item_id, reveal } => {
            let ledger = LedgerService::new(SqliteItemRepository::try_new(conn)?);
            let item = ledger
                .get_item(item_id)?
                .ok_or_else(|| anyhow!("item not found: {item_id}"))?;
            let consensus = consensus_service(conn, reveal)?.summarize(&item)?;
            render::summary(&item, &consensus, json)
        }
        Commands::Dashboard { reveal } => {
            let dashboard = consensus_service(conn, reveal)?.dashboard()?;
            render::dashboard(&dashboard, json)
        }
        Commands::Delete { item_id } => {
            let ledger = LedgerService::new(SqliteItemRepository::try_new(conn)?);
            ledger.delete_item(item_id)?;
            render::item_deleted(item_id, json)
        }
    }
}

fn consensus_service(
    conn: &Connection,
    reveal: RevealPolicy,
) -> Result<ConsensusService<SqliteItemRepository<'_>, SqliteVoteRepository<'_>>> {
    let policy: Box<dyn CompletenessPolicy> = if reveal.require_full_roster {
        Box::new(FullRoster)
    } else {
        Box::new(AnyVote)
    };
    Ok(ConsensusService::with_policy(
        SqliteItemRepository::try_new(conn)?,
        SqliteVoteRepository::try_new(conn)?,
        policy,
    ))
}
