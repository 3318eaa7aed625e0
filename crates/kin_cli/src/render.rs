use anyhow::Result;
use kin_core::registry;
use kin_core::{
    Category, Consensus, DashboardEntry, Item, ItemId, ItemStatus, Member, ScoreTier, Vote,
};
use serde::Serialize;

#[derive(Serialize)]
struct RosterOutput {
    members: Vec<Member>,
    categories: &'static [Category],
}

#[derive(Serialize)]
struct PendingOutput<'a> {
    member: Member,
    items: &'a [Item],
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    item: &'a Item,
    consensus: &'a Consensus,
}

#[derive(Serialize)]
struct DeletedOutput {
    deleted: ItemId,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn members(json: bool) -> Result<()> {
    let output = RosterOutput {
        members: registry::all_members(),
        categories: registry::all_categories(),
    };
    if json {
        return print_json(&output);
    }

    println!("Members:");
    for member in &output.members {
        println!("  {member}");
    }
    println!("Categories:");
    for category in output.categories {
        println!("  {category}");
    }
    Ok(())
}

pub fn item_added(item: &Item, json: bool) -> Result<()> {
    if json {
        return print_json(item);
    }
    println!("Added #{} {}!", item.id, item.name);
    Ok(())
}

pub fn items(items: &[Item], json: bool) -> Result<()> {
    if json {
        return print_json(items);
    }
    if items.is_empty() {
        println!("The ledger is empty.");
        return Ok(());
    }
    for item in items {
        print_item_line(item);
    }
    Ok(())
}

pub fn pending(member: Member, items: &[Item], json: bool) -> Result<()> {
    if json {
        return print_json(&PendingOutput { member, items });
    }
    if items.is_empty() {
        println!("You're all caught up, {member}! No pending votes.");
        return Ok(());
    }
    println!("Pending review for {member}:");
    for item in items {
        print_item_line(item);
    }
    Ok(())
}

pub fn vote_cast(vote: &Vote, json: bool) -> Result<()> {
    if json {
        return print_json(vote);
    }
    println!(
        "Vote cast! {} rated #{} {}/10.",
        vote.member,
        vote.item_id,
        vote.score.value()
    );
    Ok(())
}

pub fn summary(item: &Item, consensus: &Consensus, json: bool) -> Result<()> {
    if json {
        return print_json(&SummaryOutput { item, consensus });
    }
    print_consensus(item, consensus);
    Ok(())
}

pub fn dashboard(entries: &[DashboardEntry], json: bool) -> Result<()> {
    if json {
        return print_json(entries);
    }
    if entries.is_empty() {
        println!("The ledger is empty.");
        return Ok(());
    }
    for entry in entries {
        print_consensus(&entry.item, &entry.consensus);
    }
    Ok(())
}

pub fn item_deleted(item_id: ItemId, json: bool) -> Result<()> {
    if json {
        return print_json(&DeletedOutput { deleted: item_id });
    }
    println!("Item #{item_id} deleted.");
    Ok(())
}

fn print_item_line(item: &Item) {
    let status = match item.status {
        ItemStatus::Pending => "pending",
        ItemStatus::Rated => "rated",
    };
    println!(
        "#{} {}: {} (added by {}, {status})",
        item.id, item.category, item.name, item.proposer
    );
    if let Some(notes) = item.notes.as_deref() {
        println!("    notes: {notes}");
    }
}

fn print_consensus(item: &Item, consensus: &Consensus) {
    match consensus {
        Consensus::Incomplete { voter_count, .. } if *voter_count == 0 => {
            println!("#{} {} ({}): No data yet.", item.id, item.name, item.category);
        }
        Consensus::Incomplete { voter_count, .. } => {
            println!(
                "#{} {} ({}): waiting for votes ({voter_count}/{}).",
                item.id,
                item.name,
                item.category,
                registry::roster_size()
            );
        }
        Consensus::Scored(summary) => {
            println!(
                "#{} {} ({}): {:.1}/10 family score from {} voter(s) [{}]",
                item.id,
                item.name,
                item.category,
                summary.average_score,
                summary.voter_count,
                tier_label(summary.tier)
            );
            if summary.contested {
                println!("    Contested result! High disagreement (spread {}).", summary.spread);
            }
            for vote in &summary.votes {
                match vote.tag.as_deref() {
                    Some(tag) => println!("    {}: {} ({tag})", vote.member, vote.score.value()),
                    None => println!("    {}: {}", vote.member, vote.score.value()),
                }
            }
        }
    }
}

fn tier_label(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::High => "high",
        ScoreTier::Medium => "medium",
        ScoreTier::Low => "low",
    }
}
