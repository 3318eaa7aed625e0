use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kin")]
#[command(author, version, about = "Blind voting and family consensus ledger")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite database file
    #[arg(long, global = true, env = "KIN_DB_PATH", default_value = "kin.sqlite3")]
    pub db: PathBuf,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "KIN_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "KIN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Acting household member. Always explicit; there is no logged-in state.
#[derive(Args, Debug, Clone)]
pub struct Actor {
    /// Household member acting for this command
    #[arg(long = "as", value_name = "MEMBER")]
    pub member: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the household roster and categories
    Members,

    /// Propose a new item for the family to rate
    #[command(visible_alias = "new")]
    Add {
        #[command(flatten)]
        actor: Actor,

        /// Item name, e.g. 'Dune 2' or 'Spicy Thai Basil'
        name: String,

        /// Category of the item
        #[arg(short, long)]
        category: String,

        /// Initial notes or a link
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List every item in the ledger
    #[command(visible_alias = "ls")]
    List,

    /// Items still waiting for your blind vote
    Pending {
        #[command(flatten)]
        actor: Actor,
    },

    /// Cast a blind vote on an item
    Vote {
        #[command(flatten)]
        actor: Actor,

        /// Item id
        item_id: i64,

        /// Score from 1 to 10
        #[arg(allow_negative_numbers = true)]
        score: i64,

        /// One-word tag, e.g. Spicy or Boring
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Family score for one item
    Summary {
        /// Item id
        item_id: i64,

        #[command(flatten)]
        reveal: RevealPolicy,
    },

    /// Family score for every item
    Dashboard {
        #[command(flatten)]
        reveal: RevealPolicy,
    },

    /// Delete an item and all of its votes
    #[command(visible_alias = "rm")]
    Delete {
        /// Item id
        item_id: i64,
    },
}

impl Commands {
    /// Stable name for log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Add { .. } => "add",
            Self::List => "list",
            Self::Pending { .. } => "pending",
            Self::Vote { .. } => "vote",
            Self::Summary { .. } => "summary",
            Self::Dashboard { .. } => "dashboard",
            Self::Delete { .. } => "delete",
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct RevealPolicy {
    /// Only reveal a score once every household member has voted
    #[arg(long)]
    pub require_full_roster: bool,
}
