use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Ephemeral, lives for one invocation
    Memory,
    /// One JSON file per card under the data directory
    Json,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "flash", version, about = "a cli flashcard app")]
pub struct Cli {
    /// Storage backend
    #[arg(long, value_enum, env = "FLASH_STORE", default_value_t = StoreKind::Json, global = true)]
    pub store: StoreKind,

    /// Data directory for the JSON store (defaults to the app data dir)
    #[arg(long, env = "FLASH_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace); FLASH_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Add a flashcard
    #[command(visible_alias = "a")]
    Add(CardArgs),
    /// Delete a flashcard
    #[command(visible_alias = "d")]
    Delete(TitleArgs),
    /// Get flashcards in the group
    #[command(visible_alias = "g")]
    Get(GroupArg),
    /// Get all flashcards under the group
    #[command(name = "getall", visible_alias = "ga")]
    GetAll(GroupArg),
    /// Update a flashcard's description
    #[command(visible_alias = "u")]
    Update(CardArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GroupArg {
    /// Dot-delimited group, e.g. Group.SubGroup
    pub group: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct TitleArgs {
    /// Flashcard's title; a dotted title adds to the group
    #[arg(short, long)]
    pub title: String,
    #[command(flatten)]
    pub group: GroupArg,
}

#[derive(Debug, Args, Clone)]
pub struct CardArgs {
    /// Flashcard's title; a dotted title adds to the group
    #[arg(short, long)]
    pub title: String,
    /// Flashcard's description
    #[arg(short, long)]
    pub description: String,
    #[command(flatten)]
    pub group: GroupArg,
}
