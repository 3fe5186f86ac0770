//! Command line argument parsing for the Deskbot CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::ChatMode;
use crate::intent::{DEFAULT_RETRY_THRESHOLD, DEFAULT_THRESHOLD};

/// Deskbot - a small customer-support chat bot
#[derive(Parser, Debug, Clone)]
#[command(name = "deskbot")]
#[command(about = "A small customer-support chat bot with keyword and TF-IDF intent matching")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DeskbotArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DeskbotArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Classification mode flag
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Whole-word keyword matching
    Keyword,
    /// TF-IDF cosine similarity
    Similarity,
}

impl From<ModeArg> for ChatMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Keyword => ChatMode::Keyword,
            ModeArg::Similarity => ChatMode::Similarity,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Send a single message and print the reply
    Ask(AskArgs),

    /// Look up an order by ID
    Lookup(LookupArgs),

    /// Classify a message without replying
    Classify(ClassifyArgs),
}

/// Shared bot configuration flags
#[derive(Args, Debug, Clone)]
pub struct BotArgs {
    /// Path to the intents definition file (JSON)
    #[arg(long, value_name = "INTENTS_FILE", default_value = "data/intents.json")]
    pub intents: PathBuf,

    /// Path to the orders file (CSV); a missing file means an empty table
    #[arg(long, value_name = "ORDERS_FILE", default_value = "data/orders.csv")]
    pub orders: PathBuf,

    /// Classification mode
    #[arg(short, long, default_value = "similarity")]
    pub mode: ModeArg,

    /// Similarity threshold for a confident match (0.1 - 0.8)
    #[arg(short = 't', long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Similarity threshold for the retry pass
    #[arg(long, default_value_t = DEFAULT_RETRY_THRESHOLD)]
    pub retry_threshold: f64,

    /// Seed for random response selection (for reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the interactive chat session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    #[command(flatten)]
    pub bot: BotArgs,
}

/// Arguments for a one-shot message
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The message to send
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    #[command(flatten)]
    pub bot: BotArgs,
}

/// Arguments for the standalone order lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// The order ID to look up (e.g. OD1001)
    #[arg(value_name = "ORDER_ID")]
    pub order_id: String,

    /// Path to the orders file (CSV)
    #[arg(long, value_name = "ORDERS_FILE", default_value = "data/orders.csv")]
    pub orders: PathBuf,
}

/// Arguments for classification without a reply
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The message to classify
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    #[command(flatten)]
    pub bot: BotArgs,
}
