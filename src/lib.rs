//! # Deskbot
//!
//! A small customer-support chat core.
//!
//! Deskbot classifies free-text user messages into a fixed set of support
//! intents and produces canned or templated replies. Two classifiers are
//! provided:
//!
//! - Keyword-based: whole-word matching against per-intent keyword lists,
//!   evaluated in a fixed priority order
//! - Similarity-based: TF-IDF vectorization of example phrases with cosine
//!   similarity scoring against the incoming message
//!
//! Around the classifiers sit a text analysis pipeline (tokenization,
//! lowercasing, stopword removal), an order-status lookup table, a response
//! selector, and an append-only conversation session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use deskbot::engine::{ChatEngine, ChatMode, EngineConfig};
//! use deskbot::intent::IntentCatalog;
//! use deskbot::orders::OrderBook;
//! use deskbot::session::Conversation;
//!
//! # fn main() -> deskbot::error::Result<()> {
//! let catalog = IntentCatalog::load_from_file("data/intents.json")?;
//! let orders = OrderBook::load_from_file("data/orders.csv")?;
//! let mut engine = ChatEngine::new(catalog, orders, EngineConfig::default())?;
//!
//! let mut conversation = Conversation::new();
//! let reply = engine.reply(&mut conversation, "hi there")?;
//! println!("bot: {reply}");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod intent;
pub mod orders;
pub mod response;
pub mod session;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
