//! Chat engine: one user message in, one bot reply out.
//!
//! The engine owns the classifiers, the order book, and the response
//! selector, and threads every interaction through an explicit
//! [`Conversation`] value. Nothing here is global; two engines never share
//! state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::StandardAnalyzer;
use crate::error::{DeskbotError, Result};
use crate::intent::{
    IntentCatalog, IntentClassifier, KeywordClassifier, SimilarityClassifier,
    DEFAULT_RETRY_THRESHOLD, DEFAULT_THRESHOLD,
};
use crate::orders::{extract_order_id, OrderBook};
use crate::response::ResponseSelector;
use crate::session::Conversation;

/// How user messages are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Whole-word keyword matching in fixed priority order.
    Keyword,
    /// TF-IDF cosine similarity against example phrases.
    Similarity,
}

/// Engine configuration.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Classification mode.
    pub mode: ChatMode,
    /// Similarity threshold for the first pass.
    pub threshold: f64,
    /// Similarity threshold for the permissive retry pass.
    pub retry_threshold: f64,
    /// Seed for random response selection; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            mode: ChatMode::Similarity,
            threshold: DEFAULT_THRESHOLD,
            retry_threshold: DEFAULT_RETRY_THRESHOLD,
            seed: None,
        }
    }
}

/// The chat engine for one session.
///
/// Control flow per message:
///
/// - keyword mode: classify, then pick a random response for the winning
///   intent (the fallback intent when nothing matched)
/// - similarity mode: classify at `threshold`, retry at `retry_threshold`,
///   then try to extract an order ID and look it up, and only then give up
///   with the fallback response. Matched intents reply with their first
///   response annotated with the confidence score.
///
/// On success exactly one user turn and one bot turn are appended to the
/// conversation. Empty input is rejected before any turn is appended.
///
/// # Examples
///
/// ```rust,no_run
/// use deskbot::engine::{ChatEngine, ChatMode, EngineConfig};
/// use deskbot::intent::IntentCatalog;
/// use deskbot::orders::OrderBook;
/// use deskbot::session::Conversation;
///
/// # fn main() -> deskbot::error::Result<()> {
/// let catalog = IntentCatalog::load_from_file("data/intents.json")?;
/// let orders = OrderBook::load_from_file("data/orders.csv")?;
/// let config = EngineConfig {
///     mode: ChatMode::Keyword,
///     ..EngineConfig::default()
/// };
/// let mut engine = ChatEngine::new(catalog, orders, config)?;
///
/// let mut conversation = Conversation::new();
/// let reply = engine.reply(&mut conversation, "hi")?;
/// assert_eq!(conversation.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct ChatEngine {
    catalog: IntentCatalog,
    orders: OrderBook,
    keyword: KeywordClassifier,
    similarity: Option<SimilarityClassifier>,
    selector: ResponseSelector,
    config: EngineConfig,
}

impl ChatEngine {
    /// Build an engine for one session.
    ///
    /// The keyword classifier is always built; the similarity classifier is
    /// built only in similarity mode, since it requires example patterns.
    pub fn new(catalog: IntentCatalog, orders: OrderBook, config: EngineConfig) -> Result<Self> {
        let keyword = KeywordClassifier::from_catalog(&catalog)?;

        let similarity = match config.mode {
            ChatMode::Similarity => Some(SimilarityClassifier::from_catalog(
                &catalog,
                Arc::new(StandardAnalyzer::new()),
                config.threshold,
            )?),
            ChatMode::Keyword => None,
        };

        let selector = match config.seed {
            Some(seed) => ResponseSelector::with_seed(seed),
            None => ResponseSelector::new(),
        };

        Ok(ChatEngine {
            catalog,
            orders,
            keyword,
            similarity,
            selector,
            config,
        })
    }

    /// Handle one user message: classify, resolve a reply, and append the
    /// user and bot turns to the conversation.
    ///
    /// Whitespace-only input is rejected with
    /// [`DeskbotError::InvalidArgument`] and appends nothing.
    pub fn reply(&mut self, conversation: &mut Conversation, input: &str) -> Result<String> {
        let message = input.trim();
        if message.is_empty() {
            return Err(DeskbotError::invalid_argument("enter a message"));
        }

        let reply = match self.config.mode {
            ChatMode::Keyword => self.keyword_reply(message)?,
            ChatMode::Similarity => self.similarity_reply(message)?,
        };

        conversation.push_user(message);
        conversation.push_bot(reply.clone());
        Ok(reply)
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The loaded intent catalog.
    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// The loaded order book.
    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    fn keyword_reply(&mut self, message: &str) -> Result<String> {
        let classification = self.keyword.classify(message)?;
        // The keyword classifier always resolves a tag, falling back to the
        // catalog's fallback intent.
        let tag = classification
            .tag
            .ok_or_else(|| DeskbotError::classification("keyword classifier returned no tag"))?;
        let intent = self.catalog.get(&tag).ok_or_else(|| {
            DeskbotError::classification(format!("classifier returned unknown tag {tag}"))
        })?;

        Ok(self.selector.select_random(intent).to_string())
    }

    fn similarity_reply(&mut self, message: &str) -> Result<String> {
        let classifier = self
            .similarity
            .as_ref()
            .ok_or_else(|| DeskbotError::classification("similarity classifier not built"))?;

        // Pass 1 at the configured threshold, pass 2 at the permissive one.
        let mut classification =
            classifier.classify_with_threshold(message, self.config.threshold)?;
        if !classification.is_match() {
            classification =
                classifier.classify_with_threshold(message, self.config.retry_threshold)?;
        }

        if let Some(tag) = classification.tag {
            let intent = self.catalog.get(&tag).ok_or_else(|| {
                DeskbotError::classification(format!("classifier returned unknown tag {tag}"))
            })?;
            return Ok(self
                .selector
                .select_annotated(intent, classification.confidence));
        }

        // Neither pass cleared its bar; maybe the user pasted an order ID.
        if let Some(order_id) = extract_order_id(message) {
            return Ok(match self.orders.lookup(&order_id) {
                Some(record) => format!(
                    "Order {order_id} status: {}. ETA: {}.",
                    record.status, record.eta
                ),
                None => format!("Order {order_id} not found. Please check the ID."),
            });
        }

        Ok(self
            .selector
            .select_first(self.catalog.fallback())
            .to_string())
    }

    /// Look up an order directly, bypassing classification.
    ///
    /// This backs the standalone lookup surface, independent of the chat
    /// flow. The ID must be non-empty.
    pub fn lookup_order(&self, order_id: &str) -> Result<String> {
        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Err(DeskbotError::invalid_argument("enter an order ID"));
        }

        Ok(match self.orders.lookup(order_id) {
            Some(record) => format!(
                "Order {} — status: {}, ETA: {}",
                order_id.to_uppercase(),
                record.status,
                record.eta
            ),
            None => "Order not found.".to_string(),
        })
    }
}
