//! Conversation session state.
//!
//! An append-only list of turns held for the lifetime of one chat session.
//! Turns are immutable once appended and are never persisted.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human on the other end.
    User,
    /// The bot.
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who sent the message.
    pub sender: Sender,
    /// The message text.
    pub text: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user<S: Into<String>>(text: S) -> Self {
        Turn {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Create a bot turn.
    pub fn bot<S: Into<String>>(text: S) -> Self {
        Turn {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// An append-only, in-memory conversation history.
///
/// # Examples
///
/// ```
/// use deskbot::session::{Conversation, Sender};
///
/// let mut conversation = Conversation::new();
/// conversation.push_user("hi");
/// conversation.push_bot("Hello! How can I help you?");
///
/// assert_eq!(conversation.len(), 2);
/// assert_eq!(conversation.turns()[0].sender, Sender::User);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Conversation { turns: Vec::new() }
    }

    /// Append a user turn.
    pub fn push_user<S: Into<String>>(&mut self, text: S) {
        self.turns.push(Turn::user(text));
    }

    /// Append a bot turn.
    pub fn push_bot<S: Into<String>>(&mut self, text: S) {
        self.turns.push(Turn::bot(text));
    }

    /// The turns in insertion order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Iterate over the turns in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Number of turns so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order_is_preserved() {
        let mut conversation = Conversation::new();
        conversation.push_user("hi");
        conversation.push_bot("Hello!");
        conversation.push_user("bye");
        conversation.push_bot("Goodbye!");

        let senders: Vec<Sender> = conversation.iter().map(|t| t.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
        );
        assert_eq!(conversation.turns()[2].text, "bye");
    }

    #[test]
    fn test_empty_conversation() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
    }
}
