//! Chat message types for the conversation log.

use serde::{Deserialize, Serialize};

/// Format used for the human-readable message timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Author of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the person using the widget.
    User,
    /// Produced by the responder.
    Bot,
}

/// A message in the conversation log.
///
/// Messages are immutable once created; fields are only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    sender: Sender,
    timestamp: String,
}

impl Message {
    /// Create a message stamped with the current local time.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create a bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    /// Message content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Who wrote the message.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Human-readable creation time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_sender() {
        assert_eq!(Message::user("hi").sender(), Sender::User);
        assert_eq!(Message::bot("hello").sender(), Sender::Bot);
    }

    #[test]
    fn test_timestamp_is_formatted() {
        let msg = Message::user("hi");
        assert!(
            chrono::NaiveDateTime::parse_from_str(msg.timestamp(), TIMESTAMP_FORMAT).is_ok(),
            "unexpected timestamp: {}",
            msg.timestamp()
        );
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Message::bot("ok")).unwrap();
        assert!(json.contains("\"sender\":\"bot\""));
    }
}
