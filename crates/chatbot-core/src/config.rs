//! Conversation configuration.

use std::time::Duration;

/// Delay between a submission and its bot reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Conversation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// How long a reply waits before it is appended.
    pub reply_delay: Duration,

    /// Optional cap on the log; `None` keeps every message.
    pub max_messages: Option<usize>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            max_messages: None,
        }
    }
}
