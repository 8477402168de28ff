//! Chatbot Core Domain Types
//!
//! This crate contains the pure conversation logic with no dependencies on:
//! - Terminal rendering
//! - Async runtimes
//! - Timers
//!
//! Deferred replies are requested through the [`ReplyScheduler`] trait so the
//! host decides how the delay is realised.

pub mod chat;
pub mod config;
pub mod controller;
pub mod conversation;
pub mod error;
pub mod ids;
pub mod responder;
pub mod responses;

// Re-export commonly used types
pub use chat::{Message, Sender};
pub use config::ChatConfig;
pub use controller::{InteractionController, PendingReply, ReplyScheduler, ReplyState};
pub use conversation::{ConversationState, DraftState};
pub use error::CoreError;
pub use ids::SubmissionId;
pub use responder::{Responder, FALLBACK_REPLY};
pub use responses::ResponseTable;
