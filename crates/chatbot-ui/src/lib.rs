//! Terminal widgets for the chatbot.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - `widgets` - ratatui widgets (header, chat list, input box, footer)
//! - `theme` - Colors, styles, and visual constants
//! - `utils` - Text wrapping utilities
//!
//! # Usage
//!
//! Components are data-agnostic. The binary maps its domain messages onto
//! [`ChatEntry`] rather than this crate depending on domain types.

pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;
pub use utils::{truncate, wrap_text_indented};
pub use widgets::chat::{ChatEntry, ChatRole, ChatWidget};
pub use widgets::footer::Footer;
pub use widgets::header::Header;
pub use widgets::input::InputBox;
