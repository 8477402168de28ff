//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the chatbot TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (focused borders, enabled send control)
    pub accent: Color,
    /// Muted color (timestamps, placeholder, disabled controls)
    pub muted: Color,
    /// User message color
    pub user: Color,
    /// Bot message color
    pub bot: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Blue,
            muted: Color::DarkGray,
            user: Color::Cyan,
            bot: Color::Gray,
        }
    }
}

impl Theme {
    /// Style for focused/active borders.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for unfocused borders.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for bold text.
    pub fn bold(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for user messages.
    pub fn user_style(&self) -> Style {
        Style::default().fg(self.user)
    }

    /// Style for bot messages.
    pub fn bot_style(&self) -> Style {
        Style::default().fg(self.bot)
    }

    /// Style for the send control.
    pub fn send_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::White)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            self.muted_style()
        }
    }
}
