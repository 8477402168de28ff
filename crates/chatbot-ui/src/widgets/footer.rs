//! Footer widget for key help and status.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::utils::truncate;

/// Footer widget displaying help text with an optional status on the right.
#[derive(Debug, Clone)]
pub struct Footer<'a> {
    /// Help text.
    text: &'a str,
    /// Status shown after the help text.
    status: Option<String>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer with help text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            status: None,
            theme: Theme::default(),
        }
    }

    /// Set a status message.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the footer.
    ///
    /// The status always stays visible; the help text is truncated to fit.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let status_width = self
            .status
            .as_ref()
            .map(|status| status.width() + 2)
            .unwrap_or(0);
        let help_width = (area.width as usize).saturating_sub(status_width);

        let mut spans = vec![Span::styled(
            truncate(self.text, help_width),
            self.theme.muted_style(),
        )];
        if let Some(status) = self.status {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(status, self.theme.user_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
