//! Chat widget for displaying conversation messages.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::wrap_text_indented;

/// Author of a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

/// A single entry to render.
#[derive(Debug, Clone, Copy)]
pub struct ChatEntry<'a> {
    pub role: ChatRole,
    pub text: &'a str,
    pub timestamp: &'a str,
}

/// Scrollable message list.
///
/// User entries are right-aligned, bot entries left-aligned. Each entry
/// wraps to at most 80% of the inner width.
#[derive(Debug, Clone)]
pub struct ChatWidget<'a> {
    /// Entries to display, oldest first.
    entries: &'a [ChatEntry<'a>],
    /// Lines scrolled back from the bottom (0 = follow newest).
    scroll_back: usize,
    /// Whether the widget is focused.
    focused: bool,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> ChatWidget<'a> {
    /// Create a new chat widget.
    pub fn new(entries: &'a [ChatEntry<'a>]) -> Self {
        Self {
            entries,
            scroll_back: 0,
            focused: false,
            theme: Theme::default(),
        }
    }

    /// Set how many lines to scroll back from the newest message.
    pub fn scroll_back(mut self, lines: usize) -> Self {
        self.scroll_back = lines;
        self
    }

    /// Set whether the widget is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Build every line of the conversation for a given inner width.
    fn build_lines(&self, text_width: usize) -> Vec<Line<'a>> {
        let bubble_width = (text_width * 4 / 5).max(1);
        let mut all_lines: Vec<Line> = Vec::new();

        for entry in self.entries {
            let (label, style, alignment) = match entry.role {
                ChatRole::User => ("You", self.theme.user_style(), Alignment::Right),
                ChatRole::Bot => ("Bot", self.theme.bot_style(), Alignment::Left),
            };

            // Message header: sender and timestamp
            all_lines.push(
                Line::from(vec![
                    Span::styled(format!("{} ", label), style.add_modifier(Modifier::BOLD)),
                    Span::styled(entry.timestamp.to_string(), self.theme.muted_style()),
                ])
                .alignment(alignment),
            );

            for wrapped_line in wrap_text_indented(entry.text, bubble_width, "") {
                all_lines.push(Line::styled(wrapped_line, style).alignment(alignment));
            }

            // Blank line between messages
            all_lines.push(Line::from(""));
        }

        all_lines
    }

    /// Furthest the list can scroll back when rendered into `area`.
    pub fn max_scroll_back(&self, area: Rect) -> usize {
        let visible_height = area.height.saturating_sub(2) as usize;
        let text_width = area.width.saturating_sub(2) as usize;
        self.build_lines(text_width).len().saturating_sub(visible_height)
    }

    /// Render the widget.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };

        let visible_height = area.height.saturating_sub(2) as usize;
        let text_width = area.width.saturating_sub(2) as usize;

        let all_lines = self.build_lines(text_width);
        let total_lines = all_lines.len();

        // Calculate scroll position, clamped to the top
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = max_scroll.saturating_sub(self.scroll_back);

        let lines: Vec<Line> = all_lines
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .collect();

        let title = if total_lines == 0 {
            " Messages ".to_string()
        } else {
            let first_line = scroll_offset + 1;
            let last_line = (scroll_offset + visible_height).min(total_lines);
            format!(" Messages [{}-{}/{}] ", first_line, last_line, total_lines)
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn rendered(entries: &[ChatEntry<'_>], width: u16, height: u16) -> Vec<String> {
        rendered_back(entries, width, height, 0)
    }

    fn rendered_back(
        entries: &[ChatEntry<'_>],
        width: u16,
        height: u16,
        scroll_back: usize,
    ) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                ChatWidget::new(entries)
                    .scroll_back(scroll_back)
                    .render(frame, frame.area())
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_user_right_bot_left() {
        let entries = [
            ChatEntry {
                role: ChatRole::User,
                text: "hello",
                timestamp: "10:00",
            },
            ChatEntry {
                role: ChatRole::Bot,
                text: "Hi!",
                timestamp: "10:01",
            },
        ];
        let rows = rendered(&entries, 30, 10);

        let user_row = rows.iter().find(|r| r.contains("hello")).unwrap();
        assert!(user_row.trim_end_matches('│').trim_end().ends_with("hello"));

        let bot_row = rows.iter().find(|r| r.contains("Hi!")).unwrap();
        assert!(bot_row.starts_with("│Hi!"));
    }

    fn numbered(texts: &[String]) -> Vec<ChatEntry<'_>> {
        texts
            .iter()
            .map(|t| ChatEntry {
                role: ChatRole::Bot,
                text: t,
                timestamp: "",
            })
            .collect()
    }

    #[test]
    fn test_follows_newest_by_default() {
        let texts: Vec<String> = (0..20).map(|i| format!("msg{:02}", i)).collect();
        let rows = rendered(&numbered(&texts), 30, 8);

        assert!(rows.iter().any(|r| r.contains("msg19")));
        assert!(!rows.iter().any(|r| r.contains("msg00")));
    }

    #[test]
    fn test_max_scroll_back_counts_wrapped_lines() {
        let texts: Vec<String> = (0..20).map(|i| format!("msg{:02}", i)).collect();
        let entries = numbered(&texts);

        // Header, text and spacer per entry; 6 visible rows inside the border
        let widget = ChatWidget::new(&entries);
        assert_eq!(widget.max_scroll_back(Rect::new(0, 0, 30, 8)), 54);

        let empty: Vec<ChatEntry> = Vec::new();
        assert_eq!(ChatWidget::new(&empty).max_scroll_back(Rect::new(0, 0, 30, 8)), 0);
    }

    #[test]
    fn test_focused_border() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|frame| ChatWidget::new(&[]).focused(true).render(frame, frame.area()))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, theme.accent);
    }

    #[test]
    fn test_scroll_back_clamps_at_top() {
        let texts: Vec<String> = (0..20).map(|i| format!("msg{:02}", i)).collect();
        let rows = rendered_back(&numbered(&texts), 30, 8, usize::MAX);

        assert!(rows.iter().any(|r| r.contains("msg00")));
        assert!(!rows.iter().any(|r| r.contains("msg19")));
    }
}
