//! Single-line message input with a send control.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::visible_window;

/// Width of the send control, borders included.
const SEND_WIDTH: u16 = 10;

/// Input box bound to a draft, with a send control that is disabled while
/// the draft is empty.
#[derive(Debug, Clone)]
pub struct InputBox<'a> {
    /// Current value.
    value: &'a str,
    /// Cursor position in chars.
    cursor: usize,
    /// Whether the send control is enabled.
    can_send: bool,
    /// Whether the field is focused (shows the terminal cursor).
    focused: bool,
    /// Placeholder shown while empty.
    placeholder: &'a str,
    /// Accessible label used as the block title.
    label: &'a str,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> InputBox<'a> {
    /// Create a new input box.
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            cursor: value.chars().count(),
            can_send: !value.is_empty(),
            focused: true,
            placeholder: "",
            label: "",
            theme: Theme::default(),
        }
    }

    /// Set the cursor position.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Enable or disable the send control.
    pub fn can_send(mut self, can_send: bool) -> Self {
        self.can_send = can_send;
        self
    }

    /// Set whether the field is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the label.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the input and the send control.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(SEND_WIDTH)])
            .split(area);

        let input_area = chunks[0];
        let inner_width = input_area.width.saturating_sub(2) as usize;

        let (line, cursor_col) = if self.value.is_empty() {
            (
                Line::from(Span::styled(self.placeholder, self.theme.muted_style())),
                0,
            )
        } else {
            let (visible, col) = visible_window(self.value, self.cursor, inner_width);
            (Line::from(visible), col)
        };

        let border_style = if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };

        let input = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", self.label)),
        );
        frame.render_widget(input, input_area);

        if self.focused && inner_width > 0 {
            frame.set_cursor_position(Position::new(
                input_area.x + 1 + cursor_col as u16,
                input_area.y + 1,
            ));
        }

        let send_style = self.theme.send_style(self.can_send);
        let send = Paragraph::new(Line::from(Span::styled(" Send ", send_style)))
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(if self.can_send {
                        self.theme.focused_border()
                    } else {
                        self.theme.unfocused_border()
                    }),
            );
        frame.render_widget(send, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn draw(input: InputBox<'_>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| input.render(frame, frame.area()))
            .unwrap();
        terminal
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..40).map(|x| buffer[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let terminal = draw(InputBox::new("").placeholder("Type here"));
        assert!(row(&terminal, 1).contains("Type here"));
    }

    #[test]
    fn test_focus_sets_border_style() {
        let theme = Theme::default();
        let terminal = draw(InputBox::new("hi"));
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, theme.accent);

        let terminal = draw(InputBox::new("hi").focused(false));
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, theme.muted);
    }

    #[test]
    fn test_send_disabled_style() {
        let theme = Theme::default();
        let terminal = draw(InputBox::new("").can_send(false));
        let buffer = terminal.backend().buffer();
        let send_x = (0..40u16)
            .find(|x| buffer[(*x, 1)].symbol() == "S")
            .unwrap();
        assert_eq!(buffer[(send_x, 1)].fg, theme.muted);

        let terminal = draw(InputBox::new("hi").can_send(true));
        assert!(row(&terminal, 1).contains("hi"));
        let buffer = terminal.backend().buffer();
        let send_x = (0..40u16)
            .find(|x| buffer[(*x, 1)].symbol() == "S")
            .unwrap();
        assert_eq!(buffer[(send_x, 1)].bg, theme.accent);
    }
}
