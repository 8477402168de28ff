//! Header widget with title and instruction lines.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::wrap_text_indented;

/// Header widget: a bold title followed by static instruction lines.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    /// Application title.
    title: &'a str,
    /// Instruction lines, one paragraph each.
    instructions: Vec<&'a str>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Header<'a> {
    /// Create a new header with a title.
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            instructions: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Add an instruction line.
    pub fn instruction(mut self, text: &'a str) -> Self {
        self.instructions.push(text);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Instruction lines wrapped to the inner width of `width`.
    fn wrapped(&self, width: u16) -> Vec<String> {
        let inner = width.saturating_sub(2).max(1) as usize;
        self.instructions
            .iter()
            .flat_map(|text| wrap_text_indented(text, inner, ""))
            .collect()
    }

    /// Rows needed to show every instruction at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        self.wrapped(width).len() as u16 + 2
    }

    /// Render the header.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .wrapped(area.width)
            .into_iter()
            .map(Line::from)
            .collect();

        let title = Span::styled(format!(" {} ", self.title), self.theme.bold());

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border())
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}
