//! Main render function for the TUI.

use chatbot_core::Sender;
use chatbot_ui::{ChatEntry, ChatRole, ChatWidget, Footer, Header, InputBox, Theme};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;

const TITLE: &str = "🤖 Chatbot";
const INSTRUCTIONS_EN: &str =
    "You can ask me basic questions in English or French. Try: 'hello', 'how are you', 'goodbye'";
const INSTRUCTIONS_FR: &str = "Vous pouvez me poser des questions basiques en français ou en anglais. Essayez: 'bonjour', 'comment vas-tu', 'au revoir'";
const PLACEHOLDER: &str = "Tapez votre message / Type your message";
const INPUT_LABEL: &str = "Message input";
const HELP: &str = "[Enter] Send  [Up/Down/PgUp/PgDn] Scroll  [Esc] Quit";

/// Render the entire UI.
///
/// Returns how far the message list can scroll back at its drawn size.
/// The list takes focus while scrolled back; otherwise the input has it.
pub fn render(frame: &mut Frame, app: &App) -> usize {
    let area = frame.area();
    let theme = Theme::default();

    let header = Header::new(TITLE)
        .theme(theme.clone())
        .instruction(INSTRUCTIONS_EN)
        .instruction(INSTRUCTIONS_FR);

    // Create main layout: header, messages, input, footer
    let [header_area, chat_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(header.height(area.width)),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    header.render(frame, header_area);

    let state = app.controller().state();
    let entries: Vec<ChatEntry> = state
        .current_log()
        .iter()
        .map(|msg| ChatEntry {
            role: match msg.sender() {
                Sender::User => ChatRole::User,
                Sender::Bot => ChatRole::Bot,
            },
            text: msg.text(),
            timestamp: msg.timestamp(),
        })
        .collect();
    let browsing = app.scroll_back() > 0;
    let chat = ChatWidget::new(&entries)
        .scroll_back(app.scroll_back())
        .focused(browsing)
        .theme(theme.clone());
    let max_scroll_back = chat.max_scroll_back(chat_area);
    chat.render(frame, chat_area);

    InputBox::new(state.current_draft())
        .cursor(state.draft().cursor())
        .can_send(state.can_send())
        .placeholder(PLACEHOLDER)
        .label(INPUT_LABEL)
        .focused(!browsing)
        .theme(theme.clone())
        .render(frame, input_area);

    Footer::new(HELP)
        .status(app.status_message())
        .theme(theme)
        .render(frame, footer_area);

    max_scroll_back
}
