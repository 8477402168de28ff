//! Conversation log and draft input state.

use crate::chat::Message;

/// The in-progress, unsent text of the input box.
///
/// The cursor is a char index, so every edit is unicode-safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    text: String,
    cursor: usize,
}

impl DraftState {
    /// Current draft text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True iff the raw text has any content, whitespace included.
    pub fn is_non_empty(&self) -> bool {
        !self.text.is_empty()
    }

    /// Replace the whole draft and put the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// Empty the draft.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Remove the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at_cursor();
        }
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn remove_at_cursor(&mut self) {
        if let Some((byte_idx, ch)) = self.text.char_indices().nth(self.cursor) {
            self.text
                .replace_range(byte_idx..byte_idx + ch.len_utf8(), "");
        }
    }
}

/// Ordered message log plus the draft being typed.
///
/// The log is append-only. It is unbounded unless a cap is configured, in
/// which case the oldest messages are evicted first.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    log: Vec<Message>,
    draft: DraftState,
    max_messages: Option<usize>,
}

impl ConversationState {
    /// Create an empty, unbounded conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty conversation keeping at most `max_messages`.
    ///
    /// A cap of zero is treated as no cap.
    pub fn with_max_messages(max_messages: Option<usize>) -> Self {
        Self {
            max_messages: max_messages.filter(|max| *max > 0),
            ..Self::default()
        }
    }

    /// Append a message to the log.
    pub fn append_message(&mut self, msg: Message) {
        if let Some(max) = self.max_messages {
            while self.log.len() >= max {
                self.log.remove(0);
            }
        }
        self.log.push(msg);
    }

    /// Messages in chronological (and display) order.
    pub fn current_log(&self) -> &[Message] {
        &self.log
    }

    /// Most recently appended message.
    pub fn last_message(&self) -> Option<&Message> {
        self.log.last()
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    /// Current draft text.
    pub fn current_draft(&self) -> &str {
        self.draft.text()
    }

    /// Draft state including the cursor.
    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    /// Mutable draft for keystroke-level edits.
    pub fn draft_mut(&mut self) -> &mut DraftState {
        &mut self.draft
    }

    /// Whether the send control is enabled (draft length > 0).
    pub fn can_send(&self) -> bool {
        self.draft.is_non_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;

    #[test]
    fn test_append_preserves_order() {
        let mut state = ConversationState::new();
        state.append_message(Message::user("one"));
        state.append_message(Message::bot("two"));
        state.append_message(Message::user("three"));

        let texts: Vec<&str> = state.current_log().iter().map(Message::text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(state.last_message().map(Message::sender), Some(Sender::User));
    }

    #[test]
    fn test_can_send_counts_whitespace() {
        let mut state = ConversationState::new();
        assert!(!state.can_send());

        state.set_draft("   ");
        assert!(state.can_send());

        state.set_draft("");
        assert!(!state.can_send());
    }

    #[test]
    fn test_max_messages_evicts_oldest() {
        let mut state = ConversationState::with_max_messages(Some(2));
        for text in ["a", "b", "c"] {
            state.append_message(Message::user(text));
        }
        let texts: Vec<&str> = state.current_log().iter().map(Message::text).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_cap_is_unbounded() {
        let mut state = ConversationState::with_max_messages(Some(0));
        state.append_message(Message::user("a"));
        state.append_message(Message::user("b"));
        assert_eq!(state.current_log().len(), 2);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut state = ConversationState::new();
        for i in 0..500 {
            state.append_message(Message::user(i.to_string()));
        }
        assert_eq!(state.current_log().len(), 500);
    }

    #[test]
    fn test_draft_editing_is_unicode_safe() {
        let mut draft = DraftState::default();
        for c in "météo".chars() {
            draft.insert_char(c);
        }
        assert_eq!(draft.text(), "météo");
        assert_eq!(draft.cursor(), 5);

        draft.backspace();
        assert_eq!(draft.text(), "mété");

        draft.move_home();
        draft.move_right();
        draft.delete();
        assert_eq!(draft.text(), "mté");

        draft.move_left();
        draft.insert_char('M');
        assert_eq!(draft.text(), "Mmté");

        draft.move_end();
        assert_eq!(draft.cursor(), 4);
        draft.move_right();
        assert_eq!(draft.cursor(), 4);
    }

    #[test]
    fn test_set_and_clear_move_cursor() {
        let mut draft = DraftState::default();
        draft.set("hello");
        assert_eq!(draft.cursor(), 5);
        draft.clear();
        assert_eq!(draft.cursor(), 0);
        assert!(!draft.is_non_empty());
        draft.backspace();
        assert_eq!(draft.text(), "");
    }
}
