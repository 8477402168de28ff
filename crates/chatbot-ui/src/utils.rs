//! Text utilities for TUI rendering.

use unicode_width::UnicodeWidthChar;

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Wrap text to `width` columns, prefixing every line with `indent`.
///
/// Breaks at the last space that fits, or mid-word when a word is longer
/// than a line.
pub fn wrap_text_indented(text: &str, width: usize, indent: &str) -> Vec<String> {
    let indent_width: usize = indent.chars().map(char_width).sum();
    let effective_width = width.saturating_sub(indent_width);

    if effective_width == 0 {
        return vec![format!("{}{}", indent, text)];
    }

    let mut lines = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            lines.push(indent.to_string());
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut start = 0;

        while start < chars.len() {
            // Find how many chars fit in the remaining width
            let mut end = start;
            let mut used = 0;
            while end < chars.len() && used + char_width(chars[end]) <= effective_width {
                used += char_width(chars[end]);
                end += 1;
            }

            if end == chars.len() {
                let remaining: String = chars[start..].iter().collect();
                lines.push(format!("{}{}", indent, remaining));
                break;
            }

            // Always make progress, even for a char wider than the line
            let end = end.max(start + 1);

            // Prefer breaking at a space
            let actual_end = chars[start..end]
                .iter()
                .rposition(|c| *c == ' ')
                .filter(|offset| *offset > 0)
                .map(|offset| start + offset)
                .unwrap_or(end);

            let chunk: String = chars[start..actual_end].iter().collect();
            lines.push(format!("{}{}", indent, chunk.trim_end()));

            // Skip past the space
            start = actual_end;
            while start < chars.len() && chars[start] == ' ' {
                start += 1;
            }
        }
    }

    if lines.is_empty() {
        lines.push(indent.to_string());
    }

    lines
}

/// Truncate a string to fit within a given width, adding ellipsis if needed.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width < 3 {
        return text.chars().take(max_width).collect();
    }

    let total: usize = text.chars().map(char_width).sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut width = 0;
    let mut result = String::new();

    for ch in text.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width - 3 {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str("...");
    result
}

/// Slice of `text` that keeps the char at `cursor` visible in `width`
/// columns, plus the cursor column within that slice.
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    // Walk back from the cursor until the window is full, leaving one
    // column for the cursor itself.
    let mut start = cursor;
    let mut used = 1;
    while start > 0 && used + char_width(chars[start - 1]) <= width {
        start -= 1;
        used += char_width(chars[start]);
    }

    let mut visible = String::new();
    let mut filled = 0;
    let mut cursor_col = 0;
    for (i, ch) in chars.iter().enumerate().skip(start) {
        if i == cursor {
            cursor_col = filled;
        }
        if filled + char_width(*ch) > width {
            break;
        }
        visible.push(*ch);
        filled += char_width(*ch);
    }
    if cursor == chars.len() {
        cursor_col = filled;
    }

    (visible, cursor_col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_indented_breaks_at_space() {
        let wrapped = wrap_text_indented("Hello world again", 8, "  ");
        assert_eq!(wrapped, vec!["  Hello", "  world", "  again"]);
    }

    #[test]
    fn test_wrap_text_indented_long_word() {
        let wrapped = wrap_text_indented("abcdefgh", 4, "");
        assert_eq!(wrapped, vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_text_indented_empty() {
        assert_eq!(wrap_text_indented("", 10, "  "), vec!["  "]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello world", 8), "Hello...");
        assert_eq!(truncate("Hi", 10), "Hi");
        assert_eq!(truncate("Hello", 5), "Hello");
    }

    #[test]
    fn test_visible_window_short_text() {
        assert_eq!(visible_window("hello", 5, 20), ("hello".to_string(), 5));
        assert_eq!(visible_window("hello", 0, 20), ("hello".to_string(), 0));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let (visible, col) = visible_window("abcdefghij", 10, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);
    }
}
