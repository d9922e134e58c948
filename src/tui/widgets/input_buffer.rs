//! Editable single-line text with a cursor, backing the `Input` widget.
//!
//! The cursor is counted in characters, not bytes, so multi-byte input
//! never splits a code point.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    content: String,
    /// Cursor position in chars, `0..=char_len`.
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the char at `index`, or the end of the string.
    fn byte_at(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.content.remove(at);
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_at(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Replace the content, placing the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor = self.char_len();
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Text before and from the cursor.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.content.split_at(self.byte_at(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> InputBuffer {
        let mut buf = InputBuffer::new();
        buf.set_text(text);
        buf
    }

    #[test]
    fn test_typing_advances_cursor() {
        let mut buf = InputBuffer::new();
        buf.insert_char('4');
        buf.insert_char('2');
        assert_eq!(buf.text(), "42");
        assert_eq!(buf.cursor_position(), 2);
    }

    #[test]
    fn test_insert_mid_text() {
        let mut buf = buffer("13");
        buf.move_left();
        buf.insert_char('2');
        assert_eq!(buf.text(), "123");
        assert_eq!(buf.split_at_cursor(), ("12", "3"));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buf = buffer("7");
        buf.move_home();
        buf.backspace();
        assert_eq!(buf.text(), "7");
        buf.move_end();
        buf.backspace();
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut buf = buffer("abc");
        buf.move_home();
        buf.delete();
        assert_eq!(buf.text(), "bc");
        buf.move_end();
        buf.delete();
        assert_eq!(buf.text(), "bc");
    }

    #[test]
    fn test_cursor_clamps_to_bounds() {
        let mut buf = buffer("ab");
        buf.move_right();
        assert_eq!(buf.cursor_position(), 2);
        buf.move_home();
        buf.move_left();
        assert_eq!(buf.cursor_position(), 0);
    }

    #[test]
    fn test_multibyte_chars_stay_whole() {
        let mut buf = buffer("✦é");
        assert_eq!(buf.cursor_position(), 2);
        buf.move_left();
        assert_eq!(buf.split_at_cursor(), ("✦", "é"));
        buf.backspace();
        assert_eq!(buf.text(), "é");
    }
}
