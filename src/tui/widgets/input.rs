use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::input_buffer::InputBuffer;
use crate::tui::theme;

/// Input type: which characters the field accepts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Number,
}

impl InputKind {
    fn accepts(self, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Number => c.is_ascii_digit() || c == '-',
        }
    }
}

/// A bordered single-line text field with an optional error message
/// underneath.
#[derive(Debug, Clone, Default)]
pub struct Input {
    kind: InputKind,
    buffer: InputBuffer,
    placeholder: String,
    title: Option<String>,
    error: Option<String>,
    focused: bool,
    disabled: bool,
}

impl Input {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.buffer.set_text(value);
        self
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.buffer.set_text(value);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Rows needed to draw the field (plus the error line, if any).
    pub fn height(&self) -> u16 {
        if self.error.is_some() {
            4
        } else {
            3
        }
    }

    /// Apply an editing key. `on_change` receives the new value whenever the
    /// text changes. Returns true if the key was consumed.
    pub fn handle_key<F: FnMut(&str)>(&mut self, key: &KeyEvent, mut on_change: F) -> bool {
        if self.disabled || key.kind != KeyEventKind::Press {
            return false;
        }
        let prev = self.buffer.text().to_string();

        let consumed = match (key.modifiers, key.code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                if self.kind.accepts(c) {
                    self.buffer.insert_char(c);
                }
                true
            }
            (_, KeyCode::Backspace) => {
                self.buffer.backspace();
                true
            }
            (_, KeyCode::Delete) => {
                self.buffer.delete();
                true
            }
            (_, KeyCode::Left) => {
                self.buffer.move_left();
                true
            }
            (_, KeyCode::Right) => {
                self.buffer.move_right();
                true
            }
            (_, KeyCode::Home) => {
                self.buffer.move_home();
                true
            }
            (_, KeyCode::End) => {
                self.buffer.move_end();
                true
            }
            _ => false,
        };

        if consumed && self.buffer.text() != prev {
            on_change(self.buffer.text());
        }
        consumed
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(theme::CRIMSON.shade(500))
        } else if self.focused {
            theme::border_focused()
        } else {
            Style::default().fg(theme::GOLD.shade(400))
        }
    }

    fn content_line(&self) -> Line<'_> {
        let text = self.buffer.text();
        if text.is_empty() && !self.focused {
            return Line::from(Span::styled(self.placeholder.as_str(), theme::dim()));
        }

        let body = if self.disabled {
            theme::dim()
        } else {
            theme::FontRole::Body.style()
        };
        if !self.focused {
            return Line::from(Span::styled(text, body));
        }

        // Draw the cursor as a reversed cell.
        let (head, tail) = self.buffer.split_at_cursor();
        let mut chars = tail.chars();
        let under = chars.next().map(|c| c.to_string()).unwrap_or_else(|| " ".into());
        let rest: String = chars.collect();
        Line::from(vec![
            Span::styled(head, body),
            Span::styled(under, body.add_modifier(Modifier::REVERSED)),
            Span::styled(rest, body),
        ])
    }
}

impl Widget for &Input {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [field, message] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());
        if let Some(title) = &self.title {
            block = block.title(Span::styled(format!(" {title} "), theme::label()));
        }

        Paragraph::new(self.content_line())
            .block(block)
            .render(field, buf);

        if let Some(error) = &self.error {
            if message.height > 0 {
                Paragraph::new(Span::styled(
                    error.as_str(),
                    Style::default().fg(theme::CRIMSON.shade(400)),
                ))
                .render(message, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_invokes_on_change() {
        let mut input = Input::new(InputKind::Text);
        let mut seen = Vec::new();
        input.handle_key(&key(KeyCode::Char('h')), |v| seen.push(v.to_string()));
        input.handle_key(&key(KeyCode::Char('i')), |v| seen.push(v.to_string()));
        assert_eq!(input.value(), "hi");
        assert_eq!(seen, vec!["h", "hi"]);
    }

    #[test]
    fn test_cursor_moves_do_not_fire_on_change() {
        let mut input = Input::new(InputKind::Text).with_value("abc");
        let mut fired = false;
        assert!(input.handle_key(&key(KeyCode::Left), |_| fired = true));
        assert!(!fired);
    }

    #[test]
    fn test_number_kind_rejects_letters() {
        let mut input = Input::new(InputKind::Number);
        let mut fired = 0;
        input.handle_key(&key(KeyCode::Char('x')), |_| fired += 1);
        input.handle_key(&key(KeyCode::Char('7')), |_| fired += 1);
        assert_eq!(input.value(), "7");
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_disabled_ignores_keys() {
        let mut input = Input::new(InputKind::Text);
        input.set_disabled(true);
        assert!(!input.handle_key(&key(KeyCode::Char('a')), |_| {}));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = Input::new(InputKind::Text).with_placeholder("Faction name");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);
        assert!(buffer_lines(&buf)[1].contains("Faction name"));
    }

    #[test]
    fn test_error_renders_below_with_crimson_border() {
        let mut input = Input::new(InputKind::Text).with_value("??");
        input.set_error(Some("Required".to_string()));
        assert_eq!(input.height(), 4);
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[3].starts_with("Required"));
        assert_eq!(buf[(0, 0)].fg, theme::CRIMSON.shade(500));
    }

    #[test]
    fn test_title_and_focused_cursor() {
        let mut input = Input::new(InputKind::Text)
            .with_title("Name")
            .with_value("ab");
        input.set_focused(true);
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);
        assert!(buffer_lines(&buf)[0].contains(" Name "));
        // Cursor sits after the text on a reversed blank cell.
        assert!(buf[(3, 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_no_error_line_without_error() {
        let input = Input::new(InputKind::Text);
        assert_eq!(input.height(), 3);
        assert!(input.error().is_none());
    }
}
