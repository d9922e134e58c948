use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::tui::theme;

/// One selectable `{value, label}` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Option values must be unique so a value identifies one row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate select option value: {0}")]
pub struct DuplicateOption(pub String);

/// A dropdown. Closed, it shows the selected label (or the placeholder);
/// open, it lists the placeholder as a disabled first row followed by
/// the options.
#[derive(Debug, Clone, Default)]
pub struct Select {
    options: Vec<SelectOption>,
    placeholder: Option<String>,
    selected: Option<usize>,
    highlighted: usize,
    open: bool,
    focused: bool,
}

impl Select {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, DuplicateOption> {
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.value == option.value) {
                return Err(DuplicateOption(option.value.clone()));
            }
        }
        Ok(Self {
            options,
            placeholder: None,
            selected: None,
            highlighted: 0,
            open: false,
            focused: false,
        })
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Value of the selected option; `None` while the placeholder shows.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.value.as_str())
    }

    /// Select the option with `value`. Unknown values (including the
    /// placeholder's empty value) are ignored. Returns whether it matched.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(i) => {
                self.selected = Some(i);
                self.highlighted = i;
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.open = false;
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        if self.open {
            self.highlighted = self.selected.unwrap_or(0);
        }
    }

    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1).min(self.options.len() - 1);
        }
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Commit the highlighted option and close. `on_change` receives the
    /// new value when the selection changed.
    pub fn confirm<F: FnOnce(&str)>(&mut self, on_change: F) {
        self.open = false;
        if self.options.is_empty() || self.selected == Some(self.highlighted) {
            return;
        }
        self.selected = Some(self.highlighted);
        on_change(&self.options[self.highlighted].value);
    }

    /// Select the next option, wrapping around. Used when the dropdown is
    /// cycled without opening it.
    pub fn cycle<F: FnOnce(&str)>(&mut self, on_change: F) {
        if self.options.is_empty() {
            return;
        }
        let next = self.selected.map_or(0, |i| (i + 1) % self.options.len());
        self.highlighted = next;
        self.confirm(on_change);
    }

    /// Rows needed in the current state.
    pub fn height(&self) -> u16 {
        let rows = if self.open {
            self.options.len() + usize::from(self.placeholder.is_some())
        } else {
            1
        };
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn closed_line(&self) -> Line<'_> {
        let label = match (self.selected.and_then(|i| self.options.get(i)), &self.placeholder) {
            (Some(option), _) => Span::styled(option.label.as_str(), theme::FontRole::Body.style()),
            (None, Some(placeholder)) => Span::styled(placeholder.as_str(), theme::dim()),
            (None, None) => Span::raw(""),
        };
        Line::from(vec![label, Span::styled(" ▾", Style::default().fg(theme::GOLD.shade(600)))])
    }

    fn open_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::with_capacity(self.options.len() + 1);
        if let Some(placeholder) = &self.placeholder {
            lines.push(Line::from(Span::styled(
                placeholder.as_str(),
                theme::dim().add_modifier(Modifier::ITALIC),
            )));
        }
        for (i, option) in self.options.iter().enumerate() {
            let marker = if Some(i) == self.selected { "● " } else { "  " };
            let style = if i == self.highlighted {
                theme::highlight().add_modifier(Modifier::REVERSED)
            } else {
                theme::FontRole::Body.style()
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", option.label),
                style,
            )));
        }
        lines
    }
}

impl Widget for &Select {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            theme::border_focused()
        } else {
            Style::default().fg(theme::GOLD.shade(400))
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let lines = if self.open {
            self.open_lines()
        } else {
            vec![self.closed_line()]
        };
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    fn formats() -> Select {
        Select::new(vec![
            SelectOption::new("markdown", "Markdown"),
            SelectOption::new("json", "JSON"),
        ])
        .unwrap()
        .with_placeholder("Export format")
    }

    #[test]
    fn test_duplicate_values_rejected() {
        let err = Select::new(vec![
            SelectOption::new("a", "A"),
            SelectOption::new("a", "Also A"),
        ])
        .unwrap_err();
        assert_eq!(err, DuplicateOption("a".to_string()));
    }

    #[test]
    fn test_starts_on_placeholder() {
        let select = formats();
        assert_eq!(select.value(), None);
    }

    #[test]
    fn test_placeholder_is_never_selectable() {
        let mut select = formats();
        assert!(!select.set_value(""));
        select.toggle_open();
        select.highlight_prev();
        select.highlight_prev();
        select.confirm(|_| {});
        assert_eq!(select.value(), Some("markdown"));
    }

    #[test]
    fn test_confirm_reports_change_once() {
        let mut select = formats();
        let mut changes = Vec::new();
        select.toggle_open();
        select.highlight_next();
        select.confirm(|v| changes.push(v.to_string()));
        select.toggle_open();
        select.confirm(|v| changes.push(v.to_string()));
        assert_eq!(changes, vec!["json"]);
        assert!(!select.is_open());
    }

    #[test]
    fn test_cycle_wraps() {
        let mut select = formats();
        select.cycle(|_| {});
        assert_eq!(select.value(), Some("markdown"));
        select.cycle(|_| {});
        assert_eq!(select.value(), Some("json"));
        select.cycle(|_| {});
        assert_eq!(select.value(), Some("markdown"));
    }

    #[test]
    fn test_render_open_lists_placeholder_first() {
        let mut select = formats();
        select.toggle_open();
        assert_eq!(select.height(), 5);
        let area = Rect::new(0, 0, 24, select.height());
        let mut buf = Buffer::empty(area);
        (&select).render(area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[1].contains("Export format"));
        assert!(lines[2].contains("Markdown"));
        assert!(lines[3].contains("JSON"));
    }

    #[test]
    fn test_render_closed_shows_selection() {
        let mut select = formats();
        select.set_value("json");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        (&select).render(area, &mut buf);
        assert!(buffer_lines(&buf)[1].contains("JSON ▾"));
    }
}
