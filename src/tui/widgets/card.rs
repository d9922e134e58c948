use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::tui::theme;

/// A styled card container: optional title and footer around a body.
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    title: Option<Line<'a>>,
    footer: Option<Line<'a>>,
    body: Text<'a>,
    border_style: Option<Style>,
    style: Style,
}

impl<'a> Card<'a> {
    pub fn new(body: impl Into<Text<'a>>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Line::from(Span::styled(
            format!(" {} ", title.into()),
            theme::heading(),
        )));
        self
    }

    pub fn footer(mut self, footer: impl Into<Line<'a>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Style patched over the whole card (e.g. entrance dimming).
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rows the body occupies when wrapped to `width` columns, plus borders.
    pub fn height_for(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1) as usize;
        let rows: usize = self
            .body
            .lines
            .iter()
            .map(|line| line.width().max(1).div_ceil(inner))
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style.unwrap_or_else(theme::border_default));
        if let Some(title) = self.title {
            block = block.title_top(title);
        }
        if let Some(footer) = self.footer {
            block = block.title_bottom(footer);
        }

        Paragraph::new(self.body)
            .block(block)
            .wrap(Wrap { trim: false })
            .style(self.style)
            .render(area, buf);
    }
}
