use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Span, widgets::Widget};

use crate::tui::theme;

const FRAMES_SM: [&str; 4] = ["|", "/", "-", "\\"];
const FRAMES_MD: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const FRAMES_LG: [&str; 6] = ["◐ ◓", "◓ ◑", "◑ ◒", "◒ ◐", "◐ ◓", "◓ ◑"];

/// Spinner size
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    fn frames(self) -> &'static [&'static str] {
        match self {
            SpinnerSize::Sm => &FRAMES_SM,
            SpinnerSize::Md => &FRAMES_MD,
            SpinnerSize::Lg => &FRAMES_LG,
        }
    }
}

/// A frame-cycling loading glyph driven by the app tick.
#[derive(Debug, Clone, Copy)]
pub struct LoadingSpinner {
    size: SpinnerSize,
    tick: u64,
    style: Style,
}

impl LoadingSpinner {
    pub fn new(tick: u64) -> Self {
        Self {
            size: SpinnerSize::default(),
            tick,
            style: Style::default().fg(theme::GOLD.shade(400)),
        }
    }

    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The glyph for the current tick.
    pub fn frame(&self) -> &'static str {
        let frames = self.size.frames();
        frames[(self.tick % frames.len() as u64) as usize]
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.frame(), self.style)
    }
}

impl Widget for LoadingSpinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_span(area.x, area.y, &self.span(), area.width);
    }
}
