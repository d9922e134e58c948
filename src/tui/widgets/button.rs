use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::spinner::{LoadingSpinner, SpinnerSize};
use crate::tui::theme;

/// Label shown instead of the button content while loading.
pub const LOADING_LABEL: &str = "Loading...";

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    pub fn style(&self) -> Style {
        match self {
            ButtonVariant::Primary => Style::default()
                .fg(theme::ARCANE.shade(900))
                .bg(theme::GOLD.shade(500))
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default()
                .fg(theme::PARCHMENT.shade(50))
                .bg(theme::ARCANE.shade(600)),
            ButtonVariant::Danger => Style::default()
                .fg(theme::PARCHMENT.shade(50))
                .bg(theme::CRIMSON.shade(600)),
            ButtonVariant::Outline => Style::default().fg(theme::GOLD.shade(600)),
        }
    }

    /// Outline buttons draw brackets instead of a filled background.
    fn brackets(&self) -> (&'static str, &'static str) {
        match self {
            ButtonVariant::Outline => ("[", "]"),
            _ => (" ", " "),
        }
    }
}

/// Button size: horizontal padding around the label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn padding(&self) -> usize {
        match self {
            ButtonSize::Sm => 1,
            ButtonSize::Md => 2,
            ButtonSize::Lg => 3,
        }
    }
}

/// A styled button. Configuration in, rendered line out; `activate` gates
/// the caller's callback on the disabled/loading state.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    disabled: bool,
    focused: bool,
    tick: u64,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            loading: false,
            disabled: false,
            focused: false,
            tick: 0,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Tick used to animate the loading spinner.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Invoke `on_click` unless the button is disabled or loading.
    /// Returns whether the callback ran.
    pub fn activate<F: FnOnce()>(&self, on_click: F) -> bool {
        if self.is_disabled() {
            return false;
        }
        on_click();
        true
    }

    /// The visible text between the brackets.
    pub fn content(&self) -> String {
        if self.loading {
            let spinner = LoadingSpinner::new(self.tick).size(SpinnerSize::Sm);
            format!("{} {LOADING_LABEL}", spinner.frame())
        } else {
            self.label.to_string()
        }
    }

    fn style(&self) -> Style {
        let mut style = self.variant.style();
        if self.is_disabled() {
            style = style.add_modifier(Modifier::DIM);
        } else if self.focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    pub fn line(&self) -> Line<'static> {
        let (open, close) = self.variant.brackets();
        let pad = " ".repeat(self.size.padding());
        Line::from(Span::styled(
            format!("{open}{pad}{}{pad}{close}", self.content()),
            self.style(),
        ))
    }

    /// Rendered width in cells.
    pub fn width(&self) -> u16 {
        u16::try_from(self.line().width()).unwrap_or(u16::MAX)
    }
}

impl Widget for &Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
