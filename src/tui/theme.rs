//! Arcane & Parchment theme for the Lore Engine TUI.
//!
//! Four colour ramps (arcane, gold, crimson, parchment) with tailwind-style
//! steps 50..900, three font roles and two entrance animations. Views
//! import from here instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

// ── Ramps ───────────────────────────────────────────────────────────────────

/// A ten-step colour ramp indexed like tailwind (50, 100, ..., 900).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp([Color; 10]);

impl Ramp {
    /// Colour at a tailwind step. Unknown steps snap to the nearest lower one.
    pub const fn shade(&self, step: u16) -> Color {
        let idx = match step {
            0..=99 => 0,
            100..=899 => (step / 100) as usize,
            _ => 9,
        };
        self.0[idx]
    }
}

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Deep purple: headings, secondary actions, focus.
pub const ARCANE: Ramp = Ramp([
    hex(0xF3E8F7),
    hex(0xE1C9EE),
    hex(0xC599DD),
    hex(0xA969CC),
    hex(0x8D39BB),
    hex(0x6B2C6B),
    hex(0x4A1A4A),
    hex(0x3B153B),
    hex(0x2C102C),
    hex(0x1D0A1D),
]);

/// Gold: primary actions, card borders.
pub const GOLD: Ramp = Ramp([
    hex(0xFFFBEB),
    hex(0xFEF3C7),
    hex(0xFDE68A),
    hex(0xFCD34D),
    hex(0xFBBF24),
    hex(0xD4AF37),
    hex(0xB8960F),
    hex(0x92750A),
    hex(0x6C5608),
    hex(0x463705),
]);

/// Crimson: danger, conflict, errors.
pub const CRIMSON: Ramp = Ramp([
    hex(0xFEF2F2),
    hex(0xFEE2E2),
    hex(0xFECACA),
    hex(0xFCA5A5),
    hex(0xF87171),
    hex(0xDC143C),
    hex(0xB22222),
    hex(0x8B0000),
    hex(0x660000),
    hex(0x4D0000),
]);

/// Parchment: body text and surfaces.
pub const PARCHMENT: Ramp = Ramp([
    hex(0xFDFCFA),
    hex(0xF5E6D3),
    hex(0xE8D7C3),
    hex(0xD4C4B0),
    hex(0xC0B29D),
    hex(0xACA08A),
    hex(0x8B7D6B),
    hex(0x6A5F52),
    hex(0x4A423A),
    hex(0x2A2521),
]);

// ── Semantic aliases ────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = PARCHMENT.shade(100);
/// Muted text: field labels, hints.
pub const TEXT_MUTED: Color = PARCHMENT.shade(500);
/// Dim text: disabled items, faint hints.
pub const TEXT_DIM: Color = PARCHMENT.shade(700);
/// Card and primary-action accent.
pub const ACCENT: Color = GOLD.shade(500);
/// Focus colour.
pub const FOCUS: Color = ARCANE.shade(300);
/// Error / destructive.
pub const ERROR: Color = CRIMSON.shade(500);
/// Success notifications.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Warning notifications.
pub const WARNING: Color = GOLD.shade(400);
/// Informational notifications.
pub const INFO: Color = ARCANE.shade(200);

// ── Font roles ──────────────────────────────────────────────────────────────

/// Terminal stand-ins for the three typefaces of the design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Display serif for titles.
    Heading,
    /// Book serif for running text.
    Body,
    /// Decorative face for flavour text.
    Accent,
}

impl FontRole {
    pub fn style(self) -> Style {
        match self {
            FontRole::Heading => Style::default()
                .fg(ARCANE.shade(200))
                .add_modifier(Modifier::BOLD),
            FontRole::Body => Style::default().fg(TEXT),
            FontRole::Accent => Style::default()
                .fg(GOLD.shade(300))
                .add_modifier(Modifier::ITALIC),
        }
    }
}

// ── Animations ──────────────────────────────────────────────────────────────

/// Named entrance animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Opacity 0 → 1 over 500 ms.
    FadeIn,
    /// Rise 20px while fading in, over 400 ms.
    SlideUp,
}

/// How far along an entrance animation a widget is on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Not started; nothing is drawn.
    Pending,
    /// In flight; drawn dimmed, offset by `rise` rows.
    Entering { rise: u16 },
    /// Finished; drawn normally.
    Done,
}

impl Animation {
    pub fn duration_ms(self) -> u64 {
        match self {
            Animation::FadeIn => 500,
            Animation::SlideUp => 400,
        }
    }

    /// Duration in ticks at `tick_rate_ms` (at least one tick).
    pub fn duration_ticks(self, tick_rate_ms: u64) -> u64 {
        self.duration_ms().div_ceil(tick_rate_ms.max(1)).max(1)
    }

    /// Phase after `elapsed` ticks of a run that starts at `delay` ticks.
    pub fn entrance(self, elapsed: u64, delay: u64, tick_rate_ms: u64) -> Entrance {
        if elapsed < delay {
            return Entrance::Pending;
        }
        let progress = elapsed - delay;
        if progress >= self.duration_ticks(tick_rate_ms) {
            return Entrance::Done;
        }
        let rise = match self {
            Animation::FadeIn => 0,
            Animation::SlideUp => 1,
        };
        Entrance::Entering { rise }
    }
}

impl Entrance {
    /// Style patch applied to a widget in this phase.
    pub fn style(self) -> Style {
        match self {
            Entrance::Entering { .. } => Style::default().add_modifier(Modifier::DIM),
            Entrance::Pending | Entrance::Done => Style::default(),
        }
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Screen title.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    FontRole::Heading.style()
}

/// Small field label above a value.
pub fn label() -> Style {
    Style::default().fg(PARCHMENT.shade(400))
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(FOCUS)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(GOLD.shade(600))
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(GOLD.shade(300)).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(ARCANE.shade(900))
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// NPC tag chip.
pub fn tag() -> Style {
    Style::default().fg(ARCANE.shade(800)).bg(ARCANE.shade(100))
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_default())
}
