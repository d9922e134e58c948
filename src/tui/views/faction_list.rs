//! Responsive grid of faction cards with a staggered entrance.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::models::Faction;
use crate::tui::theme::{self, Animation, Entrance};

use super::faction_card::FactionCard;

pub const EMPTY_MESSAGE: &str = "No factions yet. Generate some to get started!";

/// Grid columns for a given width: one on narrow terminals, three on wide.
pub fn columns_for(width: u16) -> usize {
    match width {
        0..80 => 1,
        80..120 => 2,
        _ => 3,
    }
}

/// Entrance clock shared by every card in the list. Card `i` starts
/// `i * step` ticks after the list was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub elapsed: u64,
    pub step: u64,
    pub tick_rate_ms: u64,
}

impl Stagger {
    pub fn entrance(&self, index: usize) -> Entrance {
        let delay = (index as u64).saturating_mul(self.step);
        Animation::SlideUp.entrance(self.elapsed, delay, self.tick_rate_ms)
    }
}

impl Default for Stagger {
    /// Every card already settled.
    fn default() -> Self {
        Self {
            elapsed: u64::MAX,
            step: 0,
            tick_rate_ms: 50,
        }
    }
}

pub struct FactionList<'a> {
    factions: &'a [Faction],
    selected: &'a [String],
    cursor: Option<usize>,
    focused: bool,
    stagger: Stagger,
}

impl<'a> FactionList<'a> {
    pub fn new(factions: &'a [Faction]) -> Self {
        Self {
            factions,
            selected: &[],
            cursor: None,
            focused: false,
            stagger: Stagger::default(),
        }
    }

    /// Names of the caller's selected factions. Matching is by name.
    pub fn selected(mut self, names: &'a [String]) -> Self {
        self.selected = names;
        self
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn is_selected(&self, faction: &Faction) -> bool {
        self.selected.iter().any(|name| *name == faction.name)
    }

    /// Card for the faction at `index`, configured for this frame.
    pub fn card(&self, index: usize) -> Option<FactionCard<'a>> {
        let faction = self.factions.get(index)?;
        Some(
            FactionCard::new(faction)
                .selected(self.is_selected(faction))
                .focused(self.focused && self.cursor == Some(index))
                .entrance(self.stagger.entrance(index)),
        )
    }

    /// Areas of the cards that fit in `area`, in input order. Rows scroll
    /// so the cursor's row stays visible.
    pub fn layout(&self, area: Rect) -> Vec<(usize, Rect)> {
        if self.factions.is_empty() || area.is_empty() {
            return Vec::new();
        }
        let cols = columns_for(area.width);
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols])
            .spacing(1)
            .split(area);

        let rows: Vec<(usize, u16)> = self
            .factions
            .chunks(cols)
            .enumerate()
            .map(|(row, chunk)| {
                let height = chunk
                    .iter()
                    .zip(columns.iter())
                    .map(|(faction, col)| FactionCard::new(faction).height_for(col.width))
                    .max()
                    .unwrap_or(0);
                (row * cols, height)
            })
            .collect();

        let cursor_row = self.cursor.map_or(0, |c| c / cols).min(rows.len() - 1);
        let mut first = 0;
        while first < cursor_row
            && rows[first..=cursor_row]
                .iter()
                .fold(0u16, |total, (_, h)| total.saturating_add(*h))
                > area.height
        {
            first += 1;
        }

        let mut placed = Vec::with_capacity(self.factions.len());
        let mut y = area.y;
        for &(start, height) in &rows[first..] {
            if y >= area.bottom() {
                break;
            }
            let height = height.min(area.bottom() - y);
            let end = (start + cols).min(self.factions.len());
            for (index, col) in (start..end).zip(columns.iter()) {
                placed.push((index, Rect::new(col.x, y, col.width, height)));
            }
            y += height;
        }
        placed
    }
}

impl Widget for FactionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.factions.is_empty() {
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .areas(area);
            Paragraph::new(vec![
                Line::from(Span::styled("📜", theme::label())),
                Line::default(),
                Line::from(Span::styled(
                    EMPTY_MESSAGE,
                    theme::muted().add_modifier(Modifier::ITALIC),
                )),
            ])
            .alignment(Alignment::Center)
            .render(middle, buf);
            return;
        }

        for (index, card_area) in self.layout(area) {
            if let Some(card) = self.card(index) {
                card.render(card_area, buf);
            }
        }
    }
}
