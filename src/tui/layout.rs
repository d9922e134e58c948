//! Root layout: header, generator controls, faction grid, quest, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the title banner.
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the status bar.
pub const STATUS_HEIGHT: u16 = 1;
/// Largest share of the screen the quest pane may take.
pub const QUEST_MAX_PERCENT: u16 = 45;

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub controls: Rect,
    pub factions: Rect,
    /// Quest pane (None while there is no quest).
    pub quest: Option<Rect>,
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    ///
    /// `quest_height` is the height the quest pane wants; zero hides it.
    pub fn compute(area: Rect, controls_height: u16, quest_height: u16) -> Self {
        let quest_height = quest_height.min(area.height * QUEST_MAX_PERCENT / 100);

        let [header, controls, factions, quest, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(controls_height),
            Constraint::Min(0),
            Constraint::Length(quest_height),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        AppLayout {
            header,
            controls,
            factions,
            quest: (quest.height > 0).then_some(quest),
            status,
        }
    }
}

/// Calculate a centered rect using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, centre, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    centre
}
