use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::core::models::Quest;
use crate::tui::theme::Entrance;

use super::quest_card::QuestCard;

/// Widest the quest card grows before it is centred.
pub const MAX_WIDTH: u16 = 96;

/// Shows the current quest, if any, as a single centred card.
pub struct QuestDisplay<'a> {
    quest: Option<&'a Quest>,
    focused: bool,
    entrance: Entrance,
}

impl<'a> QuestDisplay<'a> {
    pub fn new(quest: Option<&'a Quest>) -> Self {
        Self {
            quest,
            focused: false,
            entrance: Entrance::Done,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn card(&self) -> Option<QuestCard<'a>> {
        self.quest.map(|quest| {
            QuestCard::new(quest)
                .focused(self.focused)
                .entrance(self.entrance)
        })
    }

    /// Rows wanted at `width`; zero without a quest.
    pub fn height_for(&self, width: u16) -> u16 {
        self.card()
            .map_or(0, |card| card.height_for(width.min(MAX_WIDTH)))
    }
}

impl Widget for QuestDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(card) = self.card() else {
            return;
        };
        let [centred] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
            .flex(ratatui::layout::Flex::Center)
            .areas(area);
        card.render(centred, buf);
    }
}
