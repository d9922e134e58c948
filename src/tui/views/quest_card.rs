//! One quest rendered as a card with NPC tags and a copy action.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Widget,
};

use crate::core::models::Quest;
use crate::tui::theme::{self, Entrance, FontRole};
use crate::tui::widgets::{Button, ButtonVariant, Card};

pub const COPY_LABEL: &str = "Copy Quest";

pub struct QuestCard<'a> {
    quest: &'a Quest,
    focused: bool,
    entrance: Entrance,
}

impl<'a> QuestCard<'a> {
    pub fn new(quest: &'a Quest) -> Self {
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

    /// Hand the whole quest to the caller; the card does no clipboard I/O.
    pub fn copy<F: FnOnce(&Quest)>(&self, on_copy: F) {
        on_copy(self.quest);
    }

    /// One tag per normalized NPC name, in order.
    pub fn npc_tags(&self) -> Vec<String> {
        self.quest.npc_names()
    }

    fn body(&self) -> Text<'a> {
        let quest = self.quest;
        let mut lines = vec![
            Line::from(Span::styled(
                quest.brief.as_str(),
                FontRole::Body.style().add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("⚔ ", Style::default().fg(theme::CRIMSON.shade(500))),
                Span::styled(
                    "Conflict",
                    Style::default()
                        .fg(theme::CRIMSON.shade(400))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(quest.conflict.as_str(), FontRole::Body.style())),
            Line::default(),
            Line::from(vec![
                Span::styled("⌖ ", Style::default().fg(theme::GOLD.shade(600))),
                Span::styled("Location", theme::label().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(quest.location.as_str(), FontRole::Body.style())),
        ];

        let tags = self.npc_tags();
        if !tags.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Notable Characters",
                theme::label().add_modifier(Modifier::BOLD),
            )));
            let mut spans = Vec::with_capacity(tags.len() * 2);
            for tag in tags {
                if !spans.is_empty() {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {tag} "), theme::tag()));
            }
            lines.push(Line::from(spans));
        }
        Text::from(lines)
    }

    fn card(&self) -> Card<'a> {
        let copy = Button::new(COPY_LABEL)
            .variant(ButtonVariant::Outline)
            .focused(self.focused);
        let border = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        Card::new(self.body())
            .title(self.quest.title.as_str())
            .footer(copy.line().alignment(Alignment::Center))
            .border_style(border)
            .style(self.entrance.style())
    }

    pub fn height_for(&self, width: u16) -> u16 {
        self.card().height_for(width)
    }
}

impl Widget for QuestCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.entrance == Entrance::Pending {
            return;
        }
        self.card().render(area, buf);
    }
}
