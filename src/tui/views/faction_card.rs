//! One faction rendered as a card with a copy action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span, Text},
    widgets::Widget,
};

use crate::core::models::Faction;
use crate::tui::theme::{self, Entrance, FontRole};
use crate::tui::widgets::{Button, ButtonSize, ButtonVariant, Card};

pub const COPY_LABEL: &str = "Copy to Clipboard";

pub struct FactionCard<'a> {
    faction: &'a Faction,
    selected: bool,
    focused: bool,
    entrance: Entrance,
}

impl<'a> FactionCard<'a> {
    pub fn new(faction: &'a Faction) -> Self {
        Self {
            faction,
            selected: false,
            focused: false,
            entrance: Entrance::Done,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn faction(&self) -> &'a Faction {
        self.faction
    }

    /// Hand the whole faction to the caller; the card does no clipboard I/O.
    pub fn copy<F: FnOnce(&Faction)>(&self, on_copy: F) {
        on_copy(self.faction);
    }

    fn copy_button(&self) -> Button<'static> {
        Button::new(COPY_LABEL)
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Sm)
            .focused(self.focused)
    }

    fn body(&self) -> Text<'a> {
        let faction = self.faction;
        let mut lines = vec![
            Line::from(Span::styled("Symbol", theme::label())),
            Line::from(Span::styled(
                faction.symbol.as_str(),
                FontRole::Body.style().add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
            Line::from(Span::styled("Values", theme::label())),
            Line::from(Span::styled(faction.values.as_str(), FontRole::Body.style())),
        ];
        if let Some(vibe) = faction.soundtrack() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("♪ ", FontRole::Accent.style()),
                Span::styled("Soundtrack Vibe", theme::label()),
            ]));
            lines.push(Line::from(Span::styled(vibe, FontRole::Body.style())));
        }
        Text::from(lines)
    }

    fn card(&self) -> Card<'a> {
        let border = if self.selected {
            theme::highlight()
        } else if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        Card::new(self.body())
            .title(self.faction.name.as_str())
            .footer(self.copy_button().line())
            .border_style(border)
            .style(self.entrance.style())
    }

    /// Rows needed at `width` columns.
    pub fn height_for(&self, width: u16) -> u16 {
        self.card().height_for(width)
    }
}

impl Widget for FactionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match self.entrance {
            Entrance::Pending => return,
            Entrance::Entering { rise } => Rect {
                y: area.y.saturating_add(rise),
                height: area.height.saturating_sub(rise),
                ..area
            },
            Entrance::Done => area,
        };
        self.card().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    fn faction(vibe: Option<&str>) -> Faction {
        Faction::new(
            "Iron Choir",
            "A bell cast from swords",
            "Discipline",
            vibe.map(str::to_string),
        )
    }

    fn render(card: FactionCard<'_>, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_renders_fields_and_copy_button() {
        let f = faction(Some("War drums"));
        let text = render(FactionCard::new(&f), 40, 12).join("\n");
        assert!(text.contains("Iron Choir"));
        assert!(text.contains("A bell cast from swords"));
        assert!(text.contains("Discipline"));
        assert!(text.contains("Soundtrack Vibe"));
        assert!(text.contains("War drums"));
        assert!(text.contains(COPY_LABEL));
    }

    #[test]
    fn test_soundtrack_section_omitted_when_absent() {
        let f = faction(None);
        let text = render(FactionCard::new(&f), 40, 12).join("\n");
        assert!(!text.contains("Soundtrack"));
    }

    #[test]
    fn test_copy_passes_full_faction() {
        let f = faction(Some("War drums"));
        let mut copied = None;
        FactionCard::new(&f).copy(|faction| copied = Some(faction.clone()));
        assert_eq!(copied, Some(f));
    }

    #[test]
    fn test_pending_entrance_draws_nothing() {
        let f = faction(None);
        let lines = render(FactionCard::new(&f).entrance(Entrance::Pending), 30, 8);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_selected_uses_highlight_border() {
        let f = faction(None);
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        FactionCard::new(&f).selected(true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, theme::GOLD.shade(300));
    }

    #[test]
    fn test_height_grows_with_soundtrack() {
        let with = faction(Some("War drums"));
        let without = faction(None);
        assert!(FactionCard::new(&with).height_for(40) > FactionCard::new(&without).height_for(40));
    }
}
