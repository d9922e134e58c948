//! Count stepper, numeric entry and the Generate button.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::models::{MAX_FACTION_COUNT, MIN_FACTION_COUNT};
use crate::tui::theme;
use crate::tui::widgets::{Button, ButtonSize, ButtonVariant, Input, InputKind};

pub const COUNT_LABEL: &str = "Number to Generate";
pub const GENERATE_LABEL: &str = "✦ Generate";
const FIELD_WIDTH: u16 = 8;

/// Requests the controls send up to the page controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsEvent {
    Generate,
    CountChanged(u8),
}

/// Result of offering a key to the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Consumed,
    Event(ControlsEvent),
}

/// Parse direct entry. Anything that is not an integer in range is rejected.
pub fn parse_count(text: &str) -> Option<u8> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (i64::from(MIN_FACTION_COUNT)..=i64::from(MAX_FACTION_COUNT)).contains(n))
        .map(|n| n as u8)
}

#[derive(Debug, Clone)]
pub struct GeneratorControls {
    count: u8,
    loading: bool,
    focused: bool,
    tick: u64,
    input: Input,
}

impl Default for GeneratorControls {
    fn default() -> Self {
        Self::new(MIN_FACTION_COUNT)
    }
}

impl GeneratorControls {
    pub fn new(count: u8) -> Self {
        let count = count.clamp(MIN_FACTION_COUNT, MAX_FACTION_COUNT);
        Self {
            count,
            loading: false,
            focused: false,
            tick: 0,
            input: Input::new(InputKind::Number).with_value(&count.to_string()),
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.input.set_disabled(loading);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.input.set_focused(focused);
    }

    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    /// Text currently in the count field.
    pub fn entry(&self) -> &str {
        self.input.value()
    }

    pub fn can_increment(&self) -> bool {
        !self.loading && self.count < MAX_FACTION_COUNT
    }

    pub fn can_decrement(&self) -> bool {
        !self.loading && self.count > MIN_FACTION_COUNT
    }

    pub fn increment(&mut self) -> Option<ControlsEvent> {
        if !self.can_increment() {
            return None;
        }
        self.count += 1;
        self.sync_input();
        Some(ControlsEvent::CountChanged(self.count))
    }

    pub fn decrement(&mut self) -> Option<ControlsEvent> {
        if !self.can_decrement() {
            return None;
        }
        self.count -= 1;
        self.sync_input();
        Some(ControlsEvent::CountChanged(self.count))
    }

    /// Commit typed text when it parses to an in-range count. Rejected text
    /// is discarded and the field snaps back to the current count.
    pub fn commit_entry(&mut self, text: &str) -> Option<ControlsEvent> {
        if self.loading {
            return None;
        }
        match parse_count(text) {
            Some(count) => {
                self.count = count;
                Some(ControlsEvent::CountChanged(count))
            }
            None => {
                self.sync_input();
                None
            }
        }
    }

    pub fn generate(&self) -> Option<ControlsEvent> {
        (!self.loading).then_some(ControlsEvent::Generate)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Ignored;
        }
        let outcome = |event: Option<ControlsEvent>| event.map_or(KeyOutcome::Consumed, KeyOutcome::Event);

        match (key.modifiers, key.code) {
            (_, KeyCode::Char('+') | KeyCode::Up) => outcome(self.increment()),
            (_, KeyCode::Char('-') | KeyCode::Down) => outcome(self.decrement()),
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('g')) => outcome(self.generate()),
            (
                KeyModifiers::NONE,
                KeyCode::Char('0'..='9')
                | KeyCode::Backspace
                | KeyCode::Delete
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Home
                | KeyCode::End,
            ) => {
                let mut typed = None;
                if !self.input.handle_key(key, |text| typed = Some(text.to_string())) {
                    return KeyOutcome::Ignored;
                }
                outcome(typed.and_then(|text| self.commit_entry(&text)))
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Rows the controls occupy.
    pub fn height(&self) -> u16 {
        6
    }

    fn sync_input(&mut self) {
        self.input.set_value(&self.count.to_string());
    }

    fn stepper(&self, label: &'static str, enabled: bool) -> Button<'static> {
        Button::new(label)
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Sm)
            .disabled(!enabled)
    }

    fn generate_button(&self) -> Button<'static> {
        Button::new(GENERATE_LABEL)
            .variant(ButtonVariant::Primary)
            .size(ButtonSize::Lg)
            .loading(self.loading)
            .disabled(self.loading)
            .focused(self.focused)
            .tick(self.tick)
    }
}

impl Widget for &GeneratorControls {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [label_row, stepper_row, _, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(Span::styled(COUNT_LABEL, theme::label())))
            .centered()
            .render(label_row, buf);

        let minus = self.stepper("-", self.can_decrement());
        let plus = self.stepper("+", self.can_increment());
        let [minus_area, field_area, plus_area] = Layout::horizontal([
            Constraint::Length(minus.width()),
            Constraint::Length(FIELD_WIDTH),
            Constraint::Length(plus.width()),
        ])
        .flex(Flex::Center)
        .spacing(2)
        .areas(stepper_row);

        let middle = |r: Rect| Rect { y: r.y + 1, height: 1, ..r };
        minus.render(middle(minus_area), buf);
        self.input.render(field_area, buf);
        plus.render(middle(plus_area), buf);

        let generate = self.generate_button();
        let [button_area] = Layout::horizontal([Constraint::Length(generate.width())])
            .flex(Flex::Center)
            .areas(button_row);
        generate.render(button_area, buf);
    }
}
