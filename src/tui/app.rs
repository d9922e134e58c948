use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Focus, Notification, NotificationLevel};
use super::layout::{centered_rect, AppLayout};
use super::services::Services;
use super::theme::{self, Animation, FontRole};
use super::views::{
    ControlsEvent, FactionList, GeneratorControls, KeyOutcome, QuestCard, QuestDisplay, Stagger,
};
use super::widgets::{Select, SelectOption};
use crate::config::TuiConfig;
use crate::core::export::{export, export_to_markdown, ExportFormat, ExportTarget};
use crate::core::models::{Faction, FactionKey, Quest, MIN_FACTION_COUNT};

/// Width of the export format dropdown beside the controls.
const FORMAT_SELECT_WIDTH: u16 = 22;
/// Most notifications visible at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Pane with input focus.
    pub focus: Focus,
    /// Count stepper, entry field and Generate button.
    pub controls: GeneratorControls,
    /// Latest generated factions, replaced wholesale.
    pub factions: Vec<Faction>,
    /// Latest generated quest.
    pub quest: Option<Quest>,
    /// Names of factions selected for quest generation.
    pub selected: Vec<String>,
    /// Focused card in the faction grid.
    pub cursor: usize,
    /// Export format dropdown.
    pub export_format: Select,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Ticks since start.
    tick: u64,
    /// Tick at which the faction list was last replaced.
    factions_since: u64,
    /// Tick at which the quest was last replaced.
    quest_since: u64,
    config: TuiConfig,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Backend services handle.
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        services: Services,
        config: TuiConfig,
    ) -> Self {
        let mut controls = GeneratorControls::new(MIN_FACTION_COUNT);
        controls.set_focused(true);

        Self {
            running: true,
            focus: Focus::Controls,
            controls,
            factions: Vec::new(),
            quest: None,
            selected: Vec::new(),
            cursor: 0,
            export_format: export_format_select(),
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            tick: 0,
            factions_since: 0,
            quest_since: 0,
            config,
            event_rx,
            services,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms.max(1));
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key(key),
            AppEvent::Input(_) => {}
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::FactionsGenerated(factions) => {
                self.controls.set_loading(false);
                let count = factions.len();
                self.factions = factions;
                self.selected.clear();
                self.cursor = 0;
                self.factions_since = self.tick;
                self.push_notification(
                    format!("Generated {count} factions"),
                    NotificationLevel::Success,
                );
            }
            AppEvent::QuestGenerated(quest) => {
                self.controls.set_loading(false);
                let message = format!("Quest ready: {}", quest.title);
                self.quest = Some(quest);
                self.quest_since = self.tick;
                self.push_notification(message, NotificationLevel::Success);
            }
            AppEvent::GenerationFailed { kind, message } => {
                self.controls.set_loading(false);
                self.push_notification(
                    format!("Failed to generate {}: {message}", kind.label()),
                    NotificationLevel::Error,
                );
            }
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Priority 1: Help modal
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.handle_action(Action::CloseHelp);
            }
            return;
        }

        // Priority 2: Ctrl+C always quits
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.handle_action(Action::Quit);
            return;
        }

        // Priority 3: Focused pane
        if self.focus == Focus::Controls {
            match self.controls.handle_key(&key) {
                KeyOutcome::Ignored => {}
                KeyOutcome::Consumed => return,
                KeyOutcome::Event(ControlsEvent::Generate) => {
                    self.handle_action(Action::GenerateFactions);
                    return;
                }
                KeyOutcome::Event(ControlsEvent::CountChanged(count)) => {
                    log::debug!("Generation count set to {count}");
                    return;
                }
            }
        }

        // Priority 4: Global keybindings
        if let Some(action) = self.map_input_to_action(&key) {
            self.handle_action(action);
        }
    }

    fn map_input_to_action(&self, key: &KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Tab => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                KeyCode::Char('+') => Some(Action::Increment),
                KeyCode::Char('-') => Some(Action::Decrement),
                KeyCode::Char('g') | KeyCode::Enter => Some(Action::GenerateFactions),
                KeyCode::Char('Q') => Some(Action::GenerateQuest),
                KeyCode::Char(' ') => Some(Action::ToggleSelection),
                KeyCode::Char('c') => Some(Action::Copy),
                KeyCode::Char('e') => Some(Action::Export),
                KeyCode::Char('f') => Some(Action::CycleExportFormat),
                KeyCode::Right | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('l') => {
                    Some(Action::CursorNext)
                }
                KeyCode::Left | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('h') => {
                    Some(Action::CursorPrev)
                }
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrev => self.set_focus(self.focus.prev()),
            Action::CursorNext => {
                if self.focus == Focus::Factions && self.cursor + 1 < self.factions.len() {
                    self.cursor += 1;
                }
            }
            Action::CursorPrev => {
                if self.focus == Focus::Factions {
                    self.cursor = self.cursor.saturating_sub(1);
                }
            }
            Action::Increment => {
                self.controls.increment();
            }
            Action::Decrement => {
                self.controls.decrement();
            }
            Action::GenerateFactions => self.generate_factions(),
            Action::GenerateQuest => self.generate_quest(),
            Action::ToggleSelection => self.toggle_selection(),
            Action::Copy => self.copy_focused(),
            Action::Export => self.export_current(),
            Action::CycleExportFormat => {
                self.export_format
                    .cycle(|value| log::debug!("Export format set to {value}"));
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.controls.set_focused(focus == Focus::Controls);
        self.export_format.set_focused(false);
    }

    // ── Generation ──────────────────────────────────────────────────────

    fn generate_factions(&mut self) {
        if self.controls.generate().is_none() {
            return;
        }
        let count = self.controls.count();
        log::info!("Requesting {count} factions");
        self.controls.set_loading(true);
        self.services.spawn_factions(count);
    }

    /// Request a quest grounded in the selected factions, or none.
    fn generate_quest(&mut self) {
        if self.controls.is_loading() {
            return;
        }
        let chosen = self.selected_factions();
        log::info!("Requesting quest with {} factions", chosen.len());
        self.controls.set_loading(true);
        self.services
            .spawn_quest((!chosen.is_empty()).then_some(chosen));
    }

    pub fn selected_factions(&self) -> Vec<Faction> {
        self.factions
            .iter()
            .filter(|f| self.selected.contains(&f.name))
            .cloned()
            .collect()
    }

    fn toggle_selection(&mut self) {
        if self.focus != Focus::Factions {
            return;
        }
        let Some(faction) = self.factions.get(self.cursor) else {
            return;
        };
        match faction.key(self.cursor) {
            FactionKey::Name(name) => {
                if let Some(pos) = self.selected.iter().position(|s| s == name) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(name.to_string());
                }
            }
            FactionKey::Index(_) => {
                self.push_notification(
                    "Unnamed factions cannot be selected".to_string(),
                    NotificationLevel::Warning,
                );
            }
        }
    }

    // ── Output ──────────────────────────────────────────────────────────

    fn copy_focused(&mut self) {
        let mut text = None;
        match self.focus {
            Focus::Factions => {
                if let Some(card) = self.faction_list().card(self.cursor) {
                    card.copy(|faction| {
                        text = Some(export_to_markdown(ExportTarget::Factions(
                            std::slice::from_ref(faction),
                        )));
                    });
                }
            }
            Focus::Quest => {
                if let Some(quest) = &self.quest {
                    QuestCard::new(quest)
                        .copy(|quest| text = Some(export_to_markdown(ExportTarget::Quest(quest))));
                }
            }
            Focus::Controls => {}
        }

        let Some(rendered) = text else {
            self.push_notification(
                "Focus a faction or quest to copy it".to_string(),
                NotificationLevel::Info,
            );
            return;
        };
        let result = rendered
            .map_err(|e| e.to_string())
            .and_then(|md| self.services.clipboard.copy(&md).map_err(|e| e.to_string()));
        match result {
            Ok(()) => self.push_notification("Copied to clipboard".to_string(), NotificationLevel::Success),
            Err(e) => {
                log::warn!("Copy failed: {e}");
                self.push_notification(format!("Copy failed: {e}"), NotificationLevel::Error);
            }
        }
    }

    pub fn current_export_format(&self) -> ExportFormat {
        self.export_format
            .value()
            .and_then(ExportFormat::from_value)
            .unwrap_or_default()
    }

    /// The focused quest, else the faction list, else the quest.
    fn export_target(&self) -> Option<ExportTarget<'_>> {
        match (&self.quest, self.factions.is_empty()) {
            (Some(quest), _) if self.focus == Focus::Quest => Some(ExportTarget::Quest(quest)),
            (_, false) => Some(ExportTarget::Factions(&self.factions)),
            (Some(quest), true) => Some(ExportTarget::Quest(quest)),
            (None, true) => None,
        }
    }

    fn export_current(&mut self) {
        let format = self.current_export_format();
        let result = self.export_target().map(|target| {
            let stem = target.file_stem();
            export(target, format)
                .and_then(|contents| self.services.exports.write(stem, format, &contents))
        });
        match result {
            None => {
                self.push_notification("Nothing to export yet".to_string(), NotificationLevel::Warning)
            }
            Some(Ok(path)) => self.push_notification(
                format!("Exported to {}", path.display()),
                NotificationLevel::Success,
            ),
            Some(Err(e)) => {
                log::error!("Export failed: {e}");
                self.push_notification(format!("Export failed: {e}"), NotificationLevel::Error);
            }
        }
    }

    // ── Notifications & tick ────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }
        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: self.config.notification_ttl_ticks,
        });
        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: advance animations, decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.controls.set_tick(self.tick);
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn faction_list(&self) -> FactionList<'_> {
        FactionList::new(&self.factions)
            .selected(&self.selected)
            .cursor(Some(self.cursor))
            .focused(self.focus == Focus::Factions)
            .stagger(Stagger {
                elapsed: self.tick.saturating_sub(self.factions_since),
                step: u64::from(self.config.stagger_ticks),
                tick_rate_ms: self.config.tick_rate_ms,
            })
    }

    fn quest_display(&self) -> QuestDisplay<'_> {
        let entrance = Animation::FadeIn.entrance(
            self.tick.saturating_sub(self.quest_since),
            0,
            self.config.tick_rate_ms,
        );
        QuestDisplay::new(self.quest.as_ref())
            .focused(self.focus == Focus::Quest)
            .entrance(entrance)
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let quest = self.quest_display();
        let quest_height = quest.height_for(area.width.saturating_sub(2));
        let layout = AppLayout::compute(area, self.controls.height() + 2, quest_height);

        self.render_header(frame, layout.header);
        self.render_controls(frame, layout.controls);
        self.render_factions(frame, layout.factions);
        if let Some(quest_area) = layout.quest {
            frame.render_widget(quest, quest_area);
        }
        self.render_status_bar(frame, layout.status);

        self.render_notifications(frame, area);
        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled("✦ The Lore Engine ✦", theme::title())),
            Line::from(Span::styled(
                "Forge factions and quests for your campaign",
                FontRole::Accent.style(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme::border_default()));
        frame.render_widget(header, area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let block = if self.focus == Focus::Controls {
            theme::block_focused(Focus::Controls.label())
        } else {
            theme::block_default(Focus::Controls.label())
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [controls_area, format_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(FORMAT_SELECT_WIDTH),
        ])
        .areas(inner);
        frame.render_widget(&self.controls, controls_area);

        let [select_area, _] = Layout::vertical([
            Constraint::Length(self.export_format.height()),
            Constraint::Min(0),
        ])
        .areas(format_area);
        frame.render_widget(&self.export_format, select_area);
    }

    fn render_factions(&self, frame: &mut Frame, area: Rect) {
        let title = if self.selected.is_empty() {
            format!("{} ({})", Focus::Factions.label(), self.factions.len())
        } else {
            format!(
                "{} ({}, {} selected)",
                Focus::Factions.label(),
                self.factions.len(),
                self.selected.len()
            )
        };
        let block = if self.focus == Focus::Factions {
            theme::block_focused(&title)
        } else {
            theme::block_default(&title)
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(self.faction_list(), inner);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let activity = if self.controls.is_loading() {
            Span::styled("generating…", Style::default().fg(theme::WARNING))
        } else {
            Span::styled("ready", Style::default().fg(theme::SUCCESS))
        };

        let status = Line::from(vec![
            Span::styled(" LORE ENGINE ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(self.focus.label(), theme::highlight()),
            Span::raw(" │ "),
            activity,
            Span::raw(" │ "),
            Span::styled("Export:", theme::key_hint()),
            Span::raw(format!(" {} ", self.current_export_format().label())),
            Span::raw("│ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":focus "),
            Span::styled("g", theme::key_hint()),
            Span::raw(":factions "),
            Span::styled("Q", theme::key_hint()),
            Span::raw(":quest "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = u16::try_from(self.notifications.len())
            .unwrap_or(u16::MAX)
            .min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1.min(area.height.saturating_sub(height));

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("Tab / Shift+Tab", "Next / previous pane"),
            ("g / Enter", "Generate factions"),
            ("Q", "Generate a quest from selected factions"),
            ("+ / -", "Change the count"),
            ("c", "Copy focused faction or quest"),
            ("e", "Export factions or quest"),
            ("f", "Cycle export format"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
            ("", ""),
            ("Generator:", ""),
            ("0-9 / Backspace", "Edit the count directly"),
            ("Up / Down", "Step the count"),
            ("", ""),
            ("Factions:", ""),
            ("h/j/k/l, arrows", "Move between cards"),
            ("Space", "Select for quest generation"),
        ];

        let heading = Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", heading)),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), heading)));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{key:<20}"), theme::highlight()),
                    Span::styled(desc, FontRole::Body.style()),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", theme::highlight()),
            Span::raw(" or "),
            Span::styled("Esc", theme::highlight()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused());

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

fn export_format_select() -> Select {
    let options = ExportFormat::ALL
        .iter()
        .map(|f| SelectOption::new(f.value(), f.label()))
        .collect();
    let mut select = Select::new(options)
        .unwrap_or_else(|e| {
            log::error!("Export format options invalid: {e}");
            Select::default()
        })
        .with_placeholder("Export format");
    select.set_value(ExportFormat::default().value());
    select
}
