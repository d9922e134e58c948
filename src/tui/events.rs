use crate::core::models::{Faction, Quest};

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for animations, notification TTLs, etc.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A faction generation task finished.
    FactionsGenerated(Vec<Faction>),
    /// A quest generation task finished.
    QuestGenerated(Quest),
    /// A generation task failed; `message` is user-facing.
    GenerationFailed { kind: Generation, message: String },
    /// A resolved action to execute.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// Which backend generation a task performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    Factions,
    Quest,
}

impl Generation {
    pub fn label(self) -> &'static str {
        match self {
            Generation::Factions => "factions",
            Generation::Quest => "quest",
        }
    }
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusNext,
    FocusPrev,
    CursorNext,
    CursorPrev,

    // Generation
    Increment,
    Decrement,
    GenerateFactions,
    GenerateQuest,

    // Output
    ToggleSelection,
    Copy,
    Export,
    CycleExportFormat,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which pane has input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Focus {
    #[default]
    Controls,
    Factions,
    Quest,
}

impl Focus {
    pub const ALL: [Focus; 3] = [Focus::Controls, Focus::Factions, Focus::Quest];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Controls => "Generator",
            Focus::Factions => "Factions",
            Focus::Quest => "Quest",
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
