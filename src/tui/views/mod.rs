//! Domain views composed from the widget primitives.

pub mod faction_card;
pub mod faction_list;
pub mod generator_controls;
pub mod quest_card;
pub mod quest_display;

pub use faction_card::FactionCard;
pub use faction_list::{FactionList, Stagger};
pub use generator_controls::{ControlsEvent, GeneratorControls, KeyOutcome};
pub use quest_card::QuestCard;
pub use quest_display::QuestDisplay;
