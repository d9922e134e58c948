//! Test Fixtures
//!
//! Builders for factions and quests plus matching proptest strategies.

use proptest::prelude::*;

use crate::core::models::{Faction, Npcs, Quest};

// =============================================================================
// Plain fixtures
// =============================================================================

/// A fully populated faction.
pub fn sample_faction(name: &str) -> Faction {
    Faction::new(
        name,
        "A crown of thorns over a closed eye",
        "Secrecy, loyalty, patience",
        Some("Low choir over distant thunder".to_string()),
    )
}

/// A quest with the given NPC field.
pub fn sample_quest(npcs: Npcs) -> Quest {
    Quest {
        title: "The Hollow Crown".to_string(),
        brief: "Recover the crown before the eclipse.".to_string(),
        conflict: "Two houses claim the throne".to_string(),
        location: "The Sunken Abbey".to_string(),
        npcs,
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// Free text, including punctuation, unicode and the empty string.
pub fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.'!?éß☾-]{0,40}"
}

/// A single NPC name: non-empty, no commas, no surrounding whitespace.
pub fn arb_npc_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z' -]{0,15}[A-Za-z]"
}

pub fn arb_faction() -> impl Strategy<Value = Faction> {
    (arb_text(), arb_text(), arb_text(), proptest::option::of(arb_text())).prop_map(
        |(name, symbol, values, vibe)| Faction::new(name, symbol, values, vibe),
    )
}

pub fn arb_npcs() -> impl Strategy<Value = Npcs> {
    prop_oneof![
        prop::collection::vec(arb_npc_name(), 0..5).prop_map(Npcs::List),
        prop::collection::vec(arb_npc_name(), 0..5).prop_map(|names| Npcs::Text(names.join(", "))),
    ]
}

pub fn arb_quest() -> impl Strategy<Value = Quest> {
    (arb_text(), arb_text(), arb_text(), arb_text(), arb_npcs()).prop_map(
        |(title, brief, conflict, location, npcs)| Quest {
            title,
            brief,
            conflict,
            location,
            npcs,
        },
    )
}
