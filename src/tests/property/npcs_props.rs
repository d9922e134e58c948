//! Property-based tests for NPC normalization
//!
//! Tests invariants:
//! - A list and its comma-joined string normalize to the same names
//! - Normalized names are trimmed and non-empty
//! - Deserialized object lists reduce to their names

use proptest::prelude::*;

use crate::core::models::{Npcs, Quest};
use crate::tests::common::{arb_npc_name, arb_npcs, sample_quest};

proptest! {
    /// Property: List and comma-joined text are equivalent
    #[test]
    fn prop_list_and_text_agree(names in prop::collection::vec(arb_npc_name(), 0..8)) {
        let list = Npcs::List(names.clone());
        let text = Npcs::Text(names.join(", "));
        prop_assert_eq!(list.names(), text.names());
        prop_assert_eq!(list.names(), names);
    }

    /// Property: Padding and empty segments never produce names
    #[test]
    fn prop_names_trimmed_and_non_empty(
        names in prop::collection::vec(arb_npc_name(), 0..6),
        pad in "[ \t]{0,3}",
        extra_commas in 0usize..3,
    ) {
        let mut text = names
            .iter()
            .map(|n| format!("{pad}{n}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        text.push_str(&",".repeat(extra_commas));

        let parsed = Npcs::Text(text).names();
        prop_assert!(parsed.iter().all(|n| !n.is_empty() && n.trim() == n));
        prop_assert_eq!(parsed, names);
    }

    /// Property: Object lists deserialize to the same names as plain lists
    #[test]
    fn prop_object_list_reduces_to_names(names in prop::collection::vec(arb_npc_name(), 0..6)) {
        let objects: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({ "name": n, "role": "ally" }))
            .collect();
        let body = serde_json::json!({ "title": "t", "npcs": objects });
        let quest: Quest = serde_json::from_value(body).unwrap();
        prop_assert_eq!(quest.npc_names(), names);
    }

    /// Property: The quest accessor agrees with the field's own normalization
    #[test]
    fn prop_quest_npc_names_delegate(npcs in arb_npcs()) {
        let quest = sample_quest(npcs.clone());
        prop_assert_eq!(quest.npc_names(), npcs.names());
    }
}
