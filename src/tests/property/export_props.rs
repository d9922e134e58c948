//! Property-based tests for the export utility
//!
//! Tests invariants:
//! - JSON export is a fixed point of parse-then-export
//! - Markdown has one `## ` section per faction, in input order
//! - Markdown for a quest always carries its four sections

use proptest::prelude::*;

use crate::core::export::{export_to_json, export_to_markdown, ExportTarget};
use crate::core::models::{Faction, Quest};
use crate::tests::common::{arb_faction, arb_quest, sample_faction};

/// Integers and finite floats across the whole exponent range.
fn arb_number() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        any::<i32>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(serde_json::Value::from),
    ]
}

proptest! {
    /// Property: Faction JSON is stable under parse + re-export
    #[test]
    fn prop_faction_json_idempotent(factions in prop::collection::vec(arb_faction(), 0..6)) {
        let first = export_to_json(&factions).unwrap();
        let parsed: Vec<Faction> = serde_json::from_str(&first).unwrap();
        prop_assert_eq!(&parsed, &factions);
        prop_assert_eq!(export_to_json(&parsed).unwrap(), first);
    }

    /// Property: Quest JSON is stable under parse + re-export
    #[test]
    fn prop_quest_json_idempotent(quest in arb_quest()) {
        let first = export_to_json(&quest).unwrap();
        let parsed: Quest = serde_json::from_str(&first).unwrap();
        prop_assert_eq!(&parsed, &quest);
        prop_assert_eq!(export_to_json(&parsed).unwrap(), first);
    }

    /// Property: Arbitrary JSON values survive a round trip unchanged
    #[test]
    fn prop_value_json_idempotent(pairs in prop::collection::vec(("[a-z]{1,6}", arb_number()), 0..6)) {
        let value: serde_json::Value = pairs
            .into_iter()
            .collect::<serde_json::Map<_, _>>()
            .into();
        let first = export_to_json(&value).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&first).unwrap();
        prop_assert_eq!(export_to_json(&parsed).unwrap(), first);
    }

    /// Property: One Markdown section per faction, in order
    #[test]
    fn prop_markdown_sections_in_order(names in prop::collection::vec("[A-Z][a-z]{2,10}", 1..6)) {
        let factions: Vec<Faction> = names
            .iter()
            .map(|n| Faction::new(n.as_str(), "sym", "val", None))
            .collect();
        let md = export_to_markdown(ExportTarget::Factions(&factions)).unwrap();

        let headings: Vec<&str> = md
            .lines()
            .filter_map(|l| l.strip_prefix("## "))
            .collect();
        prop_assert_eq!(headings, names.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(md.matches("---").count(), factions.len());
    }

    /// Property: Quest Markdown always has its title and four sections
    #[test]
    fn prop_quest_markdown_sections(quest in arb_quest()) {
        let md = export_to_markdown(ExportTarget::Quest(&quest)).unwrap();
        let title_line = format!("# {}", quest.title);
        prop_assert!(md.starts_with(&title_line));
        for section in ["## Brief", "## Conflict", "## Location", "## NPCs"] {
            prop_assert!(md.contains(section), "missing {}", section);
        }
    }

    /// Property: Faction Markdown carries every field
    #[test]
    fn prop_faction_markdown_has_fields(name in "[A-Z][a-z]{2,10}") {
        let faction = sample_faction(&name);
        let md = export_to_markdown(ExportTarget::Factions(std::slice::from_ref(&faction))).unwrap();
        let heading = format!("## {name}");
        let symbol = format!("**Symbol:** {}", faction.symbol);
        let values = format!("**Values:** {}", faction.values);
        prop_assert!(md.starts_with(&heading));
        prop_assert!(md.contains(&symbol));
        prop_assert!(md.contains(&values));
        prop_assert!(md.contains("**Soundtrack:** Low choir over distant thunder"));
    }
}
