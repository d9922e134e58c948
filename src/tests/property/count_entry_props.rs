//! Property-based tests for direct count entry
//!
//! Tests invariants:
//! - Text that is not an integer in range never changes the count
//! - Every in-range integer commits
//! - The field never displays text other than the committed count

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::models::{MAX_FACTION_COUNT, MIN_FACTION_COUNT};
use crate::tui::views::generator_controls::parse_count;
use crate::tui::views::{ControlsEvent, GeneratorControls};
use crate::tui::widgets::buffer_lines;

/// Integers outside the valid range, rendered as text.
fn arb_out_of_range() -> impl Strategy<Value = String> {
    prop_oneof![
        (i64::MIN..i64::from(MIN_FACTION_COUNT)).prop_map(|n| n.to_string()),
        (i64::from(MAX_FACTION_COUNT) + 1..i64::MAX).prop_map(|n| n.to_string()),
    ]
}

/// Text that is not an integer at all.
fn arb_non_numeric() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z]{1,8}",
        "[0-9]{1,2}\\.[0-9]{1,2}",
        "[0-9]{1,2}[a-z]{1,3}",
    ]
}

/// Keys that reach the count field.
fn arb_edit_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        (b'0'..=b'9').prop_map(|d| KeyCode::Char(char::from(d))),
        Just(KeyCode::Backspace),
        Just(KeyCode::Delete),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::Home),
        Just(KeyCode::End),
    ]
}

proptest! {
    /// Property: Rejected entry keeps the prior value
    #[test]
    fn prop_rejected_entry_keeps_count(
        start in MIN_FACTION_COUNT..=MAX_FACTION_COUNT,
        text in prop_oneof![arb_out_of_range(), arb_non_numeric()],
    ) {
        let mut controls = GeneratorControls::new(start);
        prop_assert_eq!(controls.commit_entry(&text), None);
        prop_assert_eq!(controls.count(), start);
    }

    /// Property: In-range integers always commit
    #[test]
    fn prop_in_range_entry_commits(
        start in MIN_FACTION_COUNT..=MAX_FACTION_COUNT,
        value in MIN_FACTION_COUNT..=MAX_FACTION_COUNT,
    ) {
        let mut controls = GeneratorControls::new(start);
        prop_assert_eq!(
            controls.commit_entry(&value.to_string()),
            Some(ControlsEvent::CountChanged(value))
        );
        prop_assert_eq!(controls.count(), value);
    }

    /// Property: parse_count accepts exactly the valid range
    #[test]
    fn prop_parse_count_matches_range(n in any::<i64>()) {
        let expected = (i64::from(MIN_FACTION_COUNT)..=i64::from(MAX_FACTION_COUNT))
            .contains(&n)
            .then_some(n as u8);
        prop_assert_eq!(parse_count(&n.to_string()), expected);
    }

    /// Property: Any key sequence leaves the field showing the count
    #[test]
    fn prop_field_always_shows_count(
        start in MIN_FACTION_COUNT..=MAX_FACTION_COUNT,
        keys in prop::collection::vec(arb_edit_key(), 1..12),
    ) {
        let mut controls = GeneratorControls::new(start);
        controls.set_focused(true);
        for code in keys {
            controls.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
            let count = controls.count();
            prop_assert!((MIN_FACTION_COUNT..=MAX_FACTION_COUNT).contains(&count));
            prop_assert_eq!(controls.entry(), count.to_string());
        }

        let area = Rect::new(0, 0, 50, controls.height());
        let mut buf = Buffer::empty(area);
        (&controls).render(area, &mut buf);
        let field: String = buffer_lines(&buf)[2]
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        prop_assert_eq!(field, controls.count().to_string());
    }
}
