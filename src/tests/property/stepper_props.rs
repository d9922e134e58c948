//! Property-based tests for the generator count stepper
//!
//! Tests invariants:
//! - Count stays within [MIN_FACTION_COUNT, MAX_FACTION_COUNT]
//! - Each successful step moves the count by exactly one
//! - Loading freezes the count

use proptest::prelude::*;

use crate::core::models::{MAX_FACTION_COUNT, MIN_FACTION_COUNT};
use crate::tui::views::{ControlsEvent, GeneratorControls};

#[derive(Debug, Clone, Copy)]
enum Step {
    Up,
    Down,
}

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(prop_oneof![Just(Step::Up), Just(Step::Down)], 0..64)
}

proptest! {
    /// Property: No sequence of steps leaves the valid range
    #[test]
    fn prop_count_stays_in_range(start in any::<u8>(), steps in arb_steps()) {
        let mut controls = GeneratorControls::new(start);
        for step in steps {
            let before = controls.count();
            let event = match step {
                Step::Up => controls.increment(),
                Step::Down => controls.decrement(),
            };
            let after = controls.count();

            prop_assert!((MIN_FACTION_COUNT..=MAX_FACTION_COUNT).contains(&after));
            match event {
                Some(ControlsEvent::CountChanged(n)) => {
                    prop_assert_eq!(n, after);
                    prop_assert_eq!(before.abs_diff(after), 1);
                }
                _ => prop_assert_eq!(before, after, "a rejected step must not move the count"),
            }
        }
    }

    /// Property: Stepping is a no-op exactly at the bounds
    #[test]
    fn prop_step_rejected_only_at_bounds(start in MIN_FACTION_COUNT..=MAX_FACTION_COUNT) {
        let controls = GeneratorControls::new(start);
        prop_assert_eq!(controls.can_increment(), start < MAX_FACTION_COUNT);
        prop_assert_eq!(controls.can_decrement(), start > MIN_FACTION_COUNT);
    }

    /// Property: While loading nothing changes the count or generates
    #[test]
    fn prop_loading_freezes_controls(start in MIN_FACTION_COUNT..=MAX_FACTION_COUNT, steps in arb_steps()) {
        let mut controls = GeneratorControls::new(start);
        controls.set_loading(true);
        for step in steps {
            let event = match step {
                Step::Up => controls.increment(),
                Step::Down => controls.decrement(),
            };
            prop_assert_eq!(event, None);
        }
        prop_assert_eq!(controls.count(), start);
        prop_assert_eq!(controls.generate(), None);
    }
}
