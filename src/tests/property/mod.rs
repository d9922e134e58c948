//! Property-based tests for the Lore Engine
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `stepper_props`: Generator count stepper
//!   - Count never leaves [1, 10] under any sequence of steps
//!   - Loading freezes the count
//!
//! - `count_entry_props`: Direct count entry
//!   - Out-of-range or non-numeric text never changes the count
//!   - In-range integers always commit
//!
//! - `export_props`: Export utility
//!   - JSON export is stable under parse and re-export
//!   - Markdown has one section per faction, in order
//!
//! - `npcs_props`: NPC normalization
//!   - List and comma-joined text forms yield the same names
//!   - Names are trimmed and never empty
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod count_entry_props;
mod export_props;
mod npcs_props;
mod stepper_props;
