//! Common Test Utilities
//!
//! Shared fixtures and proptest strategies for the domain model.

pub mod fixtures;

pub use fixtures::*;
