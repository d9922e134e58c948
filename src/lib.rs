/// Lore Engine - fantasy campaign generator (TUI Edition)
///
/// Terminal frontend for a faction and quest generation service: typed
/// client, Markdown/JSON export, and ratatui views.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
