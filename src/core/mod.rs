pub mod api;
pub mod clipboard;
pub mod download;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
