//! Clipboard sinks.
//!
//! Cards never touch the clipboard themselves; the controller hands the
//! exported string to one of these.

use std::io::Write;
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::error::ClipboardError;

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes an OSC 52 "set clipboard" sequence to the terminal. Most modern
/// terminal emulators (and tmux with `set-clipboard on`) forward it to the
/// system clipboard, including over SSH.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    /// The escape sequence that places `text` on the clipboard.
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl Clipboard for Osc52Clipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(Self::sequence(text).as_bytes())?;
        stdout.flush()?;
        log::debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(Osc52Clipboard::sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_memory_clipboard_keeps_last() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());
        clipboard.copy("first").unwrap();
        clipboard.copy("second").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
    }
}
