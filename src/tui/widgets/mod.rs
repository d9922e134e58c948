//! Reusable presentational primitives.

pub mod button;
pub mod card;
pub mod input;
pub mod input_buffer;
pub mod select;
pub mod spinner;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use input::{Input, InputKind};
pub use input_buffer::InputBuffer;
pub use select::{Select, SelectOption};
pub use spinner::{LoadingSpinner, SpinnerSize};

/// Rows of a rendered buffer as plain strings (test helper).
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buf.area.width as usize;
    buf.content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
