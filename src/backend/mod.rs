//! Terminal backends.
//!
//! The render loop only talks to the [`Backend`] trait: draw one cell,
//! clear, flush, report the size and poll for one input event. Two
//! implementations exist:
//!
//! - `term`: the real terminal (raw mode, alternate screen)
//! - `capture`: an in-memory grid with scripted input, used for test mode
//!   screenshots and automated tests

mod capture;
mod term;

pub use self::capture::{CaptureBackend, ScriptItem};
pub use self::term::CrosstermBackend;

use crate::player::input::Key;

/// Errors a backend can report.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The cell lies outside the drawable area. Terminals may reject the
    /// final cell because the cursor would wrap; renderers skip these.
    #[error("cell ({x}, {y}) is outside the drawable area")]
    Boundary { x: u16, y: u16 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One character cell: glyph plus color attributes.
///
/// Colors are terminal palette indices (0-255). `None` keeps the
/// terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// Unpainted cell in terminal default colors.
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        fg: None,
        bg: None,
        bold: false,
    };

    /// Blank cell filled with a background color.
    pub fn fill(color: u8) -> Self {
        Self {
            glyph: ' ',
            fg: None,
            bg: Some(color),
            bold: false,
        }
    }

    /// Glyph drawn in a foreground color.
    pub fn glyph(glyph: char, color: u8, bold: bool) -> Self {
        Self {
            glyph,
            fg: Some(color),
            bg: None,
            bold,
        }
    }

    /// Label glyph drawn with the same foreground and background color.
    pub fn labeled(glyph: char, color: u8) -> Self {
        Self {
            glyph,
            fg: Some(color),
            bg: Some(color),
            bold: false,
        }
    }

    /// Text over a solid background.
    pub fn text(glyph: char, fg: u8, bg: u8) -> Self {
        Self {
            glyph,
            fg: Some(fg),
            bg: Some(bg),
            bold: true,
        }
    }
}

/// Input reported by [`Backend::poll_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// The terminal now has this many columns and rows
    Resize(u16, u16),
}

/// The drawing and input primitives the animation loop needs.
pub trait Backend {
    /// Current size as (columns, rows).
    fn size(&mut self) -> Result<(u16, u16), BackendError>;

    /// Register the active palette slots.
    ///
    /// Backends that address colors directly have nothing to do here.
    fn set_palette(&mut self, _slots: &[u8]) -> Result<(), BackendError> {
        Ok(())
    }

    /// Draw one cell at column `x`, row `y`.
    fn draw(&mut self, x: u16, y: u16, cell: Cell) -> Result<(), BackendError>;

    /// Erase the whole screen.
    fn clear(&mut self) -> Result<(), BackendError>;

    /// Push everything drawn so far to the screen.
    fn flush(&mut self) -> Result<(), BackendError>;

    /// Next pending input, or `None` without blocking.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, BackendError>;
}

/// Draw a cell, skipping it if the backend rejects its position.
///
/// Any other failure is returned.
pub fn draw_clipped<B: Backend + ?Sized>(
    backend: &mut B,
    x: u16,
    y: u16,
    cell: Cell,
) -> Result<(), BackendError> {
    match backend.draw(x, y, cell) {
        Err(BackendError::Boundary { .. }) => Ok(()),
        other => other,
    }
}
