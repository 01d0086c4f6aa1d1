//! Real terminal backend on top of crossterm.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use super::{Backend, BackendError, Cell, InputEvent};
use crate::player::input::key_from_event;

/// Full-screen crossterm terminal.
///
/// Entering switches to the alternate screen, enables raw mode and hides
/// the cursor. Dropping restores all three, including while unwinding
/// from a panic.
pub struct CrosstermBackend<W: Write = Stdout> {
    out: W,
    cols: u16,
    rows: u16,
    active: bool,
}

impl CrosstermBackend<Stdout> {
    /// Take over stdout.
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let (cols, rows) = terminal::size()?;
        tracing::debug!(cols, rows, "terminal entered");
        Ok(Self {
            out,
            cols,
            rows,
            active: true,
        })
    }
}

impl<W: Write> CrosstermBackend<W> {
    /// Give the terminal back: show cursor, leave alternate screen, raw mode off.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, SetAttribute(Attribute::Reset), Show, LeaveAlternateScreen)?;
        disable_raw_mode()
    }
}

impl<W: Write> Drop for CrosstermBackend<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl<W: Write> Backend for CrosstermBackend<W> {
    fn size(&mut self) -> Result<(u16, u16), BackendError> {
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        Ok((cols, rows))
    }

    fn draw(&mut self, x: u16, y: u16, cell: Cell) -> Result<(), BackendError> {
        if x >= self.cols || y >= self.rows {
            return Err(BackendError::Boundary { x, y });
        }
        queue!(self.out, MoveTo(x, y), SetAttribute(Attribute::Reset))?;
        if let Some(fg) = cell.fg {
            queue!(self.out, SetForegroundColor(Color::AnsiValue(fg)))?;
        }
        if let Some(bg) = cell.bg {
            queue!(self.out, SetBackgroundColor(Color::AnsiValue(bg)))?;
        }
        if cell.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(cell.glyph))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), BackendError> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            Clear(ClearType::All)
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BackendError> {
        self.out.flush()?;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<InputEvent>, BackendError> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let input = match event::read()? {
            Event::Key(key) => key_from_event(key).map(InputEvent::Key),
            Event::Resize(cols, rows) => {
                self.cols = cols;
                self.rows = rows;
                Some(InputEvent::Resize(cols, rows))
            }
            _ => None, // Ignore mouse, focus and paste events
        };
        Ok(input)
    }
}
