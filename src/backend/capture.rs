//! In-memory backend.
//!
//! Renders into a grid of [`Cell`]s instead of a terminal and feeds the
//! loop a scripted sequence of inputs. Used for golden screenshots of the
//! test patterns and for driving the animation loop in tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{Backend, BackendError, Cell, InputEvent};
use crate::player::input::Key;

/// One step of scripted input, consumed per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptItem {
    /// A key press
    Key(Key),
    /// No input this frame
    Idle,
    /// The terminal is resized to (columns, rows)
    Resize(u16, u16),
}

/// Grid-backed [`Backend`] with scripted input.
#[derive(Debug)]
pub struct CaptureBackend {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    script: VecDeque<ScriptItem>,
    interrupt: Option<Arc<AtomicBool>>,
    reject_last_cell: bool,
    /// Number of `clear` calls
    pub clears: usize,
    /// Number of `flush` calls
    pub flushes: usize,
    /// Number of cells accepted by `draw`
    pub draws: usize,
    /// Number of `poll_event` calls
    pub polls: usize,
    /// Every palette registered through `set_palette`, in order
    pub palettes: Vec<Vec<u8>>,
}

impl CaptureBackend {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
            script: VecDeque::new(),
            interrupt: None,
            reject_last_cell: false,
            clears: 0,
            flushes: 0,
            draws: 0,
            polls: 0,
            palettes: Vec::new(),
        }
    }

    /// Queue scripted input.
    pub fn with_script(mut self, items: impl IntoIterator<Item = ScriptItem>) -> Self {
        self.script.extend(items);
        self
    }

    /// Queue key presses, one per frame.
    pub fn with_keys(self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.with_script(keys.into_iter().map(ScriptItem::Key))
    }

    /// Raise `flag` once the script has been fully consumed, as an
    /// external SIGINT would.
    pub fn interrupt_when_done(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Reject the bottom-right cell like terminals that refuse to wrap.
    pub fn rejecting_last_cell(mut self) -> Self {
        self.reject_last_cell = true;
        self
    }

    /// Scripted inputs not yet consumed.
    pub fn remaining_script(&self) -> usize {
        self.script.len()
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x < self.cols && y < self.rows {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Glyphs of one row.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.cols)
            .filter_map(|x| self.cell(x, y))
            .map(|c| c.glyph)
            .collect()
    }

    /// All glyphs, one line per row.
    pub fn text(&self) -> String {
        (0..self.rows)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::BLANK)
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.cols as usize + x as usize
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![Cell::BLANK; cols as usize * rows as usize];
    }
}

impl Backend for CaptureBackend {
    fn size(&mut self) -> Result<(u16, u16), BackendError> {
        Ok((self.cols, self.rows))
    }

    fn set_palette(&mut self, slots: &[u8]) -> Result<(), BackendError> {
        self.palettes.push(slots.to_vec());
        Ok(())
    }

    fn draw(&mut self, x: u16, y: u16, cell: Cell) -> Result<(), BackendError> {
        let last = self.cols > 0
            && self.rows > 0
            && x == self.cols - 1
            && y == self.rows - 1;
        if x >= self.cols || y >= self.rows || (self.reject_last_cell && last) {
            return Err(BackendError::Boundary { x, y });
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        self.draws += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), BackendError> {
        self.cells.fill(Cell::BLANK);
        self.clears += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BackendError> {
        self.flushes += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<InputEvent>, BackendError> {
        self.polls += 1;
        let event = match self.script.pop_front() {
            Some(ScriptItem::Key(key)) => Some(InputEvent::Key(key)),
            Some(ScriptItem::Resize(cols, rows)) => {
                self.resize(cols, rows);
                Some(InputEvent::Resize(cols, rows))
            }
            Some(ScriptItem::Idle) => None,
            None => {
                if let Some(flag) = &self.interrupt {
                    flag.store(true, Ordering::SeqCst);
                }
                None
            }
        };
        Ok(event)
    }
}
