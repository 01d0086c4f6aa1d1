//! Random static frames.
//!
//! Every painted cell gets a uniformly random palette slot and one of three
//! outcomes: background (50%), bold glyph (25%) or plain glyph (25%). In
//! label mode the background outcome also carries the label.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::backend::{draw_clipped, Backend, BackendError, Cell};

/// Blank followed by five shades from light to solid.
pub const DENSITY_GLYPHS: [char; 6] = [' ', '·', '░', '▒', '▓', '█'];

/// Cells left out of each sparse update.
pub const SPARSE_SKIP: usize = 15;

/// Which character a painted cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphPolicy {
    /// Random shade from [`DENSITY_GLYPHS`]
    Density,
    /// Always this label (test mode)
    Label(char),
}

impl GlyphPolicy {
    fn pick<R: Rng>(self, rng: &mut R) -> char {
        match self {
            GlyphPolicy::Density => DENSITY_GLYPHS[rng.gen_range(0..DENSITY_GLYPHS.len())],
            GlyphPolicy::Label(c) => c,
        }
    }
}

/// Paints static frames with a random source.
#[derive(Debug)]
pub struct FrameRenderer<R: Rng = ThreadRng> {
    rng: R,
}

impl Default for FrameRenderer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> FrameRenderer<R> {
    /// Use a specific random source (seeded in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Paint one frame of `width` x `height`.
    ///
    /// With `force_full` every cell is repainted, so no stale colors
    /// survive a palette change. Otherwise `width * height - SPARSE_SKIP`
    /// random cells are repainted and the rest keep the previous frame.
    /// Cells the backend rejects at the screen edge are skipped.
    ///
    /// Returns the number of cells painted.
    pub fn render<B: Backend + ?Sized>(
        &mut self,
        backend: &mut B,
        width: u16,
        height: u16,
        slots: &[u8],
        policy: GlyphPolicy,
        force_full: bool,
    ) -> Result<usize, BackendError> {
        if slots.is_empty() || width == 0 || height == 0 {
            return Ok(0);
        }

        if force_full {
            for y in 0..height {
                for x in 0..width {
                    let cell = self.random_cell(slots, policy);
                    draw_clipped(backend, x, y, cell)?;
                }
            }
            return Ok(width as usize * height as usize);
        }

        let count = (width as usize * height as usize).saturating_sub(SPARSE_SKIP);
        for _ in 0..count {
            let x = self.rng.gen_range(0..width);
            let y = self.rng.gen_range(0..height);
            let cell = self.random_cell(slots, policy);
            draw_clipped(backend, x, y, cell)?;
        }
        Ok(count)
    }

    fn random_cell(&mut self, slots: &[u8], policy: GlyphPolicy) -> Cell {
        let color = slots[self.rng.gen_range(0..slots.len())];
        match self.rng.gen_range(0..4u8) {
            0 | 1 => match policy {
                GlyphPolicy::Label(label) => Cell::labeled(label, color),
                GlyphPolicy::Density => Cell::fill(color),
            },
            2 => Cell::glyph(policy.pick(&mut self.rng), color, true),
            _ => Cell::glyph(policy.pick(&mut self.rng), color, false),
        }
    }
}
