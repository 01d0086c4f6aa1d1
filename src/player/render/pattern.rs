//! Deterministic test patterns.
//!
//! Each pattern is a pure function of the screen size, the labeling flag
//! and the color depth, so rendering twice gives identical cells. Bands are
//! `dimension / count` wide; the last band takes the remainder.

use std::ops::Range;

use crate::backend::{draw_clipped, Backend, BackendError, Cell};
use crate::palette::ColorDepth;

/// A fixed pattern color with its label and 256/8-color indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternColor {
    pub label: char,
    pub full: u8,
    pub reduced: u8,
}

impl PatternColor {
    const fn new(label: char, full: u8, reduced: u8) -> Self {
        Self {
            label,
            full,
            reduced,
        }
    }

    pub fn color(self, depth: ColorDepth) -> u8 {
        match depth {
            ColorDepth::Full => self.full,
            ColorDepth::Reduced => self.reduced,
        }
    }

    fn cell(self, labeled: bool, depth: ColorDepth) -> Cell {
        if labeled {
            Cell::labeled(self.label, self.color(depth))
        } else {
            Cell::fill(self.color(depth))
        }
    }
}

pub const WHITE: PatternColor = PatternColor::new('W', 255, 7);
pub const YELLOW: PatternColor = PatternColor::new('Y', 226, 3);
pub const CYAN: PatternColor = PatternColor::new('C', 51, 6);
pub const GREEN: PatternColor = PatternColor::new('G', 46, 2);
pub const MAGENTA: PatternColor = PatternColor::new('M', 201, 5);
pub const RED: PatternColor = PatternColor::new('R', 196, 1);
pub const BLUE: PatternColor = PatternColor::new('B', 21, 4);
pub const BLACK: PatternColor = PatternColor::new('K', 16, 0);
pub const NAVY: PatternColor = PatternColor::new('N', 17, 4);

/// Bar colors, left to right (or top to bottom).
pub const BARS: [PatternColor; 8] = [WHITE, YELLOW, CYAN, GREEN, MAGENTA, RED, BLUE, BLACK];

/// Colors of the calibration strip blocks.
pub const CALIBRATION_STRIP: [PatternColor; 3] = [NAVY, WHITE, NAVY];

/// The numbered test patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPattern {
    /// Eight vertical bars
    VerticalBars,
    /// Eight horizontal bars
    HorizontalBars,
    /// Seven vertical bars over a wide/narrow/wide bottom strip
    Calibration,
}

impl TestPattern {
    /// Number of patterns; selector values run `0..=COUNT`.
    pub const COUNT: u8 = 3;

    /// Pattern for a selector value; 0 (normal rendering) gives `None`.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(TestPattern::VerticalBars),
            2 => Some(TestPattern::HorizontalBars),
            3 => Some(TestPattern::Calibration),
            _ => None,
        }
    }
}

/// Split `0..dimension` into `count` bands of `dimension / count`, the
/// last band absorbing the remainder.
pub fn band_ranges(dimension: u16, count: u16) -> Vec<Range<u16>> {
    if count == 0 {
        return Vec::new();
    }
    let size = dimension / count;
    (0..count)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == count { dimension } else { start + size };
            start..end
        })
        .collect()
}

/// Rows taken by the calibration strip.
pub fn calibration_strip_rows(height: u16) -> u16 {
    if height < 2 {
        0
    } else {
        (height / 4).max(1)
    }
}

/// Column ranges of the wide/narrow/wide calibration blocks.
pub fn calibration_block_ranges(width: u16) -> [Range<u16>; 3] {
    let wide = (width as u32 * 2 / 5) as u16;
    let narrow = width / 5;
    [0..wide, wide..wide + narrow, wide + narrow..width]
}

fn band_index(ranges: &[Range<u16>], pos: u16) -> usize {
    ranges
        .iter()
        .position(|r| r.contains(&pos))
        .unwrap_or(ranges.len().saturating_sub(1))
}

/// Cells of a pattern in row-major order.
pub fn pattern_cells(
    pattern: TestPattern,
    width: u16,
    height: u16,
    labeled: bool,
    depth: ColorDepth,
) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(width as usize * height as usize);
    match pattern {
        TestPattern::VerticalBars => {
            let bands = band_ranges(width, BARS.len() as u16);
            for _ in 0..height {
                for x in 0..width {
                    cells.push(BARS[band_index(&bands, x)].cell(labeled, depth));
                }
            }
        }
        TestPattern::HorizontalBars => {
            let bands = band_ranges(height, BARS.len() as u16);
            for y in 0..height {
                let cell = BARS[band_index(&bands, y)].cell(labeled, depth);
                cells.extend(std::iter::repeat(cell).take(width as usize));
            }
        }
        TestPattern::Calibration => {
            let bars = &BARS[..7];
            let bands = band_ranges(width, bars.len() as u16);
            let strip_top = height - calibration_strip_rows(height);
            let blocks = calibration_block_ranges(width);
            for y in 0..height {
                for x in 0..width {
                    let color = if y >= strip_top {
                        CALIBRATION_STRIP[band_index(&blocks, x)]
                    } else {
                        bars[band_index(&bands, x)]
                    };
                    cells.push(color.cell(labeled, depth));
                }
            }
        }
    }
    cells
}

/// Draw a test pattern over the whole screen.
pub fn render_pattern<B: Backend + ?Sized>(
    backend: &mut B,
    pattern: TestPattern,
    width: u16,
    height: u16,
    labeled: bool,
    depth: ColorDepth,
) -> Result<(), BackendError> {
    let cells = pattern_cells(pattern, width, height, labeled, depth);
    draw_cells(backend, &cells, width)
}

/// Draw row-major cells for a screen `width` columns wide.
pub(crate) fn draw_cells<B: Backend + ?Sized>(
    backend: &mut B,
    cells: &[Cell],
    width: u16,
) -> Result<(), BackendError> {
    if width == 0 {
        return Ok(());
    }
    for (i, cell) in cells.iter().enumerate() {
        let x = (i % width as usize) as u16;
        let y = (i / width as usize) as u16;
        draw_clipped(backend, x, y, *cell)?;
    }
    Ok(())
}
