//! Stand-by banner.
//!
//! A fixed block of text centered over a solid navy screen, shown instead
//! of the static while toggled on.

use crate::backend::{Backend, BackendError, Cell};
use crate::palette::ColorDepth;
use crate::player::render::pattern::{draw_cells, NAVY, WHITE};

/// Banner text, one entry per line.
pub const BANNER_LINES: &[&str] = &[
    "╔══════════════════════════════╗",
    "║        DIGITAL STATIC        ║",
    "║                              ║",
    "║    TECHNICAL  DIFFICULTIES   ║",
    "║       PLEASE STAND BY        ║",
    "╚══════════════════════════════╝",
];

/// Width of the banner box (for centering calculations).
pub const BANNER_WIDTH: usize = 32;

/// Calculate the starting row for centering the banner.
///
/// # Arguments
/// * `term_height` - Terminal height in rows
pub fn calc_banner_start_row(term_height: u16) -> u16 {
    let box_height = BANNER_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the banner.
///
/// # Arguments
/// * `term_width` - Terminal width in columns
pub fn calc_banner_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(BANNER_WIDTH) / 2) as u16
}

/// Cells of the banner screen in row-major order.
pub fn banner_cells(width: u16, height: u16, depth: ColorDepth) -> Vec<Cell> {
    let bg = NAVY.color(depth);
    let fg = WHITE.color(depth);
    let mut cells = vec![Cell::fill(bg); width as usize * height as usize];

    let start_row = calc_banner_start_row(height) as usize;
    let start_col = calc_banner_start_col(width) as usize;
    for (i, line) in BANNER_LINES.iter().enumerate() {
        let y = start_row + i;
        if y >= height as usize {
            break;
        }
        for (j, glyph) in line.chars().enumerate() {
            let x = start_col + j;
            if x >= width as usize {
                break;
            }
            cells[y * width as usize + x] = Cell::text(glyph, fg, bg);
        }
    }
    cells
}

/// Draw the banner over the whole screen.
pub fn render_banner<B: Backend + ?Sized>(
    backend: &mut B,
    width: u16,
    height: u16,
    depth: ColorDepth,
) -> Result<(), BackendError> {
    let cells = banner_cells(width, height, depth);
    draw_cells(backend, &cells, width)
}
