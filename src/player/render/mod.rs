//! Rendering components for the animation.
//!
//! This module contains everything that puts cells on the screen: random
//! static frames, the test patterns and the stand-by banner, plus the
//! command reference printed by `--list_commands`.

mod banner;
mod frame;
mod help;
mod pattern;

pub use banner::{
    banner_cells, calc_banner_start_col, calc_banner_start_row, render_banner, BANNER_LINES,
    BANNER_WIDTH,
};
pub use frame::{FrameRenderer, GlyphPolicy, DENSITY_GLYPHS, SPARSE_SKIP};
pub use help::{color_list, command_list, COMMANDS};
pub use pattern::{
    band_ranges, pattern_cells, render_pattern, PatternColor, TestPattern, BARS,
};
