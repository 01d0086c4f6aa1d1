//! Color palettes
//!
//! - `registry`: the immutable table of named color groups and the
//!   algorithms that expand one group (or an additive list) into slots
//! - `selection`: additive selection and color cycling state

pub mod registry;
pub mod selection;

pub use registry::{ColorDepth, ColorGroup, ColorName, PaletteRegistry, UnknownColor};
pub use selection::{
    AdditiveSelection, CycleState, SelectionError, CYCLE_SPEEDS, DEFAULT_CYCLE_SPEED,
    TEST_MODE_CYCLE_THRESHOLD,
};
