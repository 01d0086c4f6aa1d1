//! Animation state management
//!
//! Contains the central `StaticState` struct that holds everything the
//! animation loop mutates, as well as shared types used across player
//! modules.

use std::time::Duration;

use crate::config::{delay_duration, RunConfig, StartPalette, DEFAULT_DELAY, MAX_DELAY};
use crate::palette::{
    AdditiveSelection, ColorName, CycleState, PaletteRegistry, SelectionError,
    TEST_MODE_CYCLE_THRESHOLD,
};
use crate::player::render::{GlyphPolicy, TestPattern};

/// Why the animation loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Quit key pressed
    QuitKey,
    /// A key was pressed in screen saver mode
    ScreenSaver,
    /// The run timer expired
    Timer,
    /// Ctrl-C or an external signal
    Interrupted,
}

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep animating
    Continue,
    /// Erase the screen and pause before the next frame
    ClearAndPause,
    /// Stop the loop
    Quit(ExitReason),
}

/// Where the palette slots currently come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    /// One group (`all`, `B&W` or a single hue)
    Single(ColorName),
    /// Timed rotation through the cycle list
    Cycling,
    /// Concatenation of the additive selection
    Additive,
}

/// Central state for the animation loop.
///
/// Created once when the loop starts and dropped when it ends.
#[derive(Debug)]
pub struct StaticState {
    /// Run configuration; `delay` is changed by the digit keys
    pub config: RunConfig,

    // === Palette ===
    /// Active palette source
    pub mode: PaletteMode,
    /// Cycling progress and speed
    pub cycle: CycleState,
    /// Groups mixed in additive mode
    pub additive: AdditiveSelection,
    /// Realized palette: one terminal color per slot
    pub slots: Vec<u8>,
    /// Slots changed since the last frame; forces a full redraw
    pub color_changed: bool,

    // === Modes ===
    /// Rendering and timers suspended
    pub frozen: bool,
    /// Test pattern index, 0 for normal rendering
    pub pattern: u8,
    /// Stand-by banner shown instead of everything else
    pub banner: bool,
    /// Screen must be erased before the next frame
    pub needs_clear: bool,

    // === Screen ===
    pub cols: u16,
    pub rows: u16,
}

impl StaticState {
    /// Create the state for a terminal of `cols` x `rows`, starting with
    /// the palette chosen by the configuration.
    pub fn new(config: RunConfig, registry: &PaletteRegistry, cols: u16, rows: u16) -> Self {
        let mut cycle = CycleState {
            threshold: config.cycle_threshold(),
            ..CycleState::default()
        };
        if config.test_mode {
            cycle.threshold = TEST_MODE_CYCLE_THRESHOLD;
        }
        let mode = match config.start_palette() {
            StartPalette::BlackWhite => PaletteMode::Single(ColorName::BlackWhite),
            StartPalette::Color(name) => PaletteMode::Single(name),
            StartPalette::Cycle => PaletteMode::Cycling,
            StartPalette::Additive => PaletteMode::Additive,
            StartPalette::All => PaletteMode::Single(ColorName::All),
        };

        let mut state = Self {
            config,
            mode,
            cycle,
            additive: AdditiveSelection::default(),
            slots: Vec::new(),
            color_changed: true,
            frozen: false,
            pattern: 0,
            banner: false,
            needs_clear: false,
            cols,
            rows,
        };
        state.refresh_palette(registry);
        state
    }

    /// Re-resolve the palette slots for the current mode.
    pub fn refresh_palette(&mut self, registry: &PaletteRegistry) {
        let depth = self.config.depth;
        self.slots = match self.mode {
            PaletteMode::Single(name) => registry.resolve(name, depth),
            PaletteMode::Cycling => registry.resolve(self.cycle.current(), depth),
            PaletteMode::Additive => registry.resolve_additive(self.additive.names(), depth),
        };
        self.color_changed = true;
    }

    /// Label character drawn in test mode for the active palette.
    pub fn palette_label(&self) -> char {
        match self.mode {
            PaletteMode::Single(name) => name.label(),
            PaletteMode::Cycling => self.cycle.current().label(),
            PaletteMode::Additive => 'A',
        }
    }

    /// Glyph policy for the random renderer.
    pub fn glyph_policy(&self) -> GlyphPolicy {
        if self.config.test_mode {
            GlyphPolicy::Label(self.palette_label())
        } else {
            GlyphPolicy::Density
        }
    }

    /// Active test pattern, if any.
    pub fn test_pattern(&self) -> Option<TestPattern> {
        TestPattern::from_index(self.pattern)
    }

    /// Sleep between frames.
    pub fn frame_delay(&self) -> Duration {
        delay_duration(self.config.delay)
    }

    /// Record a new terminal size.
    ///
    /// Returns true if the size changed.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) -> bool {
        if cols == self.cols && rows == self.rows {
            return false;
        }
        tracing::trace!(cols, rows, "terminal resized");
        self.cols = cols;
        self.rows = rows;
        self.color_changed = true;
        if self.pattern != 0 {
            self.needs_clear = true;
        }
        true
    }

    fn set_mode(&mut self, mode: PaletteMode, registry: &PaletteRegistry) {
        tracing::debug!(?mode, "palette mode changed");
        self.mode = mode;
        self.refresh_palette(registry);
    }

    /// Switch to a single color group, leaving cycling and additive mode.
    pub fn set_color(&mut self, name: ColorName, registry: &PaletteRegistry) {
        self.set_mode(PaletteMode::Single(name), registry);
    }

    /// Black & white <-> all colors.
    pub fn toggle_black_white(&mut self, registry: &PaletteRegistry) {
        let next = if self.mode == PaletteMode::Single(ColorName::BlackWhite) {
            ColorName::All
        } else {
            ColorName::BlackWhite
        };
        self.set_color(next, registry);
    }

    /// All colors, whatever the current mode.
    pub fn force_all_colors(&mut self, registry: &PaletteRegistry) {
        self.set_color(ColorName::All, registry);
    }

    /// All colors, default delay and default cycle speed.
    pub fn reset_defaults(&mut self, registry: &PaletteRegistry) {
        self.config.delay = DEFAULT_DELAY;
        self.reset_cycle_speed();
        self.set_color(ColorName::All, registry);
    }

    /// Set the delay level directly.
    pub fn set_delay(&mut self, level: u8) {
        self.config.delay = level.min(MAX_DELAY);
        tracing::debug!(delay = self.config.delay, "delay changed");
    }

    /// Color key: membership toggle in additive mode, single color otherwise.
    pub fn color_key(
        &mut self,
        name: ColorName,
        registry: &PaletteRegistry,
    ) -> Result<(), SelectionError> {
        if self.mode == PaletteMode::Additive {
            self.additive.toggle(name)?;
            tracing::debug!(selection = ?self.additive.names(), "additive selection changed");
            self.refresh_palette(registry);
        } else {
            self.set_color(name, registry);
        }
        Ok(())
    }

    /// Color cycling <-> all colors.
    pub fn toggle_cycle(&mut self, registry: &PaletteRegistry) {
        if self.mode == PaletteMode::Cycling {
            self.reset_cycle_speed();
            self.set_color(ColorName::All, registry);
        } else {
            self.cycle.restart();
            self.set_mode(PaletteMode::Cycling, registry);
        }
    }

    /// Set the cycle speed (1-5). Only works while cycling.
    ///
    /// Returns whether the speed was applied.
    pub fn set_cycle_speed(&mut self, speed: u8) -> bool {
        if self.mode != PaletteMode::Cycling {
            return false;
        }
        self.cycle.set_speed(speed);
        tracing::debug!(threshold = self.cycle.threshold, "cycle speed changed");
        true
    }

    fn reset_cycle_speed(&mut self) {
        self.cycle.reset_speed();
        if self.config.test_mode {
            self.cycle.threshold = TEST_MODE_CYCLE_THRESHOLD;
        }
    }

    /// Additive mode <-> all colors. Entering starts over from `["B&W"]`.
    pub fn toggle_additive(&mut self, registry: &PaletteRegistry) {
        if self.mode == PaletteMode::Additive {
            self.set_color(ColorName::All, registry);
        } else {
            self.additive.reset();
            self.set_mode(PaletteMode::Additive, registry);
        }
    }

    /// Freeze / unfreeze the picture.
    pub fn toggle_freeze(&mut self) {
        self.frozen = !self.frozen;
        tracing::debug!(frozen = self.frozen, "freeze toggled");
    }

    /// Advance to the next test pattern, wrapping back to normal rendering.
    pub fn next_pattern(&mut self) {
        self.pattern = (self.pattern + 1) % (TestPattern::COUNT + 1);
        if self.pattern == 0 {
            self.color_changed = true;
        } else {
            self.needs_clear = true;
        }
        tracing::debug!(pattern = self.pattern, "test pattern changed");
    }

    /// Show or hide the stand-by banner.
    pub fn toggle_banner(&mut self) {
        self.banner = !self.banner;
        if self.banner {
            self.needs_clear = true;
        } else {
            self.color_changed = true;
        }
        tracing::debug!(banner = self.banner, "banner toggled");
    }

    /// Count one frame of color cycling, switching color when due.
    pub fn tick_cycle(&mut self, registry: &PaletteRegistry) {
        if self.mode != PaletteMode::Cycling {
            return;
        }
        if let Some(next) = self.cycle.tick() {
            tracing::debug!(color = %next, "cycled color");
            self.refresh_palette(registry);
        }
    }
}
