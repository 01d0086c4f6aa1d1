//! Run configuration and the optional settings file.
//!
//! `RunConfig` is the resolved record the animation loop runs with. It is
//! built from command line flags layered over an optional read-only
//! settings file (`~/.config/dstatic/config.toml`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::palette::{ColorDepth, ColorName, UnknownColor, CYCLE_SPEEDS, DEFAULT_CYCLE_SPEED};

/// Sleep per frame for each delay level, in milliseconds.
pub const DELAY_SPEEDS_MS: [u64; 10] = [10, 40, 50, 60, 70, 90, 110, 150, 200, 400];

/// Delay level used when nothing else is configured.
pub const DEFAULT_DELAY: u8 = 4;

/// Highest accepted delay level.
pub const MAX_DELAY: u8 = 9;

/// How long the clear-and-pause command keeps the screen empty.
pub const CLEAR_PAUSE: Duration = Duration::from_secs(2);

/// Frame sleep for a delay level. Levels above 9 use the slowest speed.
pub fn delay_duration(level: u8) -> Duration {
    let idx = (level.min(MAX_DELAY)) as usize;
    Duration::from_millis(DELAY_SPEEDS_MS[idx])
}

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} is an invalid positive int 0 to 9")]
    InvalidDelay(u8),

    #[error(transparent)]
    InvalidColor(#[from] UnknownColor),

    #[error("{0} is an invalid cycle speed (1 to 5)")]
    InvalidCycleSpeed(u8),

    #[error("{0} is an invalid color count (8 or 256)")]
    InvalidColorCount(u16),
}

/// Palette the loop starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPalette {
    BlackWhite,
    Color(ColorName),
    Cycle,
    Additive,
    All,
}

/// Everything the animation loop needs to know before it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Delay level 0-9
    pub delay: u8,
    pub black_white: bool,
    pub color: Option<ColorName>,
    pub cycle_colors: bool,
    pub additive: bool,
    /// Shift+digit speed (1-5) for color cycling
    pub cycle_speed: u8,
    /// Wait before the first frame
    pub start_timer: Option<Duration>,
    /// Stop after this long
    pub run_timer: Option<Duration>,
    /// Any key quits
    pub screen_saver: bool,
    /// Ignore every key except quit
    pub disable_keys: bool,
    /// Ignore every key, including quit
    pub disable_all_keys: bool,
    /// Deterministic label glyphs instead of random shades
    pub test_mode: bool,
    pub depth: ColorDepth,
    /// Length of the clear-and-pause command
    pub clear_pause: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            black_white: false,
            color: None,
            cycle_colors: false,
            additive: false,
            cycle_speed: DEFAULT_CYCLE_SPEED as u8 + 1,
            start_timer: None,
            run_timer: None,
            screen_saver: false,
            disable_keys: false,
            disable_all_keys: false,
            test_mode: false,
            depth: ColorDepth::Full,
            clear_pause: CLEAR_PAUSE,
        }
    }
}

impl RunConfig {
    /// Starting palette, by precedence: black & white, single color,
    /// cycling, additive, then all colors.
    pub fn start_palette(&self) -> StartPalette {
        if self.black_white {
            StartPalette::BlackWhite
        } else if let Some(color) = self.color {
            StartPalette::Color(color)
        } else if self.cycle_colors {
            StartPalette::Cycle
        } else if self.additive {
            StartPalette::Additive
        } else {
            StartPalette::All
        }
    }

    /// Cycle threshold in frames for the configured cycle speed.
    pub fn cycle_threshold(&self) -> u32 {
        let idx = (self.cycle_speed as usize)
            .saturating_sub(1)
            .min(CYCLE_SPEEDS.len() - 1);
        CYCLE_SPEEDS[idx]
    }
}

/// Optional defaults read from the settings file.
///
/// Every field may be omitted. Command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default delay level (0-9)
    pub delay: Option<u8>,
    /// Default single color
    pub color: Option<String>,
    /// Default color cycle speed (1-5)
    pub cycle_speed: Option<u8>,
    /// Force 8 or 256 colors instead of detecting
    pub colors: Option<u16>,
}

impl Settings {
    /// `<config dir>/dstatic/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dstatic").join("config.toml"))
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one the default path is tried
    /// and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let settings = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(delay) = self.delay {
            if delay > MAX_DELAY {
                return Err(ConfigError::InvalidDelay(delay));
            }
        }
        if let Some(speed) = self.cycle_speed {
            if !(1..=CYCLE_SPEEDS.len() as u8).contains(&speed) {
                return Err(ConfigError::InvalidCycleSpeed(speed));
            }
        }
        if let Some(colors) = self.colors {
            if colors != 8 && colors != 256 {
                return Err(ConfigError::InvalidColorCount(colors));
            }
        }
        self.color_name()?;
        Ok(())
    }

    /// The configured color parsed into a [`ColorName`].
    pub fn color_name(&self) -> Result<Option<ColorName>, ConfigError> {
        match &self.color {
            Some(name) => Ok(Some(name.parse()?)),
            None => Ok(None),
        }
    }
}
