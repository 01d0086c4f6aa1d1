//! Color group registry.
//!
//! Maps every [`ColorName`] to its ordered list of terminal color indices,
//! with a reduced variant for terminals that only support 8 colors.

use std::fmt;
use std::str::FromStr;

/// Name of a built-in color group.
///
/// The set is closed: any string coming from the user is parsed into this
/// enum at the CLI/config boundary, so the registry can never be asked for
/// a group it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    All,
    BlackWhite,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl ColorName {
    /// Every group, in registry order.
    pub const ALL: [ColorName; 8] = [
        ColorName::All,
        ColorName::BlackWhite,
        ColorName::Red,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Yellow,
        ColorName::Cyan,
        ColorName::Magenta,
    ];

    /// Single hues a user may pick with `--color` or a color key.
    pub const HUES: [ColorName; 6] = [
        ColorName::Red,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Yellow,
        ColorName::Cyan,
        ColorName::Magenta,
    ];

    /// Order used by color cycling mode.
    pub const CYCLE: [ColorName; 7] = [
        ColorName::Red,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Yellow,
        ColorName::Cyan,
        ColorName::Magenta,
        ColorName::BlackWhite,
    ];

    /// Display name of the group.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::All => "all",
            ColorName::BlackWhite => "B&W",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Yellow => "yellow",
            ColorName::Cyan => "cyan",
            ColorName::Magenta => "magenta",
        }
    }

    /// One-character label drawn in test mode.
    pub fn label(self) -> char {
        match self {
            ColorName::All => 'a',
            ColorName::BlackWhite => 'B',
            ColorName::Red => 'r',
            ColorName::Green => 'g',
            ColorName::Blue => 'b',
            ColorName::Yellow => 'y',
            ColorName::Cyan => 'c',
            ColorName::Magenta => 'm',
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a selectable hue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is an invalid color name")]
pub struct UnknownColor(pub String);

impl FromStr for ColorName {
    type Err = UnknownColor;

    /// Parse a user-supplied hue name, case-insensitively.
    ///
    /// Only the six single hues are accepted; `all` and `B&W` are modes
    /// with their own flags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ColorName::HUES
            .iter()
            .copied()
            .find(|name| name.as_str() == lower)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// How many colors the terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 256-color (or better) terminal
    Full,
    /// 8-color terminal; groups use their reduced variant
    Reduced,
}

impl ColorDepth {
    /// Depth for a terminal reporting `colors` available colors.
    pub fn from_colors(colors: u16) -> Self {
        if colors < 256 {
            ColorDepth::Reduced
        } else {
            ColorDepth::Full
        }
    }

    /// Guess the depth from `COLORTERM` and `TERM`.
    pub fn detect() -> Self {
        let colorterm = std::env::var("COLORTERM").ok();
        let term = std::env::var("TERM").ok();
        Self::from_env(colorterm.as_deref(), term.as_deref())
    }

    /// Pure part of [`ColorDepth::detect`].
    pub fn from_env(colorterm: Option<&str>, term: Option<&str>) -> Self {
        if colorterm.is_some_and(|v| !v.trim().is_empty()) {
            return ColorDepth::Full;
        }
        let Some(term) = term else {
            return ColorDepth::Reduced;
        };
        const MODERN: &[&str] = &["256color", "direct", "kitty", "alacritty", "wezterm", "foot"];
        if MODERN.iter().any(|needle| term.contains(needle)) {
            ColorDepth::Full
        } else {
            ColorDepth::Reduced
        }
    }
}

/// A named, ordered list of terminal color indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroup {
    pub name: ColorName,
    /// Indices used on 256-color terminals
    pub full: Vec<u8>,
    /// Indices used on 8-color terminals
    pub reduced: Vec<u8>,
}

impl ColorGroup {
    fn new(name: ColorName, full: &[u8], reduced: &[u8]) -> Self {
        Self {
            name,
            full: full.to_vec(),
            reduced: reduced.to_vec(),
        }
    }

    /// Color indices for the given depth.
    pub fn colors(&self, depth: ColorDepth) -> &[u8] {
        match depth {
            ColorDepth::Full => &self.full,
            ColorDepth::Reduced => &self.reduced,
        }
    }
}

/// Immutable table of every built-in color group.
///
/// Built once at startup and passed by reference into the loop.
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    // Indexed by `ColorName as usize`, same order as `ColorName::ALL`
    groups: Vec<ColorGroup>,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteRegistry {
    /// The standard dstatic color groups.
    pub fn builtin() -> Self {
        use ColorName::*;
        let groups = vec![
            ColorGroup::new(
                All,
                &[16, 255, 160, 40, 21, 184, 164, 44, 124, 22, 17],
                &[0, 1, 2, 3, 4, 5, 6, 7],
            ),
            ColorGroup::new(
                BlackWhite,
                &[
                    16, 232, 233, 234, 235, 236, 237, 238, 240, 241, 242, 244, 245, 246, 247, 248,
                    249, 250, 252, 255,
                ],
                &[0, 7, 0, 7, 0, 7, 0, 7],
            ),
            ColorGroup::new(
                Red,
                &[52, 88, 124, 160, 196, 197, 160, 124, 160],
                &[1, 1, 1, 1, 1, 7, 0],
            ),
            ColorGroup::new(
                Green,
                &[22, 28, 34, 40, 46, 76, 40, 40, 22, 40],
                &[2, 2, 2, 2, 2, 7, 0],
            ),
            ColorGroup::new(
                Blue,
                &[17, 19, 20, 21, 26, 63, 21, 21, 17, 21],
                &[4, 4, 4, 4, 4, 7, 0],
            ),
            ColorGroup::new(
                Yellow,
                &[58, 94, 100, 106, 178, 184, 184, 184, 100],
                &[3, 3, 3, 3, 3, 7, 0],
            ),
            ColorGroup::new(
                Cyan,
                &[23, 30, 31, 44, 45, 51, 44, 44, 31],
                &[6, 6, 6, 6, 6, 7, 0],
            ),
            ColorGroup::new(
                Magenta,
                &[53, 91, 127, 126, 164, 201, 164, 164, 126],
                &[5, 5, 5, 5, 5, 7, 0],
            ),
        ];
        Self { groups }
    }

    /// Look up a group.
    pub fn group(&self, name: ColorName) -> &ColorGroup {
        &self.groups[name as usize]
    }

    /// Ordered color indices for one group at the given depth.
    pub fn resolve(&self, name: ColorName, depth: ColorDepth) -> Vec<u8> {
        self.group(name).colors(depth).to_vec()
    }

    /// Concatenation of every listed group's colors, in list order.
    ///
    /// Duplicates are kept: a color present in two groups gets two slots
    /// and so shows up twice as often.
    pub fn resolve_additive(&self, names: &[ColorName], depth: ColorDepth) -> Vec<u8> {
        names
            .iter()
            .flat_map(|name| self.group(*name).colors(depth).iter().copied())
            .collect()
    }
}
