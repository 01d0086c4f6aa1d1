//! Abstract key symbols and the crossterm adapter.
//!
//! The dispatcher only sees [`Key`]; turning terminal key codes into keys
//! happens here and nowhere else.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::palette::ColorName;

/// A command the user can issue while the static is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `q` / `Q`
    Quit,
    /// Ctrl-C while the terminal is in raw mode
    Interrupt,
    /// `b`: black & white <-> all colors
    ToggleBlackWhite,
    /// `C`: all colors, whatever the current mode
    AllColors,
    /// `d` / `D`: back to defaults
    Reset,
    /// `0`-`9`: delay level
    Delay(u8),
    /// `r t y u i o`: single color, or membership toggle in additive mode
    Color(ColorName),
    /// `c`: color cycling <-> all colors
    ToggleCycle,
    /// shift+`1`-`5`: cycle speed
    CycleSpeed(u8),
    /// `a`: additive mode <-> all colors
    ToggleAdditive,
    /// `f`: freeze / unfreeze
    Freeze,
    /// `l`: clear the screen and pause
    ClearPause,
    /// `p`: next test pattern
    NextPattern,
    /// `s`: stand-by banner
    ToggleBanner,
    /// Anything without a binding
    Other,
}

/// Character bindings, digits excluded.
pub const KEY_BINDINGS: &[(char, Key)] = &[
    ('q', Key::Quit),
    ('Q', Key::Quit),
    ('b', Key::ToggleBlackWhite),
    ('C', Key::AllColors),
    ('d', Key::Reset),
    ('D', Key::Reset),
    ('r', Key::Color(ColorName::Red)),
    ('t', Key::Color(ColorName::Green)),
    ('y', Key::Color(ColorName::Blue)),
    ('u', Key::Color(ColorName::Yellow)),
    ('i', Key::Color(ColorName::Magenta)),
    ('o', Key::Color(ColorName::Cyan)),
    ('c', Key::ToggleCycle),
    ('!', Key::CycleSpeed(1)),
    ('@', Key::CycleSpeed(2)),
    ('#', Key::CycleSpeed(3)),
    ('$', Key::CycleSpeed(4)),
    ('%', Key::CycleSpeed(5)),
    ('a', Key::ToggleAdditive),
    ('f', Key::Freeze),
    ('l', Key::ClearPause),
    ('p', Key::NextPattern),
    ('s', Key::ToggleBanner),
];

impl Key {
    /// Key bound to a typed character.
    pub fn from_char(c: char) -> Key {
        if let Some(digit) = c.to_digit(10) {
            return Key::Delay(digit as u8);
        }
        KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == c)
            .map(|(_, key)| *key)
            .unwrap_or(Key::Other)
    }
}

/// Translate a crossterm key event.
///
/// Releases are dropped; unbound keys become [`Key::Other`] so screen
/// saver mode still sees them.
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Key::Interrupt
        }
        KeyCode::Char(c) => Key::from_char(c),
        _ => Key::Other,
    };
    Some(key)
}
