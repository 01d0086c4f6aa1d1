//! Input handling for the animation loop.
//!
//! `key` turns terminal key codes into abstract [`Key`] symbols;
//! `keyboard` applies a key to the animation state.

mod key;
mod keyboard;

pub use key::{key_from_event, Key, KEY_BINDINGS};
pub use keyboard::handle_key_event;

use crate::backend::InputEvent;
use crate::palette::PaletteRegistry;
use crate::player::state::{InputResult, StaticState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: InputEvent,
    state: &mut StaticState,
    registry: &PaletteRegistry,
) -> InputResult {
    match event {
        InputEvent::Key(key) => handle_key_event(key, state, registry),
        InputEvent::Resize(cols, rows) => {
            state.handle_resize(cols, rows);
            state.color_changed = true;
            InputResult::Continue
        }
    }
}
