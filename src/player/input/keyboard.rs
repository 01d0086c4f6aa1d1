//! Keyboard dispatch for the animation loop.
//!
//! Applies the disable/screen saver gates, then routes each [`Key`] to the
//! state transition it triggers.

use crate::palette::PaletteRegistry;
use crate::player::input::Key;
use crate::player::state::{ExitReason, InputResult, StaticState};

/// Handle one key press.
///
/// Gate order matters: an interrupt always stops; in screen saver mode any
/// key stops, even with keys disabled; `disable_all_keys` swallows the
/// quit key too, `disable_keys` everything but quit.
pub fn handle_key_event(
    key: Key,
    state: &mut StaticState,
    registry: &PaletteRegistry,
) -> InputResult {
    if key == Key::Interrupt {
        return InputResult::Quit(ExitReason::Interrupted);
    }
    if state.config.screen_saver {
        return InputResult::Quit(ExitReason::ScreenSaver);
    }
    if state.config.disable_all_keys {
        return InputResult::Continue;
    }
    if key == Key::Quit {
        return InputResult::Quit(ExitReason::QuitKey);
    }
    if state.config.disable_keys {
        return InputResult::Continue;
    }

    match key {
        // === Palette ===
        Key::ToggleBlackWhite => state.toggle_black_white(registry),
        Key::AllColors => state.force_all_colors(registry),
        Key::Reset => state.reset_defaults(registry),
        Key::Color(name) => {
            if let Err(e) = state.color_key(name, registry) {
                tracing::debug!("{}", e);
            }
        }
        Key::ToggleCycle => state.toggle_cycle(registry),
        Key::CycleSpeed(speed) => {
            state.set_cycle_speed(speed);
        }
        Key::ToggleAdditive => state.toggle_additive(registry),

        // === Speed ===
        Key::Delay(level) => state.set_delay(level),

        // === Screen ===
        Key::Freeze => state.toggle_freeze(),
        Key::ClearPause => return InputResult::ClearAndPause,
        Key::NextPattern => state.next_pattern(),
        Key::ToggleBanner => state.toggle_banner(),

        // Handled by the gates above
        Key::Quit | Key::Interrupt => {}
        Key::Other => {}
    }
    InputResult::Continue
}
