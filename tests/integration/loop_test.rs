//! Integration tests for the animation loop, driven through the capture backend

use std::time::{Duration, Instant};

use dstatic::backend::{CaptureBackend, ScriptItem};
use dstatic::palette::{ColorDepth, ColorName};
use dstatic::player::input::Key;
use dstatic::player::render::{pattern_cells, render_pattern, TestPattern};
use dstatic::player::{ExitReason, PaletteMode};
use dstatic::{PaletteRegistry, RunConfig};

use crate::helpers::{fast_config, run_script};

fn keys(keys: &[Key]) -> Vec<ScriptItem> {
    keys.iter().copied().map(ScriptItem::Key).collect()
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn lowercase_quit_terminates_and_clears() {
    let run = run_script(fast_config(), keys(&[Key::Other, Key::Quit]), false);

    assert_eq!(run.reason, ExitReason::QuitKey);
    assert!(run.backend.is_blank());
    assert!(run.backend.clears >= 1);
}

#[test]
fn uppercase_quit_terminates_via_binding_table() {
    let run = run_script(fast_config(), keys(&[Key::from_char('Q')]), false);

    assert_eq!(run.reason, ExitReason::QuitKey);
    assert!(run.backend.is_blank());
}

#[test]
fn screen_saver_quits_on_any_key() {
    let config = RunConfig {
        screen_saver: true,
        ..fast_config()
    };
    let run = run_script(config, keys(&[Key::Delay(3)]), false);

    assert_eq!(run.reason, ExitReason::ScreenSaver);
    // The key was not applied
    assert_eq!(run.state.config.delay, 0);
}

#[test]
fn screen_saver_wins_over_disabled_keys() {
    let config = RunConfig {
        screen_saver: true,
        disable_all_keys: true,
        ..fast_config()
    };
    let run = run_script(config, keys(&[Key::Other]), false);

    assert_eq!(run.reason, ExitReason::ScreenSaver);
}

#[test]
fn screen_saver_ignores_resize() {
    let config = RunConfig {
        screen_saver: true,
        ..fast_config()
    };
    let run = run_script(
        config,
        vec![ScriptItem::Resize(30, 10), ScriptItem::Key(Key::Other)],
        false,
    );

    assert_eq!(run.reason, ExitReason::ScreenSaver);
    assert_eq!(run.state.cols, 30);
}

#[test]
fn disable_all_keys_only_stops_on_interrupt() {
    let config = RunConfig {
        disable_all_keys: true,
        ..fast_config()
    };
    let script = keys(&[Key::Quit, Key::from_char('Q'), Key::ToggleBlackWhite, Key::Quit]);
    let run = run_script(config, script, true);

    assert_eq!(run.reason, ExitReason::Interrupted);
    assert_eq!(run.backend.remaining_script(), 0);
    assert_eq!(run.state.mode, PaletteMode::Single(ColorName::All));
    assert!(run.backend.is_blank());
}

#[test]
fn disable_keys_still_allows_quit() {
    let config = RunConfig {
        disable_keys: true,
        ..fast_config()
    };
    let run = run_script(config, keys(&[Key::ToggleCycle, Key::Quit]), false);

    assert_eq!(run.reason, ExitReason::QuitKey);
    assert_eq!(run.state.mode, PaletteMode::Single(ColorName::All));
}

#[test]
fn ctrl_c_key_interrupts_even_with_all_keys_disabled() {
    let config = RunConfig {
        disable_all_keys: true,
        ..fast_config()
    };
    let run = run_script(config, keys(&[Key::Interrupt]), false);

    assert_eq!(run.reason, ExitReason::Interrupted);
}

#[test]
fn run_timer_stops_after_it_elapses() {
    let config = RunConfig {
        run_timer: Some(Duration::from_secs(2)),
        ..fast_config()
    };
    let start = Instant::now();
    let run = run_script(config, Vec::new(), false);

    assert_eq!(run.reason, ExitReason::Timer);
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert!(run.backend.is_blank());
}

// ============================================================================
// Palette changes
// ============================================================================

#[test]
fn additive_slots_match_remaining_selection() {
    let config = RunConfig {
        additive: true,
        ..fast_config()
    };
    let script = keys(&[
        Key::Color(ColorName::Red),
        Key::Color(ColorName::Green),
        Key::Color(ColorName::Red),
        Key::Other,
        Key::Quit,
    ]);
    let run = run_script(config, script, false);

    let registry = PaletteRegistry::builtin();
    let expected =
        registry.resolve_additive(&[ColorName::BlackWhite, ColorName::Green], ColorDepth::Full);
    assert_eq!(expected.len(), 30);
    assert_eq!(run.state.slots, expected);
    assert_eq!(run.backend.palettes.last(), Some(&expected));
}

#[test]
fn every_palette_change_is_registered_once() {
    let script = keys(&[
        Key::Color(ColorName::Blue),
        Key::Other,
        Key::ToggleBlackWhite,
        Key::Quit,
    ]);
    let run = run_script(fast_config(), script, false);

    let lengths: Vec<usize> = run.backend.palettes.iter().map(Vec::len).collect();
    // all, blue, B&W
    assert_eq!(lengths, vec![11, 10, 20]);
}

#[test]
fn cycling_in_test_mode_changes_color_every_few_frames() {
    let config = RunConfig {
        cycle_colors: true,
        test_mode: true,
        ..fast_config()
    };
    let script = vec![ScriptItem::Idle; 8];
    let run = run_script(config, script, true);

    // 9 frames at a threshold of 3: red -> green -> blue
    assert_eq!(run.state.mode, PaletteMode::Cycling);
    assert_eq!(run.state.cycle.current(), ColorName::Blue);
}

#[test]
fn reset_key_restores_defaults() {
    let script = keys(&[Key::Delay(1), Key::Color(ColorName::Cyan), Key::Reset, Key::Quit]);
    let run = run_script(fast_config(), script, false);

    assert_eq!(run.state.config.delay, 4);
    assert_eq!(run.state.mode, PaletteMode::Single(ColorName::All));
}

// ============================================================================
// Screen modes
// ============================================================================

#[test]
fn frozen_loop_keeps_polling_without_drawing() {
    let script = keys(&[Key::Freeze, Key::Other, Key::Other, Key::Quit]);
    let run = run_script(fast_config(), script, false);

    assert!(run.state.frozen);
    assert_eq!(run.backend.draws, 20 * 6);
    assert_eq!(run.backend.polls, 4);
}

#[test]
fn resize_is_picked_up_by_next_frame() {
    let script = vec![ScriptItem::Resize(32, 9), ScriptItem::Key(Key::Quit)];
    let run = run_script(fast_config(), script, false);

    assert_eq!((run.state.cols, run.state.rows), (32, 9));
    // first frame 20x6, second full redraw at 32x9
    assert_eq!(run.backend.draws, 20 * 6 + 32 * 9);
}

#[test]
fn clear_and_pause_blanks_then_resumes() {
    let config = RunConfig {
        clear_pause: Duration::from_millis(100),
        ..fast_config()
    };
    let start = Instant::now();
    let run = run_script(config, keys(&[Key::ClearPause, Key::Quit]), false);

    assert!(start.elapsed() >= Duration::from_millis(100));
    assert_eq!(run.backend.clears, 2);
    // frame after the pause was a full redraw with the same palette
    assert_eq!(run.backend.palettes.len(), 2);
}

#[test]
fn pattern_key_switches_to_test_pattern() {
    let script = keys(&[Key::NextPattern, Key::Other, Key::Quit]);
    let run = run_script(fast_config(), script, false);

    assert_eq!(run.state.pattern, 1);
    // one clear before the pattern, one on exit
    assert_eq!(run.backend.clears, 2);
}

#[test]
fn vertical_bars_golden_screen() {
    let mut backend = CaptureBackend::new(16, 3);
    render_pattern(
        &mut backend,
        TestPattern::VerticalBars,
        16,
        3,
        true,
        ColorDepth::Full,
    )
    .unwrap();

    assert_eq!(
        backend.text(),
        "WWYYCCGGMMRRBBKK\nWWYYCCGGMMRRBBKK\nWWYYCCGGMMRRBBKK"
    );
}

#[test]
fn calibration_pattern_is_identical_across_renders() {
    let a = pattern_cells(TestPattern::Calibration, 41, 17, false, ColorDepth::Reduced);
    let b = pattern_cells(TestPattern::Calibration, 41, 17, false, ColorDepth::Reduced);
    assert_eq!(a, b);
}
