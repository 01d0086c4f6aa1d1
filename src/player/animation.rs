//! The animation loop.
//!
//! Draws frames, sleeps, advances timers and applies one key per
//! iteration until a quit request, timer expiry or interrupt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::Rng;

use crate::backend::{Backend, InputEvent};
use crate::config::RunConfig;
use crate::palette::PaletteRegistry;
use crate::player::input::{handle_event, Key};
use crate::player::render::{render_banner, render_pattern, FrameRenderer};
use crate::player::state::{ExitReason, InputResult, StaticState};
use crate::signals::wait_unless_interrupted;

/// Input poll interval while waiting for the start timer.
const START_POLL: Duration = Duration::from_millis(50);

/// Run the animation on `backend` until it terminates.
///
/// Waits out the start timer first; an interrupt during that wait, either
/// a signal or Ctrl-C read from the backend, ends the run without drawing
/// anything.
pub fn run<B: Backend + ?Sized>(
    backend: &mut B,
    config: RunConfig,
    registry: &PaletteRegistry,
    interrupt: &AtomicBool,
) -> Result<ExitReason> {
    if let Some(start) = config.start_timer {
        tracing::info!(?start, "waiting before first frame");
        if wait_for_start(backend, start, interrupt)? {
            return Ok(ExitReason::Interrupted);
        }
    }

    let (cols, rows) = backend.size().context("Failed to read terminal size")?;
    let mut state = StaticState::new(config, registry, cols, rows);
    let mut renderer = FrameRenderer::new();
    run_with(backend, &mut state, registry, &mut renderer, interrupt)
}

/// Sleep for `duration` while watching for interrupts.
///
/// Raw mode turns Ctrl-C into a key press, so the backend is polled as
/// well as the signal flag. Other input is discarded.
///
/// Returns true if the wait was interrupted.
fn wait_for_start<B: Backend + ?Sized>(
    backend: &mut B,
    duration: Duration,
    interrupt: &AtomicBool,
) -> Result<bool> {
    let deadline = Instant::now() + duration;
    loop {
        if interrupt.load(Ordering::SeqCst) {
            return Ok(true);
        }
        while let Some(event) = backend.poll_event().context("Failed to read input")? {
            if event == InputEvent::Key(Key::Interrupt) {
                interrupt.store(true, Ordering::SeqCst);
            }
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(interrupt.load(Ordering::SeqCst));
        }
        wait_unless_interrupted(START_POLL.min(deadline - now), interrupt);
    }
}

/// Run the loop with caller-provided state and random source.
pub fn run_with<B: Backend + ?Sized, R: Rng>(
    backend: &mut B,
    state: &mut StaticState,
    registry: &PaletteRegistry,
    renderer: &mut FrameRenderer<R>,
    interrupt: &AtomicBool,
) -> Result<ExitReason> {
    tracing::info!(
        cols = state.cols,
        rows = state.rows,
        mode = ?state.mode,
        delay = state.config.delay,
        "animation started"
    );
    let deadline = state.config.run_timer.map(|d| Instant::now() + d);

    let reason = loop {
        if interrupt.load(Ordering::SeqCst) {
            break ExitReason::Interrupted;
        }

        if !state.frozen {
            draw_frame(backend, state, renderer)?;
        }
        backend.flush().context("Failed to flush frame")?;
        std::thread::sleep(state.frame_delay());

        if !state.frozen {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break ExitReason::Timer;
            }
            state.tick_cycle(registry);
        }

        let Some(event) = backend.poll_event().context("Failed to read input")? else {
            continue;
        };
        match handle_event(event, state, registry) {
            InputResult::Continue => {}
            InputResult::ClearAndPause => {
                backend.clear()?;
                backend.flush()?;
                if wait_unless_interrupted(state.config.clear_pause, interrupt) {
                    break ExitReason::Interrupted;
                }
                state.color_changed = true;
            }
            InputResult::Quit(reason) => break reason,
        }
    };

    backend.clear().context("Failed to clear screen")?;
    backend.flush().context("Failed to flush screen")?;
    tracing::info!(?reason, "animation stopped");
    Ok(reason)
}

/// Draw whatever the current state shows: banner, test pattern or static.
fn draw_frame<B: Backend + ?Sized, R: Rng>(
    backend: &mut B,
    state: &mut StaticState,
    renderer: &mut FrameRenderer<R>,
) -> Result<()> {
    let (cols, rows) = backend.size()?;
    state.handle_resize(cols, rows);
    if state.needs_clear {
        backend.clear()?;
        state.needs_clear = false;
    }

    let depth = state.config.depth;
    if state.banner {
        render_banner(backend, state.cols, state.rows, depth)?;
    } else if let Some(pattern) = state.test_pattern() {
        render_pattern(
            backend,
            pattern,
            state.cols,
            state.rows,
            state.config.test_mode,
            depth,
        )?;
    } else {
        let full = state.color_changed;
        if full {
            backend.set_palette(&state.slots)?;
        }
        renderer.render(
            backend,
            state.cols,
            state.rows,
            &state.slots,
            state.glyph_policy(),
            full,
        )?;
        state.color_changed = false;
    }
    Ok(())
}
