//! Shared helpers for the integration tests

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use dstatic::backend::{Backend, CaptureBackend, ScriptItem};
use dstatic::player::render::FrameRenderer;
use dstatic::player::{run_with, ExitReason, StaticState};
use dstatic::{PaletteRegistry, RunConfig};

/// Default configuration at the fastest delay, so tests do not crawl.
pub fn fast_config() -> RunConfig {
    RunConfig {
        delay: 0,
        ..RunConfig::default()
    }
}

/// Outcome of a scripted run.
pub struct ScriptedRun {
    pub reason: ExitReason,
    pub backend: CaptureBackend,
    pub state: StaticState,
}

/// Run the loop on a 20x6 capture backend with the given input script.
///
/// When `interrupt_when_done` is set, running out of script raises the
/// interrupt flag like a Ctrl-C from outside.
pub fn run_script(
    config: RunConfig,
    script: Vec<ScriptItem>,
    interrupt_when_done: bool,
) -> ScriptedRun {
    let registry = PaletteRegistry::builtin();
    let interrupt = Arc::new(AtomicBool::new(false));
    let mut backend = CaptureBackend::new(20, 6).with_script(script);
    if interrupt_when_done {
        backend = backend.interrupt_when_done(Arc::clone(&interrupt));
    }
    let (cols, rows) = backend.size().expect("capture size");
    let mut state = StaticState::new(config, &registry, cols, rows);
    let mut renderer = FrameRenderer::with_rng(StdRng::seed_from_u64(42));

    let reason = run_with(&mut backend, &mut state, &registry, &mut renderer, &interrupt)
        .expect("loop should not fail on a capture backend");
    ScriptedRun {
        reason,
        backend,
        state,
    }
}
