//! Interrupt handling.
//!
//! SIGINT (through ctrlc) and, on Unix, SIGTERM and SIGHUP (through
//! signal-hook) all raise one shared flag. The animation loop checks it
//! every frame; waits check it while they sleep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Granularity of interruptible waits.
const WAIT_SLICE: Duration = Duration::from_millis(50);

/// Install the handlers and return the flag they raise.
///
/// Can only be called once per process.
#[cfg(not(tarpaulin_include))]
pub fn install() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));

    let handler_flag = Arc::clone(&flag);
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })
    .context("Failed to install Ctrl-C handler")?;

    #[cfg(unix)]
    {
        use signal_hook::consts::signal::{SIGHUP, SIGTERM};
        for signal in [SIGTERM, SIGHUP] {
            signal_hook::flag::register(signal, Arc::clone(&flag))
                .with_context(|| format!("Failed to register handler for signal {}", signal))?;
        }
    }

    Ok(flag)
}

/// Sleep for `duration`, waking early if `interrupt` is raised.
///
/// Returns true if the wait was interrupted.
pub fn wait_unless_interrupted(duration: Duration, interrupt: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if interrupt.load(Ordering::SeqCst) {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        std::thread::sleep(WAIT_SLICE.min(deadline - now));
    }
}
