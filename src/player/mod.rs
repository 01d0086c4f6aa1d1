//! Static animation player
//!
//! Draws terminal static until a quit key, timer or interrupt stops it.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: StaticState struct and shared types (ExitReason, InputResult)
//! - `input/`: Key symbols and keyboard dispatch
//! - `render/`: Static frames, test patterns, banner and command list
//! - `animation`: The frame loop tying them together
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use dstatic::backend::CrosstermBackend;
//! use dstatic::config::RunConfig;
//! use dstatic::palette::PaletteRegistry;
//! use dstatic::player::run;
//!
//! let mut backend = CrosstermBackend::enter().unwrap();
//! let interrupt = AtomicBool::new(false);
//! let reason = run(&mut backend, RunConfig::default(), &PaletteRegistry::builtin(), &interrupt);
//! println!("{:?}", reason);
//! ```

mod animation;
pub mod input;
pub mod render;
pub mod state;

pub use animation::{run, run_with};
pub use state::{ExitReason, InputResult, PaletteMode, StaticState};
