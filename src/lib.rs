//! dstatic - digital static for the terminal
//!
//! Fills the screen with colored noise that can be recolored, sped up,
//! frozen or swapped for test patterns while it runs.
//!
//! The animation loop only talks to the [`backend::Backend`] trait, so it
//! runs the same against a real terminal ([`backend::CrosstermBackend`])
//! or an in-memory grid ([`backend::CaptureBackend`]).

pub mod backend;
pub mod cli;
pub mod config;
pub mod logging;
pub mod palette;
pub mod player;
pub mod signals;

pub use config::{RunConfig, Settings};
pub use palette::{ColorDepth, ColorName, PaletteRegistry};
pub use player::{run, ExitReason};
