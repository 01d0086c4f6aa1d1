//! Command line interface.
//!
//! Flag names keep their snake_case long forms (`--start_timer`,
//! `--list_colors`, ...) so existing scripts keep working.

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::config::{ConfigError, RunConfig, Settings, DEFAULT_DELAY, MAX_DELAY};
use crate::palette::{ColorDepth, ColorName};

/// Version string: package version plus git commit and build date when
/// the build recorded them.
pub fn version_string() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let date = option_env!("DSTATIC_BUILD_DATE").unwrap_or("unknown");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if !sha.is_empty() && sha != "unknown" => {
                let short = sha.get(..7).unwrap_or(sha);
                format!("{} ({} {})", version, short, date)
            }
            _ => format!("{} ({})", version, date),
        }
    })
}

#[derive(Debug, Parser)]
#[command(name = "dstatic")]
#[command(version = version_string())]
#[command(about = "Digital static for your terminal")]
#[command(
    long_about = "Fills the terminal with animated static. Colors, speed and test patterns \
                  can be changed while it runs; see --list_commands."
)]
pub struct Cli {
    /// Delay setting (speed): 0-Fast, 4-Default, 9-Slow
    #[arg(short = 'd', value_name = "DELAY", value_parser = delay_level)]
    pub delay: Option<u8>,

    /// Enable black and white mode. Overrides -C
    #[arg(short = 'b')]
    pub black_white: bool,

    /// Set a single color to use
    #[arg(short = 'C', long, value_name = "COLOR", value_parser = color_type)]
    pub color: Option<ColorName>,

    /// Set a start timer in seconds
    #[arg(short = 's', long = "start_timer", value_name = "SECONDS", value_parser = pos_int)]
    pub start_timer: Option<u64>,

    /// Set a run timer in seconds
    #[arg(short = 'r', long = "run_timer", value_name = "SECONDS", value_parser = pos_int)]
    pub run_timer: Option<u64>,

    /// Screen saver mode. Any key will quit
    #[arg(short = 'S', long = "screen_saver")]
    pub screen_saver: bool,

    /// Cycle through colors
    #[arg(short = 'c', long = "cycle_colors")]
    pub cycle_colors: bool,

    /// Additive color mode. Use color keys (r,t,y,u,i,o) to add and remove colors
    #[arg(short = 'a', long)]
    pub additive: bool,

    /// Disable keys while running except for 'Q' or 'q' and for ctrl-c.
    /// Does not affect screen saver mode.
    #[arg(short = 'D', long = "disable_keys")]
    pub disable_keys: bool,

    /// Disable all keys while running including 'Q' and 'q'. Use ctrl-c to
    /// quit. Does not affect screen saver mode.
    #[arg(long = "disable_all_keys")]
    pub disable_all_keys: bool,

    /// List available colors and exit
    #[arg(long = "list_colors")]
    pub list_colors: bool,

    /// List running commands and exit
    #[arg(long = "list_commands")]
    pub list_commands: bool,

    /// Force 8 or 256 colors instead of detecting from the environment
    #[arg(long, value_name = "8|256", value_parser = color_count)]
    pub colors: Option<u16>,

    /// Read defaults from this settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    #[arg(long = "test_mode", hide = true)]
    pub test_mode: bool,
}

impl Cli {
    /// Merge the flags over the settings file into a [`RunConfig`].
    ///
    /// Color depth comes from `--colors`, then the settings file, then the
    /// environment.
    pub fn run_config(&self, settings: &Settings) -> Result<RunConfig, ConfigError> {
        let depth = match self.colors.or(settings.colors) {
            Some(colors) => ColorDepth::from_colors(colors),
            None => ColorDepth::detect(),
        };
        let defaults = RunConfig::default();
        Ok(RunConfig {
            delay: self.delay.or(settings.delay).unwrap_or(DEFAULT_DELAY),
            black_white: self.black_white,
            color: match self.color {
                Some(color) => Some(color),
                None => settings.color_name()?,
            },
            cycle_colors: self.cycle_colors,
            additive: self.additive,
            cycle_speed: settings.cycle_speed.unwrap_or(defaults.cycle_speed),
            start_timer: self.start_timer.map(Duration::from_secs),
            run_timer: self.run_timer.map(Duration::from_secs),
            screen_saver: self.screen_saver,
            disable_keys: self.disable_keys,
            disable_all_keys: self.disable_all_keys,
            test_mode: self.test_mode,
            depth,
            clear_pause: defaults.clear_pause,
        })
    }

    /// Write the completion script for `shell` to stdout.
    #[cfg(not(tarpaulin_include))]
    pub fn print_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "dstatic", &mut std::io::stdout());
    }
}

/// Delay level 0-9.
fn delay_level(value: &str) -> Result<u8, String> {
    let msg = format!("{} is an invalid positive int 0 to {}", value, MAX_DELAY);
    match value.trim().parse::<u8>() {
        Ok(level) if level <= MAX_DELAY => Ok(level),
        _ => Err(msg),
    }
}

/// Whole number of seconds, at least 1.
fn pos_int(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} is an invalid positive int value", value)),
    }
}

/// One of the six hues, any case.
fn color_type(value: &str) -> Result<ColorName, String> {
    value.parse::<ColorName>().map_err(|e| e.to_string())
}

fn color_count(value: &str) -> Result<u16, String> {
    match value.trim() {
        "8" => Ok(8),
        "256" => Ok(256),
        _ => Err(format!("{} is an invalid color count (8 or 256)", value)),
    }
}
