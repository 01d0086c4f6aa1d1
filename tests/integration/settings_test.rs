//! Integration tests for the settings file

use std::fs;

use clap::Parser;
use tempfile::TempDir;

use dstatic::cli::Cli;
use dstatic::config::ConfigError;
use dstatic::{ColorDepth, ColorName, Settings};

fn write_settings(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write settings");
    (dir, path)
}

#[test]
fn settings_file_supplies_defaults() {
    let (_dir, path) =
        write_settings("delay = 2\ncolor = \"Magenta\"\ncycle_speed = 5\ncolors = 8\n");
    let settings = Settings::load(Some(path.as_path())).unwrap();

    let cli = Cli::try_parse_from(["dstatic"]).unwrap();
    let config = cli.run_config(&settings).unwrap();

    assert_eq!(config.delay, 2);
    assert_eq!(config.color, Some(ColorName::Magenta));
    assert_eq!(config.cycle_threshold(), 250);
    assert_eq!(config.depth, ColorDepth::Reduced);
}

#[test]
fn command_line_overrides_settings_file() {
    let (_dir, path) = write_settings("delay = 2\ncolor = \"magenta\"\n");
    let settings = Settings::load(Some(path.as_path())).unwrap();

    let cli = Cli::try_parse_from(["dstatic", "-d", "6", "-C", "yellow"]).unwrap();
    let config = cli.run_config(&settings).unwrap();

    assert_eq!(config.delay, 6);
    assert_eq!(config.color, Some(ColorName::Yellow));
}

#[test]
fn empty_settings_file_is_all_defaults() {
    let (_dir, path) = write_settings("");
    assert_eq!(Settings::load(Some(path.as_path())).unwrap(), Settings::default());
}

#[test]
fn malformed_settings_file_is_rejected() {
    let (_dir, path) = write_settings("delay = \"fast\"\n");
    assert!(matches!(
        Settings::load(Some(path.as_path())),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn unknown_setting_is_rejected() {
    let (_dir, path) = write_settings("speed = 3\n");
    assert!(matches!(
        Settings::load(Some(path.as_path())),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn out_of_range_values_are_rejected() {
    let (_dir, path) = write_settings("delay = 11\n");
    let err = Settings::load(Some(path.as_path())).unwrap_err();
    assert_eq!(err.to_string(), "11 is an invalid positive int 0 to 9");

    let (_dir, path) = write_settings("color = \"orange\"\n");
    let err = Settings::load(Some(path.as_path())).unwrap_err();
    assert_eq!(err.to_string(), "orange is an invalid color name");
}

#[test]
fn settings_file_is_never_modified() {
    let content = "delay = 3\n";
    let (_dir, path) = write_settings(content);
    let settings = Settings::load(Some(path.as_path())).unwrap();
    let cli = Cli::try_parse_from(["dstatic", "-d", "9"]).unwrap();
    cli.run_config(&settings).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}
