//! Loading configuration from TOML files.

use multiboard::LayoutMode;
use multiboard_term::{AppConfig, Cli};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("columns = 4\nlayout = \"fill\"\n");
    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.columns(), 4);
    assert_eq!(*config.rows(), 3);
    assert_eq!(*config.layout(), LayoutMode::Fill);
    assert_eq!(*config.target_fps(), 60);
}

#[test]
fn test_flags_override_file() {
    let file = write_config("columns = 4\nrows = 2\ntarget_fps = 30\n");
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        rows: Some(5),
        hint: true,
        ..Default::default()
    };
    let config = AppConfig::from_cli(&cli).unwrap();

    assert_eq!(*config.columns(), 4);
    assert_eq!(*config.rows(), 5);
    assert_eq!(*config.target_fps(), 30);
    assert!(*config.show_hint());
}

#[test]
fn test_malformed_file() {
    let file = write_config("columns = \"many\"\n");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file() {
    let err = AppConfig::from_file("/nonexistent/multiboard.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_values_in_file_rejected() {
    let file = write_config("rows = 0\n");
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(AppConfig::from_cli(&cli).is_err());
}

#[test]
fn test_cli_parses_flags() {
    use clap::Parser;
    let cli =
        Cli::try_parse_from(["multiboard", "--columns", "2", "--fill", "--wheel-zoom"]).unwrap();
    assert_eq!(cli.columns, Some(2));
    assert!(cli.fill);
    assert!(cli.wheel_zoom);
    assert!(cli.config.is_none());
}
