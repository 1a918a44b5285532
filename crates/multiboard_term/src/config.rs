//! Game configuration: built-in defaults, optional TOML file, CLI overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use multiboard::LayoutMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Runtime settings for the game window and boards.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window (terminal) title.
    title: String,

    /// Boards per row.
    columns: u32,

    /// Boards per column.
    rows: u32,

    /// How boards share the viewport.
    layout: LayoutMode,

    /// Target frames per second.
    target_fps: u32,

    /// Whether the layout follows terminal resizes.
    resizable: bool,

    /// Smallest viewport width the layout is computed for, in dots.
    min_width: u32,

    /// Smallest viewport height the layout is computed for, in dots.
    min_height: u32,

    /// Draw the "new game" hint above each board.
    show_hint: bool,

    /// Zoom boards with the mouse wheel.
    wheel_zoom: bool,

    /// Size change per wheel step, in dots.
    zoom_step: f32,

    /// Log file path.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            columns: 3,
            rows: 3,
            layout: LayoutMode::FitSquare,
            target_fps: 60,
            resizable: true,
            min_width: 60,
            min_height: 60,
            show_hint: false,
            wheel_zoom: false,
            zoom_step: 4.0,
            log_file: PathBuf::from("multiboard.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(columns = config.columns, rows = config.rows, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the configuration for a command line: the file named by
    /// `--config` (or the defaults), then every flag that was given.
    #[instrument(skip(cli))]
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(columns) = cli.columns {
            config.columns = columns;
        }
        if let Some(rows) = cli.rows {
            config.rows = rows;
        }
        if cli.fill {
            config.layout = LayoutMode::Fill;
        }
        if let Some(fps) = cli.fps {
            config.target_fps = fps;
        }
        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }
        if cli.hint {
            config.show_hint = true;
        }
        if cli.wheel_zoom {
            config.wheel_zoom = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::new(format!(
                "Board grid must be at least 1x1, got {}x{}",
                self.columns, self.rows
            )));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::new("Target frame rate must be at least 1".to_string()));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step >= 0.0) {
            return Err(ConfigError::new(format!(
                "Zoom step must be a non-negative number, got {}",
                self.zoom_step
            )));
        }
        Ok(())
    }

    /// Number of boards in the grid.
    pub fn board_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title(), "Tic Tac Toe");
        assert_eq!(*config.target_fps(), 60);
        assert_eq!(*config.layout(), LayoutMode::FitSquare);
        assert_eq!(config.board_count(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let config = AppConfig::from_cli(&Cli::default()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_grid_rejected() {
        let cli = Cli {
            columns: Some(0),
            ..Default::default()
        };
        let err = AppConfig::from_cli(&cli).unwrap_err();
        assert!(err.message.contains("at least 1x1"));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let cli = Cli {
            fps: Some(0),
            ..Default::default()
        };
        assert!(AppConfig::from_cli(&cli).is_err());
    }
}
