//! Multiboard in the terminal.
//!
//! The terminal stands in for a game window: crossterm supplies raw input
//! (mouse, keys, resizes) and ratatui's Braille canvas is the drawing
//! surface. All game rules live in the `multiboard` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod display_list;
mod input_state;
mod logging;
mod terminal;

pub use app::{App, run};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use display_list::{DisplayList, Shape, term_color};
pub use input_state::{DOTS_PER_COLUMN, DOTS_PER_ROW, InputState, cell_center};
pub use logging::init_logging;
pub use terminal::{TerminalWindow, Viewport};
