//! Command-line interface for multiboard.

use clap::Parser;
use std::path::PathBuf;

/// Multiboard - mouse-driven tic-tac-toe on a grid of boards
///
/// Left click plays a cell, holding the right button over a board resets
/// it, and n / r / space start a new game everywhere. Esc quits.
#[derive(Parser, Debug, Default)]
#[command(name = "multiboard")]
#[command(about = "Mouse-driven multi-board tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Boards per row
    #[arg(long)]
    pub columns: Option<u32>,

    /// Boards per column
    #[arg(long)]
    pub rows: Option<u32>,

    /// Stretch boards to fill the terminal instead of keeping them square
    #[arg(long)]
    pub fill: bool,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Where to write the log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show the "new game" hint above each board
    #[arg(long)]
    pub hint: bool,

    /// Grow and shrink boards with the mouse wheel
    #[arg(long)]
    pub wheel_zoom: bool,
}
