//! Multiboard - mouse-driven multi-board tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use multiboard_term::{AppConfig, Cli, init_logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    init_logging(config.log_file())?;
    info!(
        columns = config.columns(),
        rows = config.rows(),
        boards = config.board_count(),
        fps = config.target_fps(),
        "Starting multiboard"
    );

    run(config)
}
