//! Tracing setup.
//!
//! The terminal belongs to the game while it runs, so log output goes to
//! a file.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Sends tracing output to `log_file`, filtered by `RUST_LOG` (default
/// `info`).
pub fn init_logging(log_file: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
