//! File-backed tracing setup — a terminal UI cannot log to stdout.
//!
//! The controller's `Filtering products by: <filter>` records land here,
//! along with anything else emitted through `tracing`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to `path`. The filter honors `SHOPFRONT_LOG`
/// and defaults to `info`.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_env("SHOPFRONT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
