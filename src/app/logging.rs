//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so log lines go to a file. Directives are
//! read from `CMDK_LOG`, then `RUST_LOG`, then default to `info`.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "CMDK_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("cmdk.log")
}

/// Install the global subscriber writing to `path`. Call once, before the
/// terminal enters raw mode.
pub fn init(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(fmt_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

// Unparseable directives fall through to the next source.
fn filter_from(directives: Option<&str>) -> Option<EnvFilter> {
    directives.and_then(|d| EnvFilter::try_new(d).ok())
}
