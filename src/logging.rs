use std::{fs::OpenOptions, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "stock_change_tui=info";

/// Sends log output to `path`; the terminal belongs to the dashboard.
pub fn init(path: &str) -> Result<()> {
    let path = shellexpand::tilde(path);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&*path)
        .with_context(|| format!("Failed to open log file at path: {}", path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .try_init()
        .with_context(|| "Failed to initialise logging")?;

    Ok(())
}
