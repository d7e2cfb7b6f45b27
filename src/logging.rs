//! Tracing setup
//!
//! The interactive TUI owns stdout, so logs go to a file. Headless
//! subcommands may log to stderr instead.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// Default log file: `<data_dir>/folioterm/folioterm.log`
    pub fn default_file() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folioterm");
        LogTarget::File(dir.join("folioterm.log"))
    }
}

/// Install the global tracing subscriber
pub fn init(target: LogTarget, debug: bool) -> Result<()> {
    let log_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_ansi(false)
                .with_max_level(log_level)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(if debug { log_level } else { tracing::Level::WARN })
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
        }
    }

    if debug {
        tracing::info!("Debug mode enabled - verbose logging active");
    }
    Ok(())
}
