//! # Logging
//!
//! Installs the global `tracing` subscriber from a [`LoggingConfig`].
//!
//! `RUST_LOG` takes precedence; the configured level is the fallback directive.
//!
//! ## Usage
//! ```rust,no_run
//! use game_packet_reader::config::LoggingConfig;
//! use game_packet_reader::utils::logging::init_logging;
//!
//! init_logging(&LoggingConfig::default()).expect("logging already initialized");
//! ```

use crate::config::LoggingConfig;
use crate::error::{constants, DecodeError, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the env filter for a config without installing anything
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level).into())
        .from_env_lossy()
}

/// Install the global subscriber.
///
/// Fails with [`DecodeError::ConfigError`] if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let installed = if config.json_format {
        registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(config.with_target))
            .try_init()
    };
    installed
        .map_err(|e| DecodeError::ConfigError(format!("{}: {e}", constants::ERR_LOGGING_INIT)))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
