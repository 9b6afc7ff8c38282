//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; hosts call `init_tracing` once at
//! startup to get them on stderr.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ClassifierConfig, LogFormat};
use crate::error::AppError;

/// Install a global subscriber filtered by `config.log_filter`.
///
/// Returns `AppError::Config` for an invalid filter or when a global
/// subscriber is already installed.
pub fn init_tracing(config: &ClassifierConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Config(format!("Invalid log filter '{}': {}", config.log_filter, e))
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Tracing already initialized: {}", e)))
}
