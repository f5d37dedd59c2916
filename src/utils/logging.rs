//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the YallaNow client.

use std::path::Path;

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{ApiError, ErrorKind, Result, YallaNowError};

/// Initialize logging based on configuration
///
/// The returned guard must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| YallaNowError::Logging(e.to_string()))?;

    let (file_layer, guard) = match &config.file_path {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "yallanow.log".to_string());

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| YallaNowError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a failed backend call with context
pub fn log_api_failure(service: &str, operation: &str, error: &ApiError) {
    match error.kind() {
        ErrorKind::Unknown | ErrorKind::NullResponse | ErrorKind::InvalidPayload => {
            warn!(
                service = service,
                operation = operation,
                kind = ?error.kind(),
                error = %error,
                "Backend call failed"
            );
        }
        _ => {
            debug!(
                service = service,
                operation = operation,
                kind = ?error.kind(),
                error = %error,
                "Backend call rejected"
            );
        }
    }
}

/// Log a recommendation interaction signal
pub fn log_interaction(interaction: &str, user_id: &str, event_id: &str, recomm_id: &str, success: bool) {
    if success {
        debug!(
            interaction = interaction,
            user_id = user_id,
            event_id = event_id,
            recomm_id = recomm_id,
            "Interaction reported"
        );
    } else {
        warn!(
            interaction = interaction,
            user_id = user_id,
            event_id = event_id,
            recomm_id = recomm_id,
            "Interaction report failed"
        );
    }
}
