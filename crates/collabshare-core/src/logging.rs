//! Tracing/logging bootstrap.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::logging::LoggingConfig;
use crate::error::AppError;

/// Initialize the global tracing subscriber from configuration.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured level. Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        _ => fmt().pretty().with_env_filter(filter).with_target(true).try_init(),
    };

    result.map_err(|e| AppError::configuration(format!("Failed to init logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_fails() {
        let config = LoggingConfig::default();
        // First call may fail if another test initialized logging already;
        // the second call must fail because the subscriber is global.
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
