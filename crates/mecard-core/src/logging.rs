//! `tracing` subscriber bootstrap.
//!
//! The parsing crates only emit events. Embedders that do not install a
//! subscriber of their own can call [`init`] once at startup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_LOG_LEVEL, LoggingConfig};
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the event filter for the configured level.
///
/// Falls back to the default level when the directive does not parse.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(config.level.as_str()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, level = %config.level, "Invalid log level in config, using default");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// ## Summary
/// Installs a global subscriber writing formatted events to stdout.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init(config: &LoggingConfig) -> CoreResult<()> {
    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| CoreError::ConfigError(format!("failed to install subscriber: {e}")))?;

    tracing::debug!(level = %config.level, "Logging initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_level_is_kept() {
        let filter = build_filter(&LoggingConfig {
            level: "mecard_format=trace".to_string(),
        });
        assert_eq!(filter.to_string(), "mecard_format=trace");
    }

    #[test]
    fn invalid_level_falls_back() {
        let filter = build_filter(&LoggingConfig {
            level: "mecard=loud".to_string(),
        });
        assert_eq!(filter.to_string(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn second_init_is_rejected() {
        let config = LoggingConfig::default();
        // Another test may already have installed the global subscriber
        drop(init(&config));
        assert!(matches!(init(&config), Err(CoreError::ConfigError(_))));
    }
}
