use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Bounds applied before any scanning starts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    /// Inputs longer than this many bytes are rejected. Unbounded when unset.
    pub max_input_len: Option<usize>,
}

pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and `mecard.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            // TOML file
            .add_source(config::File::with_name("mecard.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("MECARD")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn defaults_without_sources() {
        let settings = Settings::default();
        assert_eq!(settings.logging.level, "info");
        assert!(settings.limits.max_input_len.is_none());
    }

    #[test]
    fn limits_deserialize_from_source() {
        let settings = Config::builder()
            .set_default("logging.level", "debug")
            .unwrap()
            .set_override("limits.max_input_len", 4096)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.limits.max_input_len, Some(4096));
    }

    #[test]
    fn limits_section_is_optional() {
        let settings = Config::builder()
            .set_default("logging.level", "warn")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert!(settings.limits.max_input_len.is_none());
    }
}
