//! Configuration wiring into the parsers.

use mecard_test::component::config::{LimitsConfig, LoggingConfig, Settings, build_filter};
use mecard_test::component::format::{ParseOptions, parse_card_with, parse_record_with};

#[test]
fn settings_load_without_file() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    assert!(!settings.logging.level.is_empty());
    Ok(())
}

#[test]
fn limits_flow_into_parse_options() {
    let limits = LimitsConfig {
        max_input_len: Some(16),
    };
    let options = ParseOptions::from(&limits);

    assert!(parse_record_with("id:a:1;;", &options).is_some());
    assert!(parse_record_with("id:a:0123456789abcdef;;", &options).is_none());
    assert!(parse_card_with("MECARD:N:x;;", &options).is_some());
    assert!(parse_card_with("MECARD:N:0123456789;;", &options).is_none());
}

#[test]
fn default_settings_are_unlimited() {
    let settings = Settings::default();
    let options = ParseOptions::from(&settings.limits);
    let long = format!("id:a:{};;", "x".repeat(100_000));
    assert!(parse_record_with(&long, &options).is_some());
}

#[test]
fn logging_filter_from_settings() {
    let filter = build_filter(&LoggingConfig {
        level: "debug".to_string(),
    });
    assert_eq!(filter.to_string(), "debug");
}
