//! Integration tests for the logging bootstrap

use core_runtime::logging::{LogFormat, LoggingConfig};
use tracing::Level;

#[test]
fn test_logging_configuration() {
    // The global subscriber can only be installed once per process, so these
    // exercise the configuration surface rather than init itself.
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(Level::DEBUG);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, Level::DEBUG);
}

#[test]
fn test_format_selection() {
    // Debug builds default to Pretty, release builds to JSON.
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_filter_configuration() {
    let config = LoggingConfig::default().with_filter("core_library=debug,core_playlists=trace");

    assert_eq!(
        config.filter,
        Some("core_library=debug,core_playlists=trace".to_string())
    );
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(Level::WARN)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, Level::WARN);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}
