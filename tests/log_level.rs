// tests/log_level.rs

use dockjob::cli::LogLevel;
use dockjob::logging::effective_level;
use tracing::Level;

#[test]
fn cli_flag_beats_environment() {
    assert_eq!(effective_level(Some(LogLevel::Warn), Some("trace")), Level::WARN);
}

#[test]
fn environment_value_is_used_without_flag() {
    assert_eq!(effective_level(None, Some(" Debug ")), Level::DEBUG);
    assert_eq!(effective_level(None, Some("warning")), Level::WARN);
}

#[test]
fn unknown_or_missing_environment_defaults_to_info() {
    assert_eq!(effective_level(None, Some("loud")), Level::INFO);
    assert_eq!(effective_level(None, None), Level::INFO);
}
