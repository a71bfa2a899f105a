//! Log level filtering

use crate::LOG_ENV_VAR;
use skillkit_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Convert LogLevel to tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Build the process filter from [`LOG_ENV_VAR`], falling back to `level`.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    let directives = std::env::var(LOG_ENV_VAR).ok();
    filter_from(directives.as_deref(), level)
}

/// Build a filter from explicit directives, falling back to `level` when
/// they are absent or blank. Unparsable directives are skipped.
pub fn filter_from(directives: Option<&str>, level: LogLevel) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(level_filter(level).into());
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.parse_lossy(""),
    }
}
