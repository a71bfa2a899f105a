//! skillkit-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber once per process
//! - [`build_filter`] to combine the `SKILLKIT_LOG` variable with a configured level
//! - [`level_filter`] to map [`LogLevel`] onto `tracing` filters

mod filter;
mod subscriber;

pub use filter::{build_filter, filter_from, level_filter};
pub use skillkit_core::LogLevel;
pub use subscriber::init_logging;

/// Environment variable holding `tracing` filter directives.
///
/// When set and non-empty it overrides the configured level, e.g.
/// `SKILLKIT_LOG=skillkit_bundle=debug`.
pub const LOG_ENV_VAR: &str = "SKILLKIT_LOG";
