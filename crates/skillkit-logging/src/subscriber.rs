//! Global subscriber installation

use crate::filter::build_filter;
use once_cell::sync::OnceCell;
use skillkit_core::LogLevel;
use std::io::IsTerminal;
use tracing::subscriber::SetGlobalDefaultError;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install a formatted stderr subscriber as the global default.
///
/// Only the first call installs anything; later calls return `Ok(())` and
/// keep the filter installed first.
pub fn init_logging(level: LogLevel) -> Result<(), SetGlobalDefaultError> {
    INSTALLED
        .get_or_try_init(|| {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_env_filter(build_filter(level))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn init_logging___second_call___is_noop() {
        assert!(init_logging(LogLevel::Warn).is_ok());
        assert!(init_logging(LogLevel::Trace).is_ok());

        tracing::warn!("logging initialized twice");
    }
}
