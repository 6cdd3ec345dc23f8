//! Tracing subscriber setup.

use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Builds the event filter: `RUST_LOG` when set and valid, otherwise the
/// configured level.
#[must_use]
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global tracing subscriber.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one stays active.
#[must_use = "a `false` result means another subscriber is active"]
pub fn init_tracing(config: &LogConfig) -> bool {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));
    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn second_initialisation_is_a_no_op() {
        let config = LogConfig::default();

        let _first = init_tracing(&config);

        assert!(!init_tracing(&config));
    }

    #[rstest]
    fn filter_falls_back_to_configured_level() {
        let config = LogConfig {
            level: "taskboard=debug".to_owned(),
            format: LogFormat::Json,
        };

        let filter = env_filter(&config);

        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter.to_string(), "taskboard=debug");
        }
    }
}
