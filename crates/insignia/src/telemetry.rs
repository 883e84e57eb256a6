//! Process-wide tracing setup for the dashboard service and CLI.

use crate::config::{AppEnvironment, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { value: String, source: ParseError },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { value, .. } => {
                write!(f, "APP_LOG_LEVEL '{}' is not a valid tracing filter", value)
            }
            TelemetryError::Install(err) => {
                write!(f, "tracing subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// Line format written by the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored compact lines for a local terminal.
    Terminal,
    /// Plain compact lines, no color, for test runs and CI logs.
    Plain,
    /// One JSON object per event for log shipping.
    Json,
}

impl LogFormat {
    pub const fn for_environment(environment: AppEnvironment) -> Self {
        match environment {
            AppEnvironment::Development => Self::Terminal,
            AppEnvironment::Test => Self::Plain,
            AppEnvironment::Production => Self::Json,
        }
    }
}

/// Parses the configured level or directive list, e.g. `info,insignia=debug`.
pub fn parse_filter(value: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(value).map_err(|source| TelemetryError::InvalidFilter {
        value: value.to_string(),
        source,
    })
}

/// Installs the global subscriber in the format that suits `environment`.
/// `RUST_LOG` wins over the configured level.
pub fn init(environment: AppEnvironment, config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);
    let installed = match LogFormat::for_environment(environment) {
        LogFormat::Terminal => builder.compact().with_ansi(true).try_init(),
        LogFormat::Plain => builder.compact().with_ansi(false).try_init(),
        LogFormat::Json => builder
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .try_init(),
    };
    installed.map_err(TelemetryError::Install)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_logs_as_json() {
        assert_eq!(
            LogFormat::for_environment(AppEnvironment::Production),
            LogFormat::Json
        );
        assert_eq!(
            LogFormat::for_environment(AppEnvironment::Development),
            LogFormat::Terminal
        );
        assert_eq!(
            LogFormat::for_environment(AppEnvironment::Test),
            LogFormat::Plain
        );
    }

    #[test]
    fn accepts_levels_and_directives() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("warn,insignia=debug").is_ok());
    }

    #[test]
    fn rejects_unknown_levels() {
        let err = parse_filter("insignia=loudest").expect_err("invalid level");
        assert!(matches!(
            &err,
            TelemetryError::InvalidFilter { value, .. } if value == "insignia=loudest"
        ));
        assert_eq!(
            err.to_string(),
            "APP_LOG_LEVEL 'insignia=loudest' is not a valid tracing filter"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
