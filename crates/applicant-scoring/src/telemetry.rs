use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "APP_LOG_LEVEL '{value}' is not a valid log filter")
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "a global subscriber is already installed ({err})")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG` wins when set and valid; otherwise the configured level applies.
fn log_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
        value: config.log_level.clone(),
        source,
    })
}

/// Install the global subscriber. Output goes to stderr so log lines never
/// interleave with the menu or the ranking table on stdout.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn configured_level_builds_a_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = log_filter(&config("applicant_scoring=debug,warn")).expect("valid filter");
        assert!(filter.to_string().contains("applicant_scoring=debug"));
    }

    #[test]
    fn malformed_level_names_the_setting() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = log_filter(&config("scoring=loud")).expect_err("rejected");
        assert_eq!(
            err.to_string(),
            "APP_LOG_LEVEL 'scoring=loud' is not a valid log filter"
        );
    }
}
