use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Failure to start logging for the command-line tool.
#[derive(Debug)]
pub enum TelemetryError {
    /// `GOURMAND_LOG_LEVEL` (or `-v`) produced a directive tracing rejects.
    InvalidFilter { filter: String, source: ParseError },
    /// Another subscriber was already installed for this process.
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter { filter, .. } => {
                write!(f, "log level '{filter}' is not a valid tracing filter")
            }
            Self::AlreadyInstalled(_) => f.write_str("log output was already initialised"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFilter { source, .. } => Some(source),
            Self::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber. Library code only emits events; callers
/// that want them on stderr call this once at startup.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::InvalidFilter {
        filter: log_level.to_string(),
        source,
    })
}
