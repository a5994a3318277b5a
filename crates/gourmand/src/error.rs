use crate::catalog::DataLoadError;
use crate::config::ConfigError;
use crate::domain::ValidationError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    DataLoad(DataLoadError),
    Validation(ValidationError),
    Output(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::DataLoad(err) => write!(f, "{}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Output(err) => write!(f, "failed to encode results: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::DataLoad(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Output(err) => Some(err),
        }
    }
}

impl AppError {
    /// The message followed by each underlying cause, outermost first.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let message = err.to_string();
            if !report.ends_with(&message) {
                report.push_str(": ");
                report.push_str(&message);
            }
            source = err.source();
        }
        report
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DataLoadError> for AppError {
    fn from(value: DataLoadError) -> Self {
        Self::DataLoad(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
