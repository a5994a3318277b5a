use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How search results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutputFormat(value.to_string())),
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub output: OutputFormat,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let directory = env::var_os("GOURMAND_DATA_DIR")
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty());

        let output = match env::var("GOURMAND_OUTPUT") {
            Ok(value) => value.parse()?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var("GOURMAND_LOG_LEVEL").unwrap_or_else(|_| "off".to_string());

        Ok(Self {
            data: DataConfig { directory },
            output,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the catalog tables come from. `None` selects the packaged dataset.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    pub directory: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "off".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputFormat(value) => {
                write!(f, "output format must be 'table' or 'json', got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
