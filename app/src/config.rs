use log::LevelFilter;
use thiserror::Error;

/// Environment variable selecting the stderr log level.
pub const LOG_ENV: &str = "MODULES_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid log level {0:?}, expected one of off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),
}

/// Runtime settings for the entrypoint. Only logging is configurable; the
/// printed output never depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LEVEL,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if [`LOG_ENV`] holds an
    /// unknown level.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(LOG_ENV).ok();
        Ok(Self {
            log_level: Self::parse_level(value.as_deref())?,
        })
    }

    /// Parses a log level name. `None` and blank values map to the default.
    pub fn parse_level(value: Option<&str>) -> Result<LevelFilter, ConfigError> {
        let value = match value.map(str::trim) {
            None | Some("") => return Ok(DEFAULT_LEVEL),
            Some(value) => value,
        };

        value
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))
    }
}
