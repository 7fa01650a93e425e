use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_LOG_FILE: &str = "satellite.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("Invalid output format '{0}' (expected table, json or compact)")]
    InvalidFormat(String),
    #[error("Script file not found: {0}")]
    ScriptNotFound(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "compact" => Ok(OutputFormat::Compact),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            level: LogLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulatorConfig {
    pub log: LogConfig,
    pub format: OutputFormat,
    /// Read commands from this file instead of stdin.
    pub script: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl SimulatorConfig {
    /// Builds a config from raw option values, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown level or format, or a script
    /// path that is not a file.
    pub fn from_options(
        log_file: Option<&str>,
        log_level: Option<&str>,
        format: Option<&str>,
        script: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = SimulatorConfig::default();

        if let Some(path) = log_file {
            config.log.path = PathBuf::from(path);
        }
        if let Some(level) = log_level {
            config.log.level = level.parse()?;
        }
        if let Some(format) = format {
            config.format = format.parse()?;
        }
        if let Some(script) = script {
            let path = PathBuf::from(script);
            if !path.is_file() {
                return Err(ConfigError::ScriptNotFound(path));
            }
            config.script = Some(path);
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
