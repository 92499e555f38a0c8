//! Demonstration configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.

use randomizer_core::{SeedError, SeedSpec};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the seed (`clock` or an integer)
pub const ENV_SEED: &str = "RANDOMIZER_SEED";
/// Environment variable holding the number of draws
pub const ENV_COUNT: &str = "RANDOMIZER_COUNT";
/// Environment variable holding the draw bound
pub const ENV_MAX: &str = "RANDOMIZER_MAX";
/// Environment variable holding the log level
pub const ENV_LOG_LEVEL: &str = "RANDOMIZER_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid draw count: {0}. Must be a non-negative integer")]
    InvalidCount(String),

    #[error("Invalid bound: {0}. Must be a 32-bit integer")]
    InvalidMax(String),

    #[error(transparent)]
    InvalidSeed(#[from] SeedError),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the demonstration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Demonstration configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed selection: wall clock or a fixed integer
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: SeedSpec,
    /// Number of draws to print
    pub count: usize,
    /// Bound passed to every `next_int` draw
    pub max: i32,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

/// Seeds may be written as a bare TOML integer or as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeed {
    Integer(i64),
    Text(String),
}

fn deserialize_seed<'de, D>(deserializer: D) -> Result<SeedSpec, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match RawSeed::deserialize(deserializer)? {
        RawSeed::Integer(seed) => Ok(SeedSpec::Fixed(seed)),
        RawSeed::Text(s) => SeedSpec::from_str(&s).map_err(serde::de::Error::custom),
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: SeedSpec::Clock,
            count: 10,
            max: 100,
            log_level: LogLevel::Warn,
        }
    }
}

impl DemoConfig {
    /// Create a new DemoConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override fields from `RANDOMIZER_*` variables found by `lookup`.
    ///
    /// Unset variables leave the corresponding field untouched.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = SeedSpec::from_str(&seed)?;
        }

        if let Some(count) = lookup(ENV_COUNT) {
            self.count = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCount(count.clone()))?;
        }

        if let Some(max) = lookup(ENV_MAX) {
            self.max = max
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMax(max.clone()))?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = &cli.seed {
            self.seed = SeedSpec::from_str(seed)?;
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(max) = cli.max {
            self.max = max;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override (`clock` or an integer)
    pub seed: Option<String>,
    /// Draw count override
    pub count: Option<usize>,
    /// Bound override
    pub max: Option<i32>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to at least debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<DemoConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<DemoConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        DemoConfig::from_file(config_path)?
    } else {
        DemoConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}
