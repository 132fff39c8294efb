//! Configuration loading
//!
//! Merges command-line flags with an INI configuration file and exposes the
//! result as a parse-once [`Config`] object handed to whatever consumes it.

pub mod cli;
pub mod ini;
pub mod options;
pub mod paths;

pub use options::{
    OptionDefBuilder, OptionDefinition, OptionSource, OptionType, OptionValue, OptionsRegistry,
    ParsedOptions,
};
pub use paths::{PathError, readable_dir, writable_dir};

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

/// Minimum logging level, in ascending severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Success,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Uppercase spellings accepted on the command line and in the configuration file
    pub fn variants() -> [&'static str; 7] {
        [
            "TRACE", "DEBUG", "INFO", "SUCCESS", "WARNING", "ERROR", "CRITICAL",
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Map onto the log crate's level filter
    ///
    /// SUCCESS and CRITICAL have no direct counterpart and collapse onto the
    /// nearest standard level.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info | LogLevel::Success => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "SUCCESS" => Ok(LogLevel::Success),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => anyhow::bail!("Unknown logging level '{}'", other),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved configuration: command line over configuration file over defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Configuration file the values were merged from
    pub configuration: PathBuf,
    /// Minimum logging level
    pub level: LogLevel,
    /// Whether to log to stdout
    pub stdout: bool,
    /// Whether to log to file
    pub file: bool,
    /// Whether to show full stacktraces in error reports
    pub backtrace: bool,
}

impl Config {
    /// Load configuration from the process arguments
    ///
    /// clap usage and help output is rendered by clap itself and exits the
    /// process, matching standalone binary behavior.
    pub fn load() -> Result<Self> {
        match Self::try_load_from(std::env::args_os()) {
            Err(err) => match err.downcast::<clap::Error>() {
                Ok(clap_err) => clap_err.exit(),
                Err(other) => Err(other),
            },
            ok => ok,
        }
    }

    /// Load configuration from explicit arguments
    pub fn try_load_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut registry = OptionsRegistry::new();
        options::registrations::register_all(&mut registry)?;

        let matches = cli::build_command(&registry).try_get_matches_from(args)?;
        let cli_values = cli::cli_values(&matches, &registry)?;

        // The pointer option resolves before the file it points at is read
        let (config_path, explicit) = match cli_values.get("configuration") {
            Some(value) => (PathBuf::from(value.as_str()?), true),
            None => {
                let def = registry
                    .get("configuration")
                    .context("'configuration' option is not registered")?;
                (PathBuf::from(def.default.as_str()?), false)
            }
        };

        let file_values = if config_path.is_file() {
            ini::load_config_file(&config_path, &registry)?
        } else if explicit {
            anyhow::bail!("Configuration file not found: {}", config_path.display());
        } else {
            debug!(
                "No configuration file at {}, using defaults",
                config_path.display()
            );
            HashMap::new()
        };

        let parsed = ParsedOptions::resolve(&registry, cli_values, file_values)?;
        Self::from_parsed(&parsed, config_path)
    }

    /// Build the typed view over resolved options
    pub fn from_parsed(parsed: &ParsedOptions, configuration: PathBuf) -> Result<Self> {
        Ok(Self {
            configuration,
            level: parsed.get_str("loguru_level")?.parse()?,
            stdout: parsed.get_bool("loguru_stdout")?,
            file: parsed.get_bool("loguru_file")?,
            backtrace: parsed.get_bool("loguru_backtrace")?,
        })
    }
}
