//! Logger initialization from the resolved configuration

use crate::config::Config;
use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::io::{self, Write};

/// Log file written when file logging is enabled
pub const LOG_FILE: &str = "logcfg.log";

/// Initialize the global logger according to the resolved options
///
/// With neither destination enabled the logger is installed with all output
/// filtered off.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = Builder::new();

    if !config.stdout && !config.file {
        builder.filter_level(LevelFilter::Off);
        builder.try_init().context("Failed to initialize logger")?;
        return Ok(());
    }

    builder.filter_level(config.level.to_level_filter());

    if config.stdout && config.file {
        let tee = TeeWriter {
            file: open_log_file()?,
        };
        builder.target(Target::Pipe(Box::new(tee)));
    } else if config.file {
        builder.target(Target::Pipe(Box::new(open_log_file()?)));
    } else {
        builder.target(Target::Stdout);
    }

    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}

fn open_log_file() -> Result<File> {
    std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE)
        .with_context(|| format!("Failed to open log file: {}", LOG_FILE))
}

/// Duplicates log output to stdout and the log file
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}
