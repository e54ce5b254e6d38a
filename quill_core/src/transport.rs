//! Log transports: typed output destinations with per-transport options.
//!
//! Each transport filters on its own minimum severity and renders the fixed
//! line format `{timestamp} - {tag}: {message}` (or one JSON object per line
//! when the `json` option is set).

use crate::{Level, Result};
use chrono::Local;
use colored::Colorize;
use serde_json::json;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Per-transport formatting and filtering options
#[derive(Clone, Debug)]
pub struct TransportOptions {
    /// Minimum severity this transport accepts
    pub level: Level,
    /// Emit one JSON object per line instead of the plain line format
    pub json: bool,
    /// Colorize the level tag
    pub colorize: bool,
    /// chrono strftime pattern for the line timestamp
    pub timestamp_format: String,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            level: Level::Info,
            json: false,
            colorize: false,
            timestamp_format: "%H:%M:%S%.3f".into(),
        }
    }
}

/// A registered output destination for log lines
pub trait Transport {
    /// Write a single already-indented message at the given level
    fn log(&mut self, level: Level, message: &str) -> Result<()>;
}

/// Render one output line according to the transport options
fn format_line(options: &TransportOptions, level: Level, message: &str) -> String {
    let timestamp = Local::now().format(&options.timestamp_format).to_string();

    if options.json {
        return json!({
            "timestamp": timestamp,
            "level": level.name(),
            "message": message,
        })
        .to_string();
    }

    if options.colorize {
        format!(
            "{} - {}: {}",
            timestamp,
            level.tag().color(level.color()),
            message
        )
    } else {
        format!("{} - {}: {}", timestamp, level.tag(), message)
    }
}

/// Transport writing to standard output
pub struct ConsoleTransport {
    options: TransportOptions,
}

impl ConsoleTransport {
    /// Create a console transport with the given options
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }
}

impl Transport for ConsoleTransport {
    fn log(&mut self, level: Level, message: &str) -> Result<()> {
        if level < self.options.level {
            return Ok(());
        }

        let line = format_line(&self.options, level, message);
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// Transport appending to a log file
pub struct FileTransport {
    options: TransportOptions,
    path: PathBuf,
    writer: BufWriter<std::fs::File>,
}

impl FileTransport {
    /// Open (or create) the log file at `path` for appending
    pub fn create(path: impl Into<PathBuf>, options: TransportOptions) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            options,
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for FileTransport {
    fn log(&mut self, level: Level, message: &str) -> Result<()> {
        if level < self.options.level {
            return Ok(());
        }

        let line = format_line(&self.options, level, message);
        writeln!(self.writer, "{}", line)?;
        // Flush per line so tail -f and crash dumps see complete entries
        self.writer.flush()?;
        Ok(())
    }
}
