//! Severity levels for the logging facade.
//!
//! The level table is fixed: six named tiers ordered by ascending priority,
//! each with a right-aligned display tag and a terminal color. The tags are
//! part of the output format and must not change width.

use crate::Error;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity level, ordered by ascending priority
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Silly,
    Debug,
    Verbose,
    Info,
    Warn,
    Error,
}

impl Level {
    /// All levels, in ascending priority order
    pub const ALL: [Level; 6] = [
        Level::Silly,
        Level::Debug,
        Level::Verbose,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Seven-character right-aligned display tag
    ///
    /// These exact strings are written to every transport line, so the
    /// column of colons stays aligned across levels.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Silly => "  silly",
            Level::Debug => "  debug",
            Level::Verbose => "verbose",
            Level::Info => "   info",
            Level::Warn => "   warn",
            Level::Error => "  error",
        }
    }

    /// Numeric priority (0 = silly, 5 = error)
    pub fn priority(&self) -> u8 {
        match self {
            Level::Silly => 0,
            Level::Debug => 1,
            Level::Verbose => 2,
            Level::Info => 3,
            Level::Warn => 4,
            Level::Error => 5,
        }
    }

    /// Terminal color used for the tag on colorized transports
    pub fn color(&self) -> Color {
        match self {
            Level::Silly => Color::Magenta,
            Level::Debug => Color::Cyan,
            Level::Verbose => Color::Blue,
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }

    /// Bare level name without alignment padding
    pub fn name(&self) -> &'static str {
        self.tag().trim_start()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silly" => Ok(Level::Silly),
            "debug" => Ok(Level::Debug),
            "verbose" => Ok(Level::Verbose),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(Error::Config(format!("Unknown log level: {}", other))),
        }
    }
}
