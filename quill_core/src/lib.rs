#![forbid(unsafe_code)]

//! Indentation-aware logging facade.
//!
//! This crate provides:
//! - A fixed six-level severity table (silly through error)
//! - A fluent facade with indent/dedent, block splitting, and profiling
//! - Console and file transports with per-transport minimum levels
//! - TOML configuration for timestamp and file naming patterns

pub mod config;
pub mod error;
pub mod facade;
pub mod indent;
pub mod level;
pub mod logger;
pub mod transport;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use facade::Quill;
pub use indent::{IndentState, INDENT_UNIT};
pub use level::Level;
pub use logger::{Logger, TransportLogger};
pub use transport::{ConsoleTransport, FileTransport, Transport, TransportOptions};
