//! The logging facade.
//!
//! `Quill` wraps a [`Logger`] and adds what the engine does not know about:
//! the indentation prefix, multi-line block splitting, and the fixed set of
//! leveled convenience methods. Every method returns `&mut Self` so call
//! sites can chain.

use crate::config::Config;
use crate::indent::IndentState;
use crate::logger::{Logger, TransportLogger};
use crate::transport::{ConsoleTransport, FileTransport, TransportOptions};
use crate::{Level, Result};
use chrono::Local;

/// Horizontal rule emitted by [`Quill::hr`]
const HR_LINE: &str =
    "--------------------------------------------------------------------------------";

/// Indentation-aware logging facade over a pluggable engine
///
/// The indentation state is owned by the instance, so independent facades
/// (and independent tests) never share it.
pub struct Quill<L: Logger = TransportLogger> {
    logger: L,
    indent: IndentState,
    config: Config,
}

impl Quill<TransportLogger> {
    /// Create a facade over a fresh transport engine
    ///
    /// Honors `config.log_to_console` by registering the console transport
    /// immediately.
    pub fn new(config: Config) -> Self {
        let mut quill = Self::with_logger(config, TransportLogger::new());
        if quill.config.log_to_console {
            quill.log_to_console();
        }
        quill
    }
}

impl<L: Logger> Quill<L> {
    /// Create a facade over a caller-supplied logger
    pub fn with_logger(config: Config, logger: L) -> Self {
        Self {
            logger,
            indent: IndentState::new(),
            config,
        }
    }

    /// Log `message` at an explicit level, with the current indent prefix
    pub fn log(&mut self, level: Level, message: &str) -> &mut Self {
        let line = format!("{}{}", self.indent.prefix(), message);
        self.logger.log(level, &line);
        self
    }

    /// Log at debug level
    pub fn debug(&mut self, message: &str) -> &mut Self {
        self.log(Level::Debug, message)
    }

    /// Log at info level
    pub fn info(&mut self, message: &str) -> &mut Self {
        self.log(Level::Info, message)
    }

    /// Log at error level
    pub fn error(&mut self, message: &str) -> &mut Self {
        self.log(Level::Error, message)
    }

    /// Log a block of text containing multiple lines
    ///
    /// Splits on line breaks, trims each line, skips empty lines, and hands
    /// each surviving line to `line_logger` in original order:
    ///
    /// ```
    /// # use quill_core::{Config, Quill};
    /// let mut quill = Quill::new(Config::default());
    /// let data = "123\n456\n\n789";
    /// quill.block(data, |q, line| {
    ///     q.info(&format!("data> {}", line));
    /// });
    /// ```
    pub fn block<F>(&mut self, text: &str, mut line_logger: F) -> &mut Self
    where
        F: FnMut(&mut Self, &str),
    {
        for line in text.split('\n') {
            let line = line.trim();
            if !line.is_empty() {
                line_logger(self, line);
            }
        }
        self
    }

    /// Toggle a named profile timer
    ///
    /// The first call with `id` starts the timer; the next call with the
    /// same `id` logs `message` (indented like any other line) with the
    /// elapsed duration. The toggle bookkeeping lives in the engine.
    pub fn profile(&mut self, id: &str, message: &str) -> &mut Self {
        let line = format!("{}{}", self.indent.prefix(), message);
        self.logger.profile(id, &line);
        self
    }

    /// Increase indentation for future log messages
    pub fn indent(&mut self) -> &mut Self {
        self.indent.indent();
        self
    }

    /// Decrease indentation for future log messages
    ///
    /// A no-op at depth zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent.dedent();
        self
    }

    /// Draw a horizontal line at info level
    pub fn hr(&mut self) -> &mut Self {
        self.logger.log(Level::Info, HR_LINE);
        self
    }

    /// Register a console transport (min level info, colorized)
    pub fn log_to_console(&mut self) -> &mut Self {
        let transport = ConsoleTransport::new(self.transport_options());
        self.logger.add_transport(Box::new(transport));
        self
    }

    /// Register a file transport writing to `{prefix}_{timestamp}.log`
    ///
    /// The timestamp is the current time formatted with the configured
    /// `file_date_pattern`. File creation errors surface unmodified.
    pub fn log_to_file_with_timestamp(&mut self, prefix: &str) -> Result<&mut Self> {
        let filename = format!(
            "{}_{}.log",
            prefix,
            Local::now().format(&self.config.file_date_pattern)
        );
        let transport = FileTransport::create(filename, self.transport_options())?;
        self.logger.add_transport(Box::new(transport));
        Ok(self)
    }

    /// Current indentation prefix
    pub fn prefix(&self) -> &str {
        self.indent.prefix()
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.indent.depth()
    }

    /// The underlying logger
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// The underlying logger, mutably
    pub fn logger_mut(&mut self) -> &mut L {
        &mut self.logger
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            level: Level::Info,
            json: false,
            colorize: true,
            timestamp_format: self.config.timestamp_format.clone(),
        }
    }
}
