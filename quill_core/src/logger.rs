//! The underlying logger contract and its transport-dispatching engine.
//!
//! The facade talks to the engine only through the [`Logger`] trait, so
//! tests (and embedders with their own sinks) can swap the engine out.

use crate::transport::Transport;
use crate::Level;
use std::collections::HashMap;
use std::time::Instant;

/// Contract the facade requires of an underlying logger
pub trait Logger {
    /// Emit a message at the given level
    fn log(&mut self, level: Level, message: &str);

    /// Toggle a named timer: the first call with `id` starts timing, the
    /// next call with the same `id` logs `message` with the elapsed time
    fn profile(&mut self, id: &str, message: &str);

    /// Register an additional output destination
    fn add_transport(&mut self, transport: Box<dyn Transport>);
}

/// Logger fanning every entry out to a list of registered transports
///
/// Transport write failures are reported to stderr and dropped; logging
/// must never take the process down.
#[derive(Default)]
pub struct TransportLogger {
    transports: Vec<Box<dyn Transport>>,
    timers: HashMap<String, Instant>,
}

impl TransportLogger {
    /// Create an engine with no transports registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered transports
    pub fn transport_count(&self) -> usize {
        self.transports.len()
    }
}

impl Logger for TransportLogger {
    fn log(&mut self, level: Level, message: &str) {
        for transport in &mut self.transports {
            if let Err(e) = transport.log(level, message) {
                eprintln!("quill: transport error: {}", e);
            }
        }
    }

    fn profile(&mut self, id: &str, message: &str) {
        match self.timers.remove(id) {
            Some(started) => {
                let elapsed_ms = started.elapsed().as_millis();
                let line = format!("{} durationMs={}", message, elapsed_ms);
                self.log(Level::Info, &line);
            }
            None => {
                self.timers.insert(id.to_string(), Instant::now());
            }
        }
    }

    fn add_transport(&mut self, transport: Box<dyn Transport>) {
        self.transports.push(transport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Transport recording entries into a shared buffer
    struct SharedTransport {
        entries: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl Transport for SharedTransport {
        fn log(&mut self, level: Level, message: &str) -> Result<()> {
            self.entries.lock().unwrap().push((level, message.into()));
            Ok(())
        }
    }

    /// Transport that always fails
    struct BrokenTransport;

    impl Transport for BrokenTransport {
        fn log(&mut self, _level: Level, _message: &str) -> Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire").into())
        }
    }

    fn recording_logger() -> (TransportLogger, Arc<Mutex<Vec<(Level, String)>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        let mut logger = TransportLogger::new();
        logger.add_transport(Box::new(SharedTransport {
            entries: entries.clone(),
        }));
        (logger, entries)
    }

    #[test]
    fn test_log_fans_out_to_all_transports() {
        let entries_a = Arc::new(Mutex::new(Vec::new()));
        let entries_b = Arc::new(Mutex::new(Vec::new()));

        let mut logger = TransportLogger::new();
        logger.add_transport(Box::new(SharedTransport {
            entries: entries_a.clone(),
        }));
        logger.add_transport(Box::new(SharedTransport {
            entries: entries_b.clone(),
        }));

        logger.log(Level::Info, "hello");

        assert_eq!(entries_a.lock().unwrap().len(), 1);
        assert_eq!(entries_b.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_profile_first_call_emits_nothing() {
        let (mut logger, entries) = recording_logger();

        logger.profile("op", "running op");
        assert!(entries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_profile_second_call_logs_duration_at_info() {
        let (mut logger, entries) = recording_logger();

        logger.profile("op", "running op");
        logger.profile("op", "running op");

        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, Level::Info);
        assert!(entries[0].1.starts_with("running op durationMs="));
    }

    #[test]
    fn test_profile_id_can_be_reused_after_toggle() {
        let (mut logger, entries) = recording_logger();

        logger.profile("op", "first run");
        logger.profile("op", "first run");
        logger.profile("op", "second run");
        assert_eq!(entries.lock().unwrap().len(), 1);

        logger.profile("op", "second run");
        assert_eq!(entries.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_broken_transport_does_not_stop_others() {
        let entries = Arc::new(Mutex::new(Vec::new()));

        let mut logger = TransportLogger::new();
        logger.add_transport(Box::new(BrokenTransport));
        logger.add_transport(Box::new(SharedTransport {
            entries: entries.clone(),
        }));

        logger.log(Level::Error, "still delivered");

        assert_eq!(entries.lock().unwrap().len(), 1);
    }
}
