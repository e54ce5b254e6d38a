//! Indentation state for nested log output.
//!
//! The prefix is recomputed on every depth change so reads stay allocation
//! free on the hot logging path.

/// Fixed-width indentation unit (four spaces)
pub const INDENT_UNIT: &str = "    ";

/// Current indentation depth and its derived prefix string
///
/// Invariant: `prefix` always equals `INDENT_UNIT` repeated `depth` times,
/// and `depth` never goes below zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndentState {
    depth: usize,
    prefix: String,
}

impl IndentState {
    /// Create a new state at depth zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase depth by one
    pub fn indent(&mut self) {
        self.depth += 1;
        self.resolve();
    }

    /// Decrease depth by one, flooring at zero
    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
        self.resolve();
    }

    /// Current depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Current prefix string
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn resolve(&mut self) {
        self.prefix = INDENT_UNIT.repeat(self.depth);
    }
}
