//! Bounded, append-only log of diagnostics collected during a run
//!
//! Workers never abort the walk on failure. They render the failure into a
//! line and push it here; the driver reads the log once, at the end, to
//! decide between the success and failure summaries.

use std::fmt;

use tracing::debug;

use crate::config::consts::limits::MAX_ERRORS;
use crate::error::SsgError;

/// Ordered diagnostics, capped at a fixed capacity.
///
/// Overflow policy is drop-newest: once `capacity` entries are stored,
/// further pushes are discarded and only counted in [`ErrorLog::dropped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    entries: Vec<String>,
    capacity: usize,
    dropped: usize,
}

impl ErrorLog {
    /// Empty log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_ERRORS)
    }

    /// Empty log holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    /// Append a diagnostic line.
    ///
    /// Returns `false` when the log is full and the line was dropped.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        if self.entries.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.entries.push(message.into());
        true
    }

    /// Append the diagnostic line for a recoverable error
    pub fn record(&mut self, err: &SsgError) -> bool {
        debug!(error = %err, "recorded diagnostic");
        self.push(err.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of diagnostics discarded because the log was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "- {}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
