//! Configuration management and validation.
//!
//! Provides the reader configuration. Options here tune how input is
//! buffered and how often progress is logged; they never change what a
//! file parses to.

use crate::constants::{DEFAULT_BUFFER_CAPACITY, DEFAULT_PROGRESS_INTERVAL};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for [`crate::EsoReader`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Capacity of the buffered file reader in bytes
    pub buffer_capacity: usize,

    /// Data lines between progress debug events (0 = disabled)
    pub progress_interval: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ReaderConfig {
    /// Set the buffered reader capacity
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    /// Set the progress logging interval
    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Disable progress logging
    pub fn without_progress(mut self) -> Self {
        self.progress_interval = 0;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity == 0 {
            return Err(Error::configuration("buffer_capacity must be greater than zero"));
        }

        debug!(
            "Reader config: buffer_capacity={}, progress_interval={}",
            self.buffer_capacity, self.progress_interval
        );
        Ok(())
    }

    /// Whether a progress event is due after `lines_read` data lines
    pub fn progress_due(&self, lines_read: usize) -> bool {
        self.progress_interval > 0 && lines_read > 0 && lines_read % self.progress_interval == 0
    }
}
