//! ESO Reader Library
//!
//! A Rust library for reading EnergyPlus simulation output files (`.eso`).
//!
//! An `.eso` file has a fixed six-line preamble, a data dictionary that
//! declares every reported variable under a numeric identifier, and a data
//! section of `id,value` lines. This library provides tools for:
//! - Parsing the data dictionary into [`VariableRecord`]s keyed by identifier
//! - Streaming the data section and appending raw values to each series
//! - Reading whole files with a single call to [`read`]
//!
//! ```rust,no_run
//! let variables = eso_reader::read("eplusout.eso")?;
//! for (id, variable) in &variables {
//!     println!("{id}: {}", variable.summary());
//! }
//! # Ok::<(), eso_reader::Error>(())
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod eso_parser;
    }
}

// Re-export commonly used types
pub use app::models::{VariableMap, VariableRecord, find_by_name};
pub use app::services::eso_parser::{
    EsoReader, NumberedLines, ParseResult, ParseStats, parse_data, parse_dictionary,
};
pub use config::ReaderConfig;

use std::path::Path;

/// Read an `.eso` file and return every variable keyed by its identifier.
///
/// Equivalent to `EsoReader::default().read_file(path)` without the
/// statistics.
pub fn read(path: impl AsRef<Path>) -> Result<VariableMap> {
    EsoReader::default()
        .read_file(path.as_ref())
        .map(|result| result.variables)
}

/// Result type alias for ESO reading
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ESO reading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input ended inside the fixed file preamble
    #[error("Truncated preamble: expected {expected} header lines, found {found}")]
    TruncatedPreamble { expected: usize, found: usize },

    /// Malformed data dictionary line
    #[error("Data dictionary format error at line {line_number}: {message} (line: '{line}')")]
    DictionaryFormat {
        line_number: usize,
        line: String,
        message: String,
    },

    /// Malformed data line
    #[error("Data format error at line {line_number}: {message} (line: '{line}')")]
    DataFormat {
        line_number: usize,
        line: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a truncated preamble error
    pub fn truncated_preamble(expected: usize, found: usize) -> Self {
        Self::TruncatedPreamble { expected, found }
    }

    /// Create a data dictionary format error
    pub fn dictionary_format(
        line_number: usize,
        line: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::DictionaryFormat {
            line_number,
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a data line format error
    pub fn data_format(
        line_number: usize,
        line: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::DataFormat {
            line_number,
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error describes a malformed input file rather than an I/O failure
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::TruncatedPreamble { .. } | Self::DictionaryFormat { .. } | Self::DataFormat { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
