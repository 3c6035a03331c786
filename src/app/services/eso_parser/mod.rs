//! ESO parser for EnergyPlus simulation output files
//!
//! This module reads `.eso` files in two sequential stages over a single
//! forward-only line stream: the data dictionary is parsed into a
//! [`VariableMap`](crate::VariableMap), then the data section is streamed and
//! each value is appended to the series of the variable it names.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Reader orchestration and file handling
//! - [`lines`] - Line source with line-number tracking
//! - [`dictionary`] - Preamble skipping and data dictionary parsing
//! - [`data`] - Data section streaming
//! - [`field_parsers`] - Pure single-line field splitting
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eso_reader::app::services::eso_parser::EsoReader;
//!
//! # fn example() -> eso_reader::Result<()> {
//! let reader = EsoReader::default();
//! let result = reader.read_file(std::path::Path::new("eplusout.eso"))?;
//!
//! println!("Read {} variables from {} data lines",
//!          result.variables.len(),
//!          result.stats.data_lines);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod dictionary;
pub mod field_parsers;
pub mod lines;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use data::parse_data;
pub use dictionary::parse_dictionary;
pub use field_parsers::{DictionaryEntry, LineError};
pub use lines::NumberedLines;
pub use parser::EsoReader;
pub use stats::{ParseResult, ParseStats};
