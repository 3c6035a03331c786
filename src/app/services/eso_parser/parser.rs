//! Core ESO reader implementation
//!
//! This module provides the reader orchestration: opening the file and
//! running the dictionary and data stages, in that order, over one line
//! stream.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use super::data::parse_data_with_stats;
use super::dictionary::parse_dictionary_with_stats;
use super::lines::NumberedLines;
use super::stats::{ParseResult, ParseStats};
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Reader for EnergyPlus `.eso` output files
///
/// Reads are single-pass and synchronous; either every variable is returned
/// with its full series or the first structural problem is returned as an
/// error.
#[derive(Debug, Clone, Default)]
pub struct EsoReader {
    config: ReaderConfig,
}

impl EsoReader {
    /// Create a reader with a validated configuration
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read an `.eso` file and return its variables with statistics
    ///
    /// The file is closed when this returns, whether or not parsing succeeded.
    pub fn read_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Reading ESO file: {}", file_path.display());

        let file = File::open(file_path)
            .map_err(|e| Error::io(format!("Failed to open {}", file_path.display()), e))?;
        let reader = BufReader::with_capacity(self.config.buffer_capacity, file);

        let result = self.read_from(reader)?;

        info!(
            "Read {} variables from {} data lines ({} values appended)",
            result.variables.len(),
            result.stats.data_lines,
            result.stats.values_appended
        );
        Ok(result)
    }

    /// Read `.eso` content from any buffered reader
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut lines = NumberedLines::from_reader(reader);
        let mut stats = ParseStats::new();

        let mut variables = parse_dictionary_with_stats(&mut lines, &mut stats)?;
        parse_data_with_stats(&mut lines, &mut variables, &mut stats, &self.config)?;

        Ok(ParseResult { variables, stats })
    }
}
