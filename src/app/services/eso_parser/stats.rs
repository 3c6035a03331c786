//! Parsing statistics and result structures for ESO reading
//!
//! This module provides types for tracking what a read encountered and for
//! returning the parsed variables together with those counts.

use crate::app::models::VariableMap;

/// Parsed variables with basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Variables keyed by identifier, with their series filled in
    pub variables: VariableMap,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Dictionary lines parsed into records (including redefinitions)
    pub dictionary_entries: usize,

    /// Dictionary entries that replaced an earlier entry with the same identifier
    pub redefined_identifiers: usize,

    /// Data lines read before the end marker
    pub data_lines: usize,

    /// Values appended to a known variable's series
    pub values_appended: usize,

    /// Data lines dropped because their identifier is not in the dictionary
    pub unknown_identifier_lines: usize,

    /// Whether the dictionary end marker was found
    pub dictionary_terminated: bool,

    /// Whether the data end marker was found
    pub data_terminated: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            dictionary_entries: 0,
            redefined_identifiers: 0,
            data_lines: 0,
            values_appended: 0,
            unknown_identifier_lines: 0,
            dictionary_terminated: false,
            data_terminated: false,
        }
    }

    /// Percentage of data lines that matched a dictionary identifier
    pub fn match_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            (self.values_appended as f64 / self.data_lines as f64) * 100.0
        }
    }

    /// Whether both end markers were found
    pub fn is_complete(&self) -> bool {
        self.dictionary_terminated && self.data_terminated
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
