//! Application constants for ESO reading
//!
//! This module contains the structural markers and default values used
//! throughout the ESO reader. The preamble length and sentinels are fixed
//! properties of the `.eso` format.

// =============================================================================
// File Structure Constants
// =============================================================================

/// Number of header lines preceding the data dictionary
pub const PREAMBLE_LINE_COUNT: usize = 6;

/// Marker line terminating the data dictionary (prefix match)
pub const DICTIONARY_END_MARKER: &str = "End of Data Dictionary";

/// Marker line terminating the data section (prefix match)
pub const DATA_END_MARKER: &str = "End of Data";

// =============================================================================
// Field Separators
// =============================================================================

/// Separates the dictionary fields from the reporting frequency
pub const FREQUENCY_SEPARATOR: char = '!';

/// Separates fields on both dictionary and data lines
pub const FIELD_SEPARATOR: char = ',';

/// Opens the units part of a `name[units]` field
pub const UNITS_OPEN: char = '[';

/// Closes the units part of a `name[units]` field
pub const UNITS_CLOSE: char = ']';

/// Minimum dictionary fields: identifier, key and `name[units]`
pub const MIN_DICTIONARY_FIELDS: usize = 3;

/// Minimum data fields: identifier and value
pub const MIN_DATA_FIELDS: usize = 2;

// =============================================================================
// Reader Defaults
// =============================================================================

/// Default capacity of the buffered file reader in bytes
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Default number of data lines between progress log events
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100_000;
