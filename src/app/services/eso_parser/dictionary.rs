//! Data dictionary parsing
//!
//! Skips the fixed file preamble and turns every dictionary line up to the
//! `End of Data Dictionary` marker into a [`VariableRecord`](crate::VariableRecord).

use std::io;
use tracing::{debug, warn};

use super::field_parsers::parse_dictionary_line;
use super::lines::NumberedLines;
use super::stats::ParseStats;
use crate::app::models::VariableMap;
use crate::constants::{DICTIONARY_END_MARKER, PREAMBLE_LINE_COUNT};
use crate::{Error, Result};

/// Parse the preamble and data dictionary into a map of empty records
///
/// Stops after consuming the `End of Data Dictionary` line, leaving `lines`
/// positioned at the first data line. Running out of input before the marker
/// ends the dictionary without error.
pub fn parse_dictionary<I>(lines: &mut NumberedLines<I>) -> Result<VariableMap>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut stats = ParseStats::new();
    parse_dictionary_with_stats(lines, &mut stats)
}

pub(crate) fn parse_dictionary_with_stats<I>(
    lines: &mut NumberedLines<I>,
    stats: &mut ParseStats,
) -> Result<VariableMap>
where
    I: Iterator<Item = io::Result<String>>,
{
    skip_preamble(lines)?;

    let mut variables = VariableMap::new();

    while let Some(line) = lines.next_line()? {
        if line.starts_with(DICTIONARY_END_MARKER) {
            stats.dictionary_terminated = true;
            debug!("Found dictionary end marker at line {}", lines.line_number());
            break;
        }

        let entry = parse_dictionary_line(&line).map_err(|e| {
            Error::dictionary_format(lines.line_number(), line.as_str(), e.to_string())
        })?;
        let (id, record) = entry.into_record();
        stats.dictionary_entries += 1;

        if let Some(previous) = variables.insert(id.clone(), record) {
            stats.redefined_identifiers += 1;
            warn!(
                "Identifier {} redefined at line {}; replacing '{}'",
                id,
                lines.line_number(),
                previous.name
            );
        }
    }

    if !stats.dictionary_terminated {
        debug!("Input ended before the dictionary end marker");
    }

    debug!("Parsed {} dictionary variables", variables.len());
    Ok(variables)
}

/// Consume the fixed preamble preceding the dictionary
fn skip_preamble<I>(lines: &mut NumberedLines<I>) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    for found in 0..PREAMBLE_LINE_COUNT {
        if lines.next_line()?.is_none() {
            return Err(Error::truncated_preamble(PREAMBLE_LINE_COUNT, found));
        }
    }

    debug!("Skipped {} preamble lines", PREAMBLE_LINE_COUNT);
    Ok(())
}
