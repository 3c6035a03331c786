//! Data section streaming
//!
//! Reads `id,value` lines up to the `End of Data` marker and appends each
//! value to the series of the variable the identifier names.

use std::io;
use tracing::debug;

use super::field_parsers::parse_data_line;
use super::lines::NumberedLines;
use super::stats::ParseStats;
use crate::app::models::VariableMap;
use crate::config::ReaderConfig;
use crate::constants::DATA_END_MARKER;
use crate::{Error, Result};

/// Append every data value to its variable's series
///
/// Lines whose identifier is not in `variables` are dropped without error.
/// A line with fewer than two fields aborts the read.
pub fn parse_data<I>(lines: &mut NumberedLines<I>, variables: &mut VariableMap) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut stats = ParseStats::new();
    parse_data_with_stats(lines, variables, &mut stats, &ReaderConfig::default())
}

pub(crate) fn parse_data_with_stats<I>(
    lines: &mut NumberedLines<I>,
    variables: &mut VariableMap,
    stats: &mut ParseStats,
    config: &ReaderConfig,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    while let Some(line) = lines.next_line()? {
        if line.starts_with(DATA_END_MARKER) {
            stats.data_terminated = true;
            debug!("Found data end marker at line {}", lines.line_number());
            break;
        }

        let (id, value) = parse_data_line(&line).map_err(|e| {
            Error::data_format(lines.line_number(), line.as_str(), e.to_string())
        })?;
        stats.data_lines += 1;

        match variables.get_mut(id) {
            Some(record) => {
                record.push_value(value);
                stats.values_appended += 1;
            }
            None => stats.unknown_identifier_lines += 1,
        }

        if config.progress_due(stats.data_lines) {
            debug!(
                "Read {} data lines ({} values appended)",
                stats.data_lines, stats.values_appended
            );
        }
    }

    if !stats.data_terminated {
        debug!("Input ended before the data end marker");
    }

    Ok(())
}
