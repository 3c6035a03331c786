//! Field parsing utilities for ESO lines
//!
//! Pure functions that split a single dictionary or data line into its
//! fields. They know nothing about line numbers or files; callers attach
//! that context when converting a [`LineError`] into [`crate::Error`].

use crate::app::models::VariableRecord;
use crate::constants::{
    FIELD_SEPARATOR, FREQUENCY_SEPARATOR, MIN_DATA_FIELDS, MIN_DICTIONARY_FIELDS, UNITS_CLOSE,
    UNITS_OPEN,
};

/// Structural problem found in a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("missing '!' before the reporting frequency")]
    MissingFrequency,

    #[error("more than one '!' separator")]
    ExtraFrequencySeparator,

    #[error("expected at least {expected} comma-separated fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("missing '[' in name[units] field")]
    MissingUnits,

    #[error("more than one '[' in name[units] field")]
    ExtraUnitsOpen,
}

/// A parsed data dictionary line, borrowing from the line text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry<'a> {
    pub id: &'a str,
    pub key: &'a str,
    pub name: &'a str,
    pub units: &'a str,
    pub frequency: &'a str,
}

impl DictionaryEntry<'_> {
    /// Convert into an owned identifier and an empty record
    pub fn into_record(self) -> (String, VariableRecord) {
        (
            self.id.to_string(),
            VariableRecord::new(self.name, self.units, self.key, self.frequency),
        )
    }
}

/// Parse a dictionary line of the form `id,[extra,...]key,name[units] ! frequency`
///
/// The key and `name[units]` fields are taken from the end of the field list
/// so any number of extra fields between them and the identifier is accepted.
pub fn parse_dictionary_line(line: &str) -> Result<DictionaryEntry<'_>, LineError> {
    let (fields_text, frequency) = split_frequency(line)?;
    let fields = split_fields(fields_text);

    let &[id, .., key, name_units] = fields.as_slice() else {
        return Err(LineError::TooFewFields {
            expected: MIN_DICTIONARY_FIELDS,
            found: fields.len(),
        });
    };
    let (name, units) = split_name_units(name_units)?;

    Ok(DictionaryEntry {
        id,
        key,
        name,
        units,
        frequency,
    })
}

/// Parse a data line of the form `id,value[,...]`, returning `(id, value)`
///
/// Fields after the value are ignored.
pub fn parse_data_line(line: &str) -> Result<(&str, &str), LineError> {
    let mut fields = line.splitn(MIN_DATA_FIELDS + 1, FIELD_SEPARATOR);

    match (fields.next(), fields.next()) {
        (Some(id), Some(value)) => Ok((id.trim(), value.trim())),
        (found, _) => Err(LineError::TooFewFields {
            expected: MIN_DATA_FIELDS,
            found: usize::from(found.is_some()),
        }),
    }
}

/// Split a dictionary line on `!` into trimmed `(fields, frequency)` parts
pub fn split_frequency(line: &str) -> Result<(&str, &str), LineError> {
    let (fields, frequency) = line
        .split_once(FREQUENCY_SEPARATOR)
        .ok_or(LineError::MissingFrequency)?;

    if frequency.contains(FREQUENCY_SEPARATOR) {
        return Err(LineError::ExtraFrequencySeparator);
    }

    Ok((fields.trim(), frequency.trim()))
}

/// Split on `,` and trim every field
pub fn split_fields(text: &str) -> Vec<&str> {
    text.split(FIELD_SEPARATOR).map(str::trim).collect()
}

/// Split a `name[units]` field into `(name, units)`
///
/// The name is trimmed so `Zone Mean Air Temperature [C]` and
/// `Zone Mean Air Temperature[C]` give the same name. A missing closing
/// bracket is tolerated; a second opening bracket is not.
pub fn split_name_units(field: &str) -> Result<(&str, &str), LineError> {
    let (name, units) = field
        .split_once(UNITS_OPEN)
        .ok_or(LineError::MissingUnits)?;
    if units.contains(UNITS_OPEN) {
        return Err(LineError::ExtraUnitsOpen);
    }
    let units = units.strip_suffix(UNITS_CLOSE).unwrap_or(units);

    Ok((name.trim(), units.trim()))
}
