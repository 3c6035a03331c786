//! Data models for ESO reading
//!
//! This module contains the core data structures for representing EnergyPlus
//! report variables and the series of values recorded for them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Mapping from variable identifier to its record
///
/// Identifiers are kept as the verbatim tokens found in the file.
pub type VariableMap = HashMap<String, VariableRecord>;

// =============================================================================
// Variable Record Structure
// =============================================================================

/// One reported variable with its metadata and recorded values
///
/// Declared by a single data dictionary line such as
/// `7,1,ZONE1,Zone Mean Air Temperature [C] !Hourly`. Values are appended in
/// file order as the data section is read and are kept as raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VariableRecord {
    /// Report variable name (e.g., "Zone Mean Air Temperature")
    pub name: String,

    /// Unit string (e.g., "C"); empty for dimensionless variables
    pub units: String,

    /// Key name distinguishing instances of the same variable (e.g., a zone)
    pub key: String,

    /// Reporting frequency descriptor (e.g., "Hourly")
    pub frequency: String,

    /// Raw recorded values in chronological order
    pub series: Vec<String>,
}

impl VariableRecord {
    /// Create a record with an empty series
    pub fn new(
        name: impl Into<String>,
        units: impl Into<String>,
        key: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            units: units.into(),
            key: key.into(),
            frequency: frequency.into(),
            series: Vec::new(),
        }
    }

    /// Append a raw value to the series
    pub fn push_value(&mut self, value: impl Into<String>) {
        self.series.push(value.into());
    }

    /// Number of recorded values
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether no values have been recorded
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// One-line description of the record for logs and diagnostics
    pub fn summary(&self) -> String {
        format!(
            "VariableRecord(name={}, units={}, key={}, freq={}, len(data)={})",
            self.name,
            self.units,
            self.key,
            self.frequency,
            self.series.len()
        )
    }
}

impl fmt::Display for VariableRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ESO variable:")?;
        writeln!(f, " - name:  {}", self.name)?;
        writeln!(f, " - units: {}", self.units)?;
        writeln!(f, " - key:   {}", self.key)?;
        writeln!(f, " - freq:  {}", self.frequency)?;
        writeln!(f, " - data:  list of {} elements", self.series.len())
    }
}

/// Find every record reporting the variable `name`, ordered by identifier
///
/// A variable reported for several keys (one per zone, say) yields one entry
/// per key. Identifiers are compared numerically when both parse as integers
/// so that `"10"` sorts after `"9"`.
pub fn find_by_name<'a>(
    variables: &'a VariableMap,
    name: &str,
) -> Vec<(&'a str, &'a VariableRecord)> {
    let mut matches: Vec<(&str, &VariableRecord)> = variables
        .iter()
        .filter(|(_, record)| record.name == name)
        .map(|(id, record)| (id.as_str(), record))
        .collect();

    matches.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    });
    matches
}
