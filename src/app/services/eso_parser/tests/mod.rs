//! Test utilities for ESO parser testing
//!
//! This module provides fixture content and helper functions used across
//! the different test modules.

use std::io::{self, Write};
use tempfile::NamedTempFile;

use super::lines::NumberedLines;


/// The six header lines every `.eso` file starts with
pub const TEST_PREAMBLE: &str = "Program Version,EnergyPlus, Version 9.4.0-998c4b761e, YMD=2021.01.05 10:33
1,5,Environment Title[],Latitude[deg],Longitude[deg],Time Zone[],Elevation[m]
2,8,Day of Simulation[],Month[],Day of Month[],DST Indicator[1=yes 0=no],Hour[],StartMinute[],EndMinute[],DayType
3,5,Cumulative Day of Simulation[],Month[],Day of Month[],DST Indicator[1=yes 0=no],DayType  ! When Daily Report Variables Requested
4,2,Cumulative Days of Simulation[],Month[]  ! When Monthly Report Variables Requested
5,1,Cumulative Days of Simulation[] ! When Run Period Report Variables Requested";

/// Helper to create a complete `.eso` file with three hourly variables over two timesteps
pub fn create_test_eso() -> String {
    format!(
        "{TEST_PREAMBLE}
7,1,Environment,Site Outdoor Air Drybulb Temperature [C] !Hourly
8,1,ZONE1,Zone Mean Air Temperature [C] !Hourly
9,1,ZONE2,Zone Mean Air Temperature [C] !Hourly
End of Data Dictionary
1,CHICAGO ANN HTG 99.6% CONDNS DB,  41.98, -87.92,  -6.00, 201.00
2,1, 1,21, 0, 1, 0.00,60.00,WinterDesignDay
7,-20.6
8,21.0
9,20.5
2,1, 1,21, 0, 2, 0.00,60.00,WinterDesignDay
7,-20.6
8,20.8
9,20.4
End of Data
 Number of Records Written=         9"
    )
}

/// Helper to build `.eso` content from dictionary and data lines
pub fn eso_with(dictionary: &[&str], data: &[&str]) -> String {
    let mut content = String::from(TEST_PREAMBLE);
    for line in dictionary {
        content.push('\n');
        content.push_str(line);
    }
    content.push_str("\nEnd of Data Dictionary");
    for line in data {
        content.push('\n');
        content.push_str(line);
    }
    content.push_str("\nEnd of Data\n");
    content
}

/// Helper to create a line source over in-memory content
pub fn lines_from(content: &str) -> NumberedLines<io::Lines<&[u8]>> {
    NumberedLines::from_reader(content.as_bytes())
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
