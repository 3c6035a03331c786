//! Integration tests for the ESO reader with file fixtures
//!
//! These tests write `.eso` content to temporary files and read it back
//! through the public API, covering the end-to-end path from file open to
//! populated variable map.

use eso_reader::{Error, EsoReader, ReaderConfig, VariableRecord, find_by_name, read};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PREAMBLE: &str = "Program Version,EnergyPlus, Version 9.4.0-998c4b761e, YMD=2021.01.05 10:33
1,5,Environment Title[],Latitude[deg],Longitude[deg],Time Zone[],Elevation[m]
2,8,Day of Simulation[],Month[],Day of Month[],DST Indicator[1=yes 0=no],Hour[],StartMinute[],EndMinute[],DayType
3,5,Cumulative Day of Simulation[],Month[],Day of Month[],DST Indicator[1=yes 0=no],DayType  ! When Daily Report Variables Requested
4,2,Cumulative Days of Simulation[],Month[]  ! When Monthly Report Variables Requested
5,1,Cumulative Days of Simulation[] ! When Run Period Report Variables Requested";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Write `content` to `eplusout.eso` inside a fresh temporary directory
fn write_eso(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("eplusout.eso");
    fs::write(&path, content).expect("Failed to write fixture");
    (temp_dir, path)
}

/// A design-day run: one environment, hourly zone temperatures and a daily outdoor summary
fn design_day_eso() -> String {
    let mut content = String::from(PREAMBLE);
    content.push_str(
        "
6,1,Environment,Site Outdoor Air Drybulb Temperature [C] !Hourly
7,6,1,ZONE1,Zone Mean Air Temperature[C] ! Hourly
8,1,ZONE2,Zone Mean Air Temperature [C] !Hourly
48,7,Environment,Site Outdoor Air Drybulb Temperature [C] !Daily [Value,Min,Hour,Minute,Max,Hour,Minute]
End of Data Dictionary
1,CHICAGO ANN HTG 99.6% CONDNS DB,  41.98, -87.92,  -6.00, 201.00",
    );

    for hour in 1..=24 {
        content.push_str(&format!(
            "\n2,1, 1,21, 0,{hour:2}, 0.00,60.00,WinterDesignDay\n6,-20.6\n7,23.45\n8,{}\n99,1.0",
            20 + hour % 3
        ));
    }

    content.push_str(
        "
3,1, 1,21, 0,WinterDesignDay
48,-20.6,-20.6, 1,60,-20.6, 1,60
End of Data
 Number of Records Written=        99
",
    );
    content
}

#[test]
fn test_read_design_day_file() {
    init_logging();
    let (_temp_dir, path) = write_eso(&design_day_eso());

    let variables = read(&path).expect("Failed to read ESO file");

    assert_eq!(variables.len(), 4);

    let zone1 = &variables["7"];
    assert_eq!(zone1.name, "Zone Mean Air Temperature");
    assert_eq!(zone1.units, "C");
    assert_eq!(zone1.key, "ZONE1");
    assert_eq!(zone1.frequency, "Hourly");
    assert_eq!(zone1.len(), 24);
    assert!(zone1.series.iter().all(|value| value == "23.45"));

    let daily = &variables["48"];
    assert_eq!(daily.frequency, "Daily [Value,Min,Hour,Minute,Max,Hour,Minute]");
    assert_eq!(daily.series, vec!["-20.6"]);

    assert!(!variables.contains_key("99"));
}

#[test]
fn test_series_lengths_match_data_references() {
    init_logging();
    let content = design_day_eso();
    let (_temp_dir, path) = write_eso(&content);

    let variables = read(&path).unwrap();

    let data_section = content
        .split("End of Data Dictionary\n")
        .nth(1)
        .and_then(|rest| rest.split("\nEnd of Data").next())
        .unwrap();
    for (id, record) in &variables {
        let references = data_section
            .lines()
            .filter(|line| line.split(',').next().map(str::trim) == Some(id.as_str()))
            .count();
        assert_eq!(record.len(), references, "series length for id {}", id);
    }
}

#[test]
fn test_repeated_reads_are_equal() {
    init_logging();
    let (_temp_dir, path) = write_eso(&design_day_eso());

    let first = read(&path).unwrap();
    let second = read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_read_with_stats() {
    init_logging();
    let (_temp_dir, path) = write_eso(&design_day_eso());
    let reader = EsoReader::new(ReaderConfig::default().with_progress_interval(10)).unwrap();

    let result = reader.read_file(&path).unwrap();

    assert_eq!(result.stats.dictionary_entries, 4);
    // Environment line + 24 * (timestamp + 3 known + 1 unknown) + daily timestamp + daily value
    assert_eq!(result.stats.data_lines, 1 + 24 * 5 + 2);
    assert_eq!(result.stats.values_appended, 24 * 3 + 1);
    assert!(result.stats.is_complete());
}

#[test]
fn test_find_by_name_across_keys() {
    let (_temp_dir, path) = write_eso(&design_day_eso());
    let variables = read(&path).unwrap();

    let zones = find_by_name(&variables, "Zone Mean Air Temperature");
    let keys: Vec<&str> = zones.iter().map(|(_, record)| record.key.as_str()).collect();

    assert_eq!(keys, vec!["ZONE1", "ZONE2"]);
}

#[test]
fn test_empty_dictionary_file() {
    let content = format!("{PREAMBLE}\nEnd of Data Dictionary\n7,21.0\n8,22.0\nEnd of Data\n");
    let (_temp_dir, path) = write_eso(&content);

    let variables = read(&path).unwrap();

    assert!(variables.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = read(temp_dir.path().join("missing.eso")).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(!err.is_format_error());
}

#[test]
fn test_malformed_dictionary_returns_no_partial_result() {
    let content = format!(
        "{PREAMBLE}\n7,1,ZONE1,Zone Mean Air Temperature [C] !Hourly\n8,1,ZONE1,Zone Air Relative Humidity\nEnd of Data Dictionary\n7,21.0\nEnd of Data\n"
    );
    let (_temp_dir, path) = write_eso(&content);

    let err = read(&path).unwrap_err();

    assert!(err.is_format_error());
    assert!(err.to_string().contains("line 8"));
}

#[test]
fn test_not_an_eso_file() {
    let (_temp_dir, path) = write_eso("ob_end_time,id,src_id\n2023-01-01,1,2\n");

    let err = read(&path).unwrap_err();

    assert!(matches!(
        err,
        Error::TruncatedPreamble {
            expected: 6,
            found: 2
        }
    ));
}

#[test]
fn test_record_display_after_read() {
    let (_temp_dir, path) = write_eso(&design_day_eso());
    let variables = read(&path).unwrap();

    let record: &VariableRecord = &variables["8"];

    assert!(record.to_string().contains(" - data:  list of 24 elements"));
    assert!(record.summary().contains("key=ZONE2"));
}
