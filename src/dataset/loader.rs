//! CSV Dataset Loader
//!
//! Reads the tweet metrics file with an explicit schema contract: the four
//! required columns are located by header name at load time, and a missing
//! column fails fast with a schema-mismatch error instead of a downstream
//! lookup failure. Extra columns are ignored.

use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{normalize_handle, parse_posted_at, TweetRecord};

/// Columns the dataset must provide, by header name
pub const REQUIRED_COLUMNS: [&str; 4] =
    ["name", "date_time", "number_of_likes", "number_of_shares"];

/// Resolved positions of the required columns in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    date_time: usize,
    likes: usize,
    shares: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> DatasetResult<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(DatasetError::MissingColumn(column))
        };

        Ok(Self {
            name: find("name")?,
            date_time: find("date_time")?,
            likes: find("number_of_likes")?,
            shares: find("number_of_shares")?,
        })
    }
}

/// CSV loader for the tweet metrics dataset
///
/// Runs exactly once per process lifetime; the records it produces feed the
/// aggregation step and are never touched again.
#[derive(Debug, Default)]
pub struct DatasetLoader;

impl DatasetLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and normalize records from a CSV file
    pub fn load(&self, path: &Path) -> DatasetResult<Vec<TweetRecord>> {
        let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_reader(file)
    }

    /// Load records from an in-memory CSV string (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<Vec<TweetRecord>> {
        self.load_reader(csv_data.as_bytes())
    }

    fn load_reader<R: std::io::Read>(&self, reader: R) -> DatasetResult<Vec<TweetRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.headers()?)?;

        let mut records = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            // Header occupies line 1
            let line = row_idx + 2;
            let record = result?;

            let handle = field(&record, columns.name, "name", line)?;
            let ts_str = field(&record, columns.date_time, "date_time", line)?;

            let posted_at =
                parse_posted_at(ts_str).ok_or_else(|| DatasetError::Timestamp {
                    line,
                    value: ts_str.to_string(),
                })?;

            let likes = parse_metric(&record, columns.likes, "number_of_likes", line)?;
            let shares = parse_metric(&record, columns.shares, "number_of_shares", line)?;

            records.push(TweetRecord {
                handle: normalize_handle(handle),
                posted_at,
                likes,
                shares,
            });
        }

        tracing::debug!(records = records.len(), "Dataset loaded");

        Ok(records)
    }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    column: &'static str,
    line: usize,
) -> DatasetResult<&'a str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or(DatasetError::MissingField { line, column })
}

fn parse_metric(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    line: usize,
) -> DatasetResult<i64> {
    let value = field(record, index, column, line)?;
    value.parse::<i64>().map_err(|_| DatasetError::Metric {
        line,
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const SAMPLE: &str = "\
author,content,date_time,id,language,name,number_of_likes,number_of_shares
katyperry,hello,01/02/2023 10:30,1001,en,KatyPerry,120,14
taylorswift13,hi,02/02/2023 18:05,1002,en,TaylorSwift13,4031,220
";

    #[test]
    fn test_load_str_normalizes_handles() {
        let records = DatasetLoader::new().load_str(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].handle, "katyperry");
        assert_eq!(records[1].handle, "taylorswift13");
    }

    #[test]
    fn test_load_str_parses_day_first() {
        let records = DatasetLoader::new().load_str(SAMPLE).unwrap();
        assert_eq!(
            records[0].date(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_columns_found_by_name_not_position() {
        // Same columns, shuffled order
        let csv_data = "\
number_of_shares,name,number_of_likes,date_time
7,Cristiano,300,2023-02-01
";
        let records = DatasetLoader::new().load_str(csv_data).unwrap();
        assert_eq!(records[0].handle, "cristiano");
        assert_eq!(records[0].likes, 300);
        assert_eq!(records[0].shares, 7);
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let csv_data = "name,date_time,number_of_likes\na,2023-02-01,1\n";
        let err = DatasetLoader::new().load_str(csv_data).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn("number_of_shares")
        ));
    }

    #[test]
    fn test_bad_timestamp_aborts_with_line() {
        let csv_data = "\
name,date_time,number_of_likes,number_of_shares
a,2023-02-01,1,1
b,yesterday-ish,2,2
";
        let err = DatasetLoader::new().load_str(csv_data).unwrap_err();
        match err {
            DatasetError::Timestamp { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday-ish");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_metric_aborts() {
        let csv_data = "\
name,date_time,number_of_likes,number_of_shares
a,2023-02-01,lots,1
";
        let err = DatasetLoader::new().load_str(csv_data).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Metric {
                line: 2,
                column: "number_of_likes",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_file_yields_no_records() {
        let csv_data = "name,date_time,number_of_likes,number_of_shares\n";
        let records = DatasetLoader::new().load_str(csv_data).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let records = DatasetLoader::new().load(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DatasetLoader::new()
            .load(Path::new("/nonexistent/tweets.csv"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
