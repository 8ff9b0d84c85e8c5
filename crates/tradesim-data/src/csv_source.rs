//! CSV price source.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tradesim_core::error::DataError;
use tradesim_core::traits::PriceSource;

/// CSV record format. Only the date and close columns are used.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
}

/// Price source reading daily closes from a local CSV file.
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self { path })
    }

    /// Load every close in the file, oldest first.
    fn load_closes(&self) -> Result<Vec<f64>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut rows = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            rows.push((parse_timestamp(&record.date)?, record.close));
        }

        rows.sort_by_key(|(timestamp, _)| *timestamp);

        Ok(rows.into_iter().map(|(_, close)| close).collect())
    }
}

/// Parse various timestamp formats.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            let dt = d.and_hms_opt(0, 0, 0).unwrap();
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    // Unix timestamp fallback; assume milliseconds if > 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts);
        } else {
            return Ok(ts * 1000);
        }
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}

#[async_trait]
impl PriceSource for CsvPriceSource {
    async fn fetch_recent_closes(&self, _symbol: &str, count: usize) -> Result<Vec<f64>, DataError> {
        let closes = self.load_closes()?;
        let start = closes.len().saturating_sub(count);
        Ok(closes[start..].to_vec())
    }

    fn name(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp("2024-01-15").is_ok());
        assert!(parse_timestamp("2024-01-15 10:30:00").is_ok());
        assert!(parse_timestamp("1705312800000").is_ok()); // Unix ms
        assert!(parse_timestamp("1705312800").is_ok()); // Unix sec
        assert!(parse_timestamp("not-a-date").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(CsvPriceSource::new("/nonexistent/prices.csv").is_err());
    }

    #[tokio::test]
    async fn test_fetch_returns_chronological_tail() {
        let path = std::env::temp_dir().join("tradesim_csv_source_test.csv");
        std::fs::write(
            &path,
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-03,3.0,3.5,2.5,103.0,1000\n\
             2024-01-01,1.0,1.5,0.5,101.0,1000\n\
             2024-01-02,2.0,2.5,1.5,102.0,1000\n",
        )
        .unwrap();

        let source = CsvPriceSource::new(&path).unwrap();
        let closes = source.fetch_recent_closes("TEST", 2).await.unwrap();

        // Rows are sorted by date before the tail is taken.
        assert_eq!(closes, vec![102.0, 103.0]);

        let all = source.fetch_recent_closes("TEST", 10).await.unwrap();
        assert_eq!(all, vec![101.0, 102.0, 103.0]);

        std::fs::remove_file(&path).ok();
    }
}
