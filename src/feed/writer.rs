//! Six-column outlier row writing.

use std::path::Path;

use crate::domain::OutlierRecord;
use crate::error::FeedError;

/// Write outlier rows as headerless comma-delimited text, one row per
/// record, in the order given.
///
/// Zero records still produce the (empty) file: "no outliers" is a
/// reportable outcome, not an error.
pub fn write_outliers(path: &Path, records: &[OutlierRecord]) -> Result<(), FeedError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| FeedError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    for record in records {
        writer.serialize(record).map_err(|source| FeedError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    writer.flush().map_err(|source| FeedError::Write {
        path: path.to_path_buf(),
        source: csv::Error::from(source),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OutlierRecord {
        OutlierRecord {
            instrument_id: "ACME".to_string(),
            timestamp: "2024-01-01 09:30:00".to_string(),
            price: 100.0,
            sample_mean: 19.0,
            deviation: 81.0,
            pct_over_threshold: 50.0,
        }
    }

    #[test]
    fn writes_six_columns_without_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_outliers(&path, &[record()]).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(body, "ACME,2024-01-01 09:30:00,100.0,19.0,81.0,50.0\n");
    }

    #[test]
    fn zero_records_still_produce_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_outliers(&path, &[]).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
