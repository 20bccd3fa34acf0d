//! Strict three-column price-file parsing.

use std::fs::File;
use std::path::Path;

use crate::domain::{Observation, Series};
use crate::error::FeedError;

/// Fields per row: instrument id, timestamp, price.
const EXPECTED_FIELDS: usize = 3;

/// Parse one comma-delimited price file into a [`Series`].
///
/// The schema check happens here, once: every row must carry exactly
/// three fields, the third parseable as a float. A row that does not is
/// a [`FeedError::InvalidInputFile`] for the whole file; a file with no
/// rows at all is [`FeedError::EmptyInputFile`]. Neither reaches the
/// sampler or the detector.
pub fn read_series(path: &Path) -> Result<Series, FeedError> {
    let file = File::open(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Flexible mode so short and long rows reach the per-row field-count
    // check below instead of tripping the reader's own length guard.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut observations = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let row = idx + 1;
        let record = record.map_err(|err| FeedError::InvalidInputFile {
            path: path.to_path_buf(),
            reason: format!("row {row}: {err}"),
        })?;

        if record.len() != EXPECTED_FIELDS {
            return Err(FeedError::InvalidInputFile {
                path: path.to_path_buf(),
                reason: format!(
                    "row {row} has {} fields, expected {EXPECTED_FIELDS}",
                    record.len()
                ),
            });
        }

        let price: f64 = record[2].trim().parse().map_err(|_| {
            FeedError::InvalidInputFile {
                path: path.to_path_buf(),
                reason: format!("row {row} has unparseable price {:?}", &record[2]),
            }
        })?;

        observations.push(Observation {
            instrument_id: record[0].to_string(),
            timestamp: record[1].to_string(),
            price,
        });
    }

    if observations.is_empty() {
        return Err(FeedError::EmptyInputFile {
            path: path.to_path_buf(),
        });
    }

    Ok(Series::new(observations))
}
