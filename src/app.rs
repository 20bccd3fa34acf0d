//! Batch orchestration: walk the exchange tree, sample each price file,
//! and write annotated outlier rows to a mirrored output tree.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rand::Rng;
use tracing::{info, warn};

use crate::config::Config;
use crate::detector;
use crate::error::{Error, Result};
use crate::feed;
use crate::sampler;

/// Outcome of one input file inside a batch run.
#[derive(Debug)]
pub enum FileOutcome {
    /// Processed; the output file holds this many outlier rows.
    Processed { path: PathBuf, outliers: usize },
    /// Skipped with the reason; no output file was created.
    Skipped { path: PathBuf, reason: String },
}

/// Accumulated results of one batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Timestamped root all output files were written under.
    pub output_root: PathBuf,
    /// Per-file outcomes, in visit order.
    pub outcomes: Vec<FileOutcome>,
    /// Exchange directories in which not a single file was processed.
    pub exchanges_without_files: Vec<PathBuf>,
}

impl RunSummary {
    #[must_use]
    pub fn processed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Processed { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Skipped { .. }))
            .count()
    }

    /// Processed files whose sample produced zero outlier rows.
    #[must_use]
    pub fn without_outliers(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Processed { outliers: 0, .. }))
            .count()
    }
}

/// Run one batch over every exchange folder under the configured input
/// root.
///
/// At most `max_files` files per exchange are processed. A file that
/// fails to parse or sample is skipped, recorded with its reason, and
/// does not consume the limit; one bad file never aborts the batch. The
/// caller-supplied random source drives the window position for every
/// file.
///
/// # Errors
///
/// Run-fatal conditions only: missing or empty input root, or an
/// uncreatable output root. Per-file failures land in the summary.
pub fn run<R: Rng + ?Sized>(config: &Config, max_files: usize, rng: &mut R) -> Result<RunSummary> {
    let input_root = &config.scan.input_dir;
    if !input_root.is_dir() {
        return Err(Error::MissingInputDir(input_root.clone()));
    }

    let entries = sorted_entries(input_root)?;
    if entries.is_empty() {
        return Err(Error::EmptyInputDir(input_root.clone()));
    }

    let output_root = config
        .scan
        .output_dir
        .join(output_root_name(Local::now()));
    fs::create_dir_all(&output_root)?;

    info!(
        input_root = %input_root.display(),
        output_root = %output_root.display(),
        window = config.scan.window,
        max_files,
        "starting batch run"
    );

    let mut summary = RunSummary {
        output_root: output_root.clone(),
        ..RunSummary::default()
    };

    for exchange in entries {
        let Some(exchange_name) = exchange.file_name() else {
            continue;
        };
        if !exchange.is_dir() {
            continue;
        }

        let out_dir = output_root.join(exchange_name);
        let mut processed = 0usize;

        for file in sorted_entries(&exchange)? {
            if processed >= max_files {
                break;
            }
            if !is_price_file(&file) {
                continue;
            }
            let Some(file_name) = file.file_name() else {
                continue;
            };

            match process_file(&file, &out_dir.join(file_name), config.scan.window, rng) {
                Ok(outliers) => {
                    processed += 1;
                    if outliers == 0 {
                        info!(
                            file = %file.display(),
                            "sample produced no outliers; output file still created"
                        );
                    }
                    summary.outcomes.push(FileOutcome::Processed {
                        path: file,
                        outliers,
                    });
                }
                Err(err) => {
                    warn!(file = %file.display(), error = %err, "skipping file");
                    summary.outcomes.push(FileOutcome::Skipped {
                        path: file,
                        reason: err.to_string(),
                    });
                }
            }
        }

        if processed == 0 {
            warn!(exchange = %exchange.display(), "no valid price files");
            summary.exchanges_without_files.push(exchange);
        }
    }

    info!(
        processed = summary.processed(),
        skipped = summary.skipped(),
        "batch run finished"
    );

    Ok(summary)
}

/// Pipeline for a single input file: parse, sample, detect, write.
fn process_file<R: Rng + ?Sized>(
    path: &Path,
    out_path: &Path,
    window: usize,
    rng: &mut R,
) -> Result<usize> {
    let series = feed::read_series(path)?;
    let sample = sampler::sample_window(&series, window, rng)?;
    let outliers = detector::detect(&sample)?;

    // Exchange output directories appear lazily, only once a file in
    // that exchange actually produces output.
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    feed::write_outliers(out_path, &outliers)?;

    Ok(outliers.len())
}

fn output_root_name(now: DateTime<Local>) -> String {
    format!("outliers_results_{}", now.format("%Y-%m-%d_%H-%M-%S"))
}

fn is_price_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Directory entries in sorted name order, for reproducible runs.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect::<Vec<_>>();
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_root_name_embeds_date_and_time() {
        let now = DateTime::parse_from_rfc3339("2024-03-05T14:09:31+00:00")
            .unwrap()
            .with_timezone(&Local);
        let name = output_root_name(now);

        assert!(name.starts_with("outliers_results_"));
        assert_eq!(name.len(), "outliers_results_".len() + 19);
    }

    #[test]
    fn only_csv_files_are_price_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("a.csv");
        let txt = dir.path().join("b.txt");
        std::fs::write(&csv, "x").unwrap();
        std::fs::write(&txt, "x").unwrap();

        assert!(is_price_file(&csv));
        assert!(!is_price_file(&txt));
        assert!(!is_price_file(dir.path()));
    }
}
