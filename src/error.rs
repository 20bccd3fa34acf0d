use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Window sampling failures. Non-fatal to a batch run: the offending
/// file is skipped and processing continues with the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("series contains no observations")]
    EmptySeries,

    #[error("series has {len} observations, fewer than the window size {window}")]
    InsufficientData { len: usize, window: usize },
}

/// Outlier detection failures.
///
/// `EmptySample` cannot occur when the sampler's contract is honored;
/// the detector checks anyway so it never divides by a zero count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("sample contains no observations")]
    EmptySample,
}

/// Price-file reading and writing failures, each carrying the offending path.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid price file: {reason}", path.display())]
    InvalidInputFile { path: PathBuf, reason: String },

    #[error("{} contains no rows", path.display())]
    EmptyInputFile { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("input directory {} does not exist or is not a directory", .0.display())]
    MissingInputDir(PathBuf),

    #[error("input directory {} is empty", .0.display())]
    EmptyInputDir(PathBuf),

    #[error("max files per exchange must be a positive integer, got {0:?}")]
    InvalidMaxFiles(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
