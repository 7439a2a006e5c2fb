//! Error types shared by the collector and the holiday storage.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors which abort a collection run.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("request for year {year} failed: {source}")]
    Network {
        year: i32,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response for year {year}: {source}")]
    MalformedResponse {
        year: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed record #{index} for year {year}: missing field `{field}`")]
    MalformedRecord {
        year: i32,
        index: usize,
        field: &'static str,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors while reading or writing a holiday file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not serialize holidays: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {}: {source}", .path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors in the collector configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("year {year} is not a plausible calendar year")]
    YearOutOfRange { year: i32 },
}
