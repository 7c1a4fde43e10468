// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the edges of the engine.
//!
//! Matching and ranking never fail: an absent filter skips its stage and a
//! query with no matches returns an empty result set. What can fail is
//! loading the dataset and the boundary's own input check.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// All four query fields were absent or blank.
    #[error("Missing query parameter (city, q, developer, or street)")]
    EmptyQuery,

    /// The dataset file could not be read.
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dataset is not valid JSON or does not have the record shape.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record is missing one of the fields every record must have.
    #[error("record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_record<S: Into<String>>(index: usize, reason: S) -> Self {
        Error::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's request rather than the data.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::EmptyQuery)
    }
}
