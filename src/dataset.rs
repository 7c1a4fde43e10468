// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The complex dataset: loaded once, shared read-only by every query.
//!
//! Two JSON shapes are accepted, a bare array of records or an object with a
//! `records` array (the shape the search endpoint itself returns, so a saved
//! response can be fed back in).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::Record;
use crate::util::normalize;

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetJson {
    Bare(Vec<Record>),
    Wrapped { records: Vec<Record> },
}

impl DatasetJson {
    fn into_records(self) -> Vec<Record> {
        match self {
            DatasetJson::Bare(records) | DatasetJson::Wrapped { records } => records,
        }
    }
}

/// An immutable, cheaply clonable list of records.
///
/// Clones share storage, so a server can hand one to every request.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    /// Wrap already-built records. Fails on a blank `city` or `complexName`.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        validate(&records)?;
        Ok(Dataset {
            records: records.into(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: DatasetJson = serde_json::from_str(json)?;
        Self::new(parsed.into_records())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let parsed: DatasetJson = serde_json::from_reader(BufReader::new(reader))?;
        Self::new(parsed.into_records())
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset {
            records: Arc::from(Vec::new()),
        }
    }
}

impl Deref for Dataset {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Duplicate complexes are kept (declarations get re-filed) but logged.
fn validate(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.city.trim().is_empty() {
            return Err(Error::invalid_record(index, "blank city"));
        }
        if record.complex_name.trim().is_empty() {
            return Err(Error::invalid_record(index, "blank complexName"));
        }
        if !seen.insert((normalize(&record.city), normalize(&record.complex_name))) {
            warn!(
                index,
                city = %record.city,
                complex = %record.complex_name,
                "duplicate complex"
            );
        }
    }
    debug!(records = records.len(), "dataset validated");
    Ok(())
}
