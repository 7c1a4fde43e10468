// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records, queries and responses that flow through the engine.
//!
//! # Invariants
//!
//! - **Record**: immutable once loaded. `city` and `complex_name` are
//!   non-blank (checked by the loader, see `Dataset`).
//! - **Query**: a field is either `None` or non-blank. Blank input is folded
//!   to `None` on construction, so "present" always means "has text".
//! - **SearchResponse**: `records.len() == min(limit, total)`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Provenance label attached to every result set.
pub const PROVENANCE: &str = "הרשות להתחדשות עירונית";

/// One declared urban-renewal complex.
///
/// Fields the engine does not look at (housing units, status, track, dates)
/// ride along in `extra` and are serialized back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub city: String,
    pub complex_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub complex_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// A record with just the two required fields.
    pub fn new(city: impl Into<String>, complex_name: impl Into<String>) -> Self {
        Record {
            city: city.into(),
            complex_name: complex_name.into(),
            neighborhood: None,
            complex_number: None,
            developer_name: None,
            extra: Map::new(),
        }
    }

    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    pub fn with_complex_number(mut self, number: impl Into<String>) -> Self {
        self.complex_number = Some(number.into());
        self
    }

    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer_name = Some(developer.into());
        self
    }

    /// The scored text fields in fixed order. Missing fields read as `""`.
    pub fn scored_fields(&self) -> [(RecordField, &str); 4] {
        [
            (RecordField::ComplexName, self.complex_name.as_str()),
            (RecordField::Neighborhood, self.neighborhood.as_deref().unwrap_or("")),
            (RecordField::ComplexNumber, self.complex_number.as_deref().unwrap_or("")),
            (RecordField::DeveloperName, self.developer_name.as_deref().unwrap_or("")),
        ]
    }
}

/// Text fields that take part in free-text relevance scoring, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    ComplexName,
    Neighborhood,
    ComplexNumber,
    DeveloperName,
}

impl RecordField {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::ComplexName => "complexName",
            RecordField::Neighborhood => "neighborhood",
            RecordField::ComplexNumber => "complexNumber",
            RecordField::DeveloperName => "developerName",
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Null) | None => None,
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "complexNumber must be a string or number, got {other}"
            )))
        }
    })
}

/// A search request: four independent optional filters.
///
/// Build with [`Query::new`] and the `with_*` setters, or deserialize from
/// request parameters. Either way blank strings end up as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, deserialize_with = "non_blank")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub developer: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub street: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw optional inputs (CLI flags, request parameters).
    pub fn from_parts(
        city: Option<String>,
        q: Option<String>,
        developer: Option<String>,
        street: Option<String>,
    ) -> Self {
        Query {
            city: city.and_then(present),
            q: q.and_then(present),
            developer: developer.and_then(present),
            street: street.and_then(present),
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = present(city.into());
        self
    }

    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = present(q.into());
        self
    }

    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = present(developer.into());
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = present(street.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.q.is_none() && self.developer.is_none() && self.street.is_none()
    }

    /// Boundary check: at least one field must be present.
    ///
    /// The engine itself accepts an empty query (it returns the whole dataset,
    /// truncated); rejecting it is the caller's job.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyQuery)
        } else {
            Ok(())
        }
    }
}

fn present(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn non_blank<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(present))
}

/// Transient pairing of a dataset position with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecord {
    /// Position in the dataset (also the stable tie-break order).
    pub index: usize,
    pub score: u32,
}

/// What the boundary serializes back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// At most `limit` records, best first.
    pub records: Vec<Record>,
    /// Matches before truncation.
    pub total: usize,
    pub source: String,
}
