// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hebrew fuzzy matching and relevance ranking over urban-renewal complexes.
//!
//! Given a dataset of declared complexes (city, complex name, neighborhood,
//! complex number, developer) and a query with up to four optional filters,
//! return the matching records, best first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   util      │────▶│   alias      │────▶│              │
//! │ (normalize, │     │ (CityMatcher)│     │              │
//! │  tokens)    │     └──────────────┘     │   search     │
//! │             │     ┌──────────────┐     │  (pipeline,  │
//! │             │────▶│   scoring    │────▶│   developer) │
//! └─────────────┘     │ (relevance,  │     │              │
//!        │            │  street,     │     └──────────────┘
//!        ▼            │  ranking)    │            ▲
//! ┌─────────────┐     └──────────────┘            │
//! │   fuzzy     │                          ┌──────────────┐
//! │(levenshtein)│                          │   dataset    │
//! └─────────────┘                          └──────────────┘
//! ```
//!
//! # Pipeline
//!
//! | Stage       | Runs when            | Effect                                   |
//! |-------------|----------------------|------------------------------------------|
//! | city        | `city` present       | filter, alias- and typo-tolerant         |
//! | q           | `q` present          | score, drop zeros, stable sort           |
//! | street      | `street` and no `q`  | score, drop zeros, stable sort           |
//! | developer   | `developer` present  | filter, containment- and typo-tolerant   |
//!
//! # Usage
//!
//! ```
//! use mitcham::{search, Dataset, Query};
//!
//! let dataset = Dataset::from_json_str(r#"[
//!     {"city": "תל אביב יפו", "complexName": "מתחם הרצל", "developerName": "אלקטרה בניה"},
//!     {"city": "רעננה", "complexName": "גן עץ"}
//! ]"#).unwrap();
//!
//! let query = Query::new().with_city("ת״א").with_developer("אלקטרה");
//! let response = search(&dataset, &query);
//!
//! assert_eq!(response.total, 1);
//! assert_eq!(response.source, "הרשות להתחדשות עירונית");
//! ```

// Module declarations
pub mod alias;
pub mod config;
pub mod contracts;
pub mod dataset;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

// Re-exports for public API
pub use alias::{city_match, resolve_city, CityMatcher, CITY_ALIASES};
pub use config::SearchConfig;
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use fuzzy::{levenshtein, levenshtein_within};
pub use scoring::{explain, score, score_street, ScoreBreakdown};
pub use search::{search, search_scored, search_with_config};
pub use types::{Query, Record, RecordField, ScoredRecord, SearchResponse, PROVENANCE};
pub use util::normalize;
