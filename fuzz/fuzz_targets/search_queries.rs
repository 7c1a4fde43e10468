// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query pipeline.
//!
//! Arbitrary queries against the fixture dataset must never panic and must
//! keep the ordering and truncation guarantees.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mitcham::testing::fixture_dataset;
use mitcham::{search_scored, search_with_config, Query, SearchConfig};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    city: Option<String>,
    q: Option<String>,
    developer: Option<String>,
    street: Option<String>,
    limit: u8,
}

fuzz_target!(|input: QueryInput| {
    let dataset = fixture_dataset();
    let query = Query::from_parts(input.city, input.q, input.developer, input.street);
    let config = SearchConfig::default().with_limit(usize::from(input.limit));

    let response = search_with_config(&dataset, &query, &config);

    // INVARIANT 1: truncation law
    assert_eq!(response.records.len(), response.total.min(config.limit));
    assert!(response.total <= dataset.len());

    // INVARIANT 2: stable descending order
    let scored = search_scored(&dataset, &query, &config);
    for pair in scored.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].index < pair[1].index);
        }
    }
});
