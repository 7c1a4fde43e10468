// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the query pipeline.
//!
//! Debug-mode assertions over the properties every search must keep. They
//! compile to nothing in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_ranked`               | scores descending, no zeros, ties in input order |
//! | `check_stage_monotonic`      | a stage never grows the working set             |
//! | `check_positions_in_bounds`  | every working-set position indexes the dataset  |
//! | `check_truncation`           | `records.len() == min(limit, total)`            |
//!
//! # Usage
//!
//! ```ignore
//! use mitcham::contracts::*;
//!
//! // In debug builds, this panics if the ranking is out of order
//! check_ranked(&ranked);
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Relevance rule weights are strictly ordered: an exact match outscores a
/// containment match, which outscores the reverse containment, which
/// outscores a single overlapping word.
const _: () = {
    use crate::scoring::relevance::*;
    assert!(EXACT_FIELD_SCORE > FIELD_CONTAINS_QUERY_SCORE);
    assert!(FIELD_CONTAINS_QUERY_SCORE > QUERY_CONTAINS_FIELD_SCORE);
    assert!(QUERY_CONTAINS_FIELD_SCORE > WORD_OVERLAP_SCORE);
    assert!(WORD_OVERLAP_SCORE > FUZZY_PAIR_SCORE);
};

/// Street evidence on the complex name always outweighs the same evidence on
/// the neighborhood.
const _: () = {
    use crate::scoring::street::*;
    assert!(NAME_CONTAINS_STREET_SCORE > NEIGHBORHOOD_CONTAINS_STREET_SCORE);
    assert!(NAME_TOKEN_SCORE > NEIGHBORHOOD_TOKEN_SCORE);
    assert!(NAME_FUZZY_PAIR_SCORE > NEIGHBORHOOD_FUZZY_PAIR_SCORE);
};

use crate::types::ScoredRecord;

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranked list is sorted by descending score with stable ties.
///
/// # Panics (debug builds only)
/// Panics on a zero score, a score increase, or equal scores whose dataset
/// positions are out of order.
#[inline]
pub fn check_ranked(ranked: &[ScoredRecord]) {
    for (i, entry) in ranked.iter().enumerate() {
        debug_assert!(
            entry.score > 0,
            "Contract violation: ranked[{}] (index {}) has zero score",
            i,
            entry.index
        );
    }

    for i in 1..ranked.len() {
        let prev = &ranked[i - 1];
        let curr = &ranked[i];
        debug_assert!(
            prev.score >= curr.score,
            "Contract violation: ranked[{}].score {} < ranked[{}].score {}",
            i - 1,
            prev.score,
            i,
            curr.score
        );
        debug_assert!(
            prev.score != curr.score || prev.index < curr.index,
            "Contract violation: tie at score {} out of input order (index {} before {})",
            curr.score,
            prev.index,
            curr.index
        );
    }
}

// ============================================================================
// PIPELINE CONTRACTS
// ============================================================================

/// Check that a stage kept at most as many records as it was given.
#[inline]
pub fn check_stage_monotonic(stage: &str, before: usize, after: usize) {
    debug_assert!(
        after <= before,
        "Contract violation: stage '{}' grew the working set from {} to {}",
        stage,
        before,
        after
    );
}

/// Check that every position refers to a record in the dataset.
#[inline]
pub fn check_positions_in_bounds(positions: &[usize], dataset_len: usize) {
    for (i, &position) in positions.iter().enumerate() {
        debug_assert!(
            position < dataset_len,
            "Contract violation: working_set[{}] = {} >= dataset.len() {}",
            i,
            position,
            dataset_len
        );
    }
}

/// Check the truncation law on a finished response.
#[inline]
pub fn check_truncation(returned: usize, total: usize, limit: usize) {
    debug_assert_eq!(
        returned,
        total.min(limit),
        "Contract violation: returned {} records for total {} and limit {}",
        returned,
        total,
        limit
    );
}
