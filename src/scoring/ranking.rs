// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get sorted.
//!
//! Ranking is a plain descending sort on the integer score. Ties keep their
//! dataset order, so the sort must be stable and the comparator must never
//! look at anything but the score. Zero-score records are not results at all
//! and are dropped before sorting.

use crate::types::ScoredRecord;
use std::cmp::Ordering;

/// Compare two scored records for ranking. Higher score sorts first.
///
/// Equal scores compare `Equal` so a stable sort keeps input order.
///
/// ```
/// use mitcham::scoring::ranking::compare_scored;
/// use mitcham::ScoredRecord;
/// use std::cmp::Ordering;
///
/// let high = ScoredRecord { index: 7, score: 100 };
/// let low = ScoredRecord { index: 0, score: 15 };
/// assert_eq!(compare_scored(&high, &low), Ordering::Less);
/// ```
#[inline]
pub fn compare_scored(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    b.score.cmp(&a.score)
}

/// Drop zero scores and stable-sort the rest by descending score.
pub fn rank(mut scored: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    scored.retain(|s| s.score > 0);
    // `sort_by` is stable; `sort_unstable_by` would reorder ties.
    scored.sort_by(compare_scored);
    scored
}
