// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! [`levenshtein`] is the textbook full-table DP and the reference answer.
//! [`levenshtein_within`] answers "is the distance at most `max`?" with two
//! early exits, and is what the matching rules call: every fuzzy rule in the
//! engine only cares about `≤ 2`.
//!
//! Both count `char`s, not bytes. A Hebrew letter is two bytes in UTF-8, so a
//! byte-level distance would double every edit.
//!
//! Callers normalize first; nothing here strips points or quotes.

/// Levenshtein distance between `a` and `b`.
///
/// Table of `(|a|+1) × (|b|+1)` cells; row 0 and column 0 hold their index.
/// Equal characters copy the diagonal, anything else costs
/// `1 + min(left, up, diagonal)`. Token lengths in this engine are short, so
/// the quadratic table is fine.
///
/// ```
/// use mitcham::levenshtein;
///
/// assert_eq!(levenshtein("רעננה", "רעננע"), 1);
/// assert_eq!(levenshtein("", "חיפה"), 4);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let cols = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * cols];
    for i in 0..=a.len() {
        table[i * cols] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let diagonal = table[(i - 1) * cols + (j - 1)];
            table[i * cols + j] = if a[i - 1] == b[j - 1] {
                diagonal
            } else {
                let up = table[(i - 1) * cols + j];
                let left = table[i * cols + (j - 1)];
                1 + up.min(left).min(diagonal)
            };
        }
    }

    table[a.len() * cols + b.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Same answer as `levenshtein(a, b) <= max`, computed with a single rolling
/// row and two early exits:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum value in a DP row exceeds `max`, abandon the DP
///
/// Both exits are sound: length difference is a lower bound on the distance,
/// and row minima never decrease from one row to the next.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
