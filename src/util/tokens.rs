// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whitespace tokens and the containment/fuzzy predicates every scorer shares.
//!
//! Two length thresholds show up across the engine: a token must be longer
//! than one character to take part in word overlap, and at least three
//! characters long to take part in typo matching. Two-letter Hebrew words
//! ("גן", "הר") are within two edits of almost everything, so they never get
//! fuzzy credit.

use crate::fuzzy::levenshtein_within;

/// Tokens shorter than this (in chars) are ignored by word overlap.
pub const MIN_OVERLAP_TOKEN_CHARS: usize = 2;

/// Tokens shorter than this (in chars) are ignored by edit-distance rules.
pub const MIN_FUZZY_TOKEN_CHARS: usize = 3;

/// Maximum edit distance accepted by every typo-tolerant rule.
pub const MAX_FUZZY_DISTANCE: usize = 2;

/// Split normalized text into whitespace tokens longer than one character.
///
/// Duplicates are kept; callers that count distinct tokens dedupe themselves.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|t| char_len(t) >= MIN_OVERLAP_TOKEN_CHARS)
        .collect()
}

#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `a` contains `b` or `b` contains `a`. Empty strings never match.
#[inline]
pub fn contains_either(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// Both tokens long enough for typo tolerance and within two edits.
#[inline]
pub fn fuzzy_token_match(a: &str, b: &str) -> bool {
    char_len(a) >= MIN_FUZZY_TOKEN_CHARS
        && char_len(b) >= MIN_FUZZY_TOKEN_CHARS
        && levenshtein_within(a, b, MAX_FUZZY_DISTANCE)
}

/// Number of `(a, b)` pairs across the two token lists that [`fuzzy_token_match`].
pub fn fuzzy_pair_count<A: AsRef<str>, B: AsRef<str>>(a_tokens: &[A], b_tokens: &[B]) -> usize {
    a_tokens
        .iter()
        .map(|a| {
            b_tokens
                .iter()
                .filter(|b| fuzzy_token_match(a.as_ref(), b.as_ref()))
                .count()
        })
        .sum()
}
