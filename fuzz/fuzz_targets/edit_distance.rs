// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded check decides every typo rule in the engine, so it must agree
//! with the full-table distance for every input and threshold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mitcham::{levenshtein, levenshtein_within};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

/// Cap by chars, not bytes, so Hebrew input is never cut mid-character.
fn capped(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: DistanceInput| {
    let a = capped(&input.a);
    let b = capped(&input.b);
    let c = capped(&input.c);
    let max = usize::from(input.max % 6);

    let ab = levenshtein(&a, &b);

    // INVARIANT 1: identity and symmetry
    assert_eq!(levenshtein(&a, &a), 0);
    assert_eq!(ab, levenshtein(&b, &a), "asymmetric for '{}' / '{}'", a, b);

    // INVARIANT 2: triangle inequality
    assert!(
        levenshtein(&a, &c) <= ab + levenshtein(&b, &c),
        "triangle violated for '{}', '{}', '{}'",
        a, b, c
    );

    // INVARIANT 3: length difference is a lower bound
    let len_diff = a.chars().count().abs_diff(b.chars().count());
    assert!(len_diff <= ab);

    // INVARIANT 4: bounded check agrees with the full table
    assert_eq!(
        levenshtein_within(&a, &b, max),
        ab <= max,
        "within({}) disagrees with distance {} for '{}' / '{}'",
        max, ab, a, b
    );
});
