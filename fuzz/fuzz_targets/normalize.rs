// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Hebrew normalizer.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mitcham::normalize;
use mitcham::util::normalize::{is_hebrew_point, is_quote_mark};

fuzz_target!(|text: String| {
    let once = normalize(&text);

    // INVARIANT 1: idempotent
    assert_eq!(normalize(&once), once, "not idempotent for {:?}", text);

    // INVARIANT 2: no points, no quote marks
    assert!(!once.chars().any(is_hebrew_point), "point left in {:?}", once);
    assert!(!once.chars().any(is_quote_mark), "quote left in {:?}", once);

    // INVARIANT 3: trimmed, single spaces only
    assert_eq!(once.trim(), once);
    assert!(!once.contains("  "));
    assert!(!once.chars().any(|c| c.is_whitespace() && c != ' '));
});
