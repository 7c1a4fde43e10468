// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! A full-table Levenshtein for when the exact distance matters, and a
//! bounded variant with early exits for the "within two edits" checks that
//! run once per token pair per record.

mod levenshtein;

pub use levenshtein::*;
