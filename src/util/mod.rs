// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by every matcher.
//!
//! Text normalization for point-insensitive Hebrew matching, plus the token
//! predicates (containment, bounded typo match) that the scorers and filters
//! build on.

pub mod normalize;
pub mod tokens;

pub use normalize::normalize;
