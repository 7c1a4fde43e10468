// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the filters and scorers meet the dataset.
//!
//! [`pipeline`] runs the stages in their fixed order; [`developer`] is the
//! one filter that lives nowhere else.

pub mod developer;
pub mod pipeline;

pub use developer::{developer_match, DeveloperMatcher};
pub use pipeline::{search, search_scored, search_with_config};
