// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how records get their numbers.
//!
//! Two scorers, never both for the same request: [`relevance`] scores a
//! free-text query against four record fields, [`street`] scores a street
//! name against the complex name and neighborhood. Both feed [`ranking`].

pub mod ranking;
pub mod relevance;
pub mod street;

pub use ranking::{compare_scored, rank};
pub use relevance::{explain, score, FieldRule, FieldScore, RelevanceQuery, ScoreBreakdown};
pub use street::{score_street, StreetQuery};
