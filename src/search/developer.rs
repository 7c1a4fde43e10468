// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Developer filter.
//!
//! Developer names come with and without a corporate suffix ("אלקטרה" vs
//! "אלקטרה בניה בע\"מ"), and the user usually types the short brand. A record
//! passes when any of these holds against its normalized `developerName`:
//!
//! 1. whole-name containment, either direction
//! 2. some query token and some name token contain one another
//! 3. some query token is within two edits of some name token (both 3+ chars)
//!
//! Records with no developer never pass.

use crate::types::Record;
use crate::util::normalize;
use crate::util::tokens::{contains_either, fuzzy_token_match, tokens};

/// A developer query normalized and tokenized once.
#[derive(Debug, Clone)]
pub struct DeveloperMatcher {
    normalized: String,
    tokens: Vec<String>,
}

impl DeveloperMatcher {
    pub fn new(developer: &str) -> Self {
        let normalized = normalize(developer);
        let tokens = tokens(&normalized).into_iter().map(String::from).collect();
        DeveloperMatcher { normalized, tokens }
    }

    pub fn query(&self) -> &str {
        &self.normalized
    }

    pub fn matches(&self, record: &Record) -> bool {
        record
            .developer_name
            .as_deref()
            .is_some_and(|name| self.matches_name(name))
    }

    /// Match against a raw developer name.
    pub fn matches_name(&self, name: &str) -> bool {
        let name = normalize(name);
        if name.is_empty() {
            return false;
        }
        if contains_either(&name, &self.normalized) {
            return true;
        }

        let name_tokens = tokens(&name);
        self.tokens.iter().any(|q| {
            name_tokens
                .iter()
                .any(|n| contains_either(q, n) || fuzzy_token_match(q, n))
        })
    }
}

/// One-shot form of [`DeveloperMatcher::matches`].
pub fn developer_match(record: &Record, developer: &str) -> bool {
    DeveloperMatcher::new(developer).matches(record)
}
