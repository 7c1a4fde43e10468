// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Street scoring: does this complex sit on the street the user named?
//!
//! There is no geometry in the dataset, so this is a name heuristic. Complex
//! names very often embed the street ("מתחם הרצל 12-20"), neighborhoods less
//! often, so complex-name evidence is weighted above neighborhood evidence at
//! every level:
//!
//! | Evidence                                   | Complex name | Neighborhood |
//! |--------------------------------------------|--------------|--------------|
//! | whole street ⊆ field or field ⊆ street     | 50           | 40           |
//! | per street token contained in field        | 15           | 12           |
//! | per (field token, street token) ≤ 2 edits  | 8            | 6            |
//!
//! Only used when the request carries no free-text `q`.

use crate::types::Record;
use crate::util::normalize;
use crate::util::tokens::{contains_either, fuzzy_pair_count, tokens};

pub const NAME_CONTAINS_STREET_SCORE: u32 = 50;
pub const NEIGHBORHOOD_CONTAINS_STREET_SCORE: u32 = 40;
pub const NAME_TOKEN_SCORE: u32 = 15;
pub const NEIGHBORHOOD_TOKEN_SCORE: u32 = 12;
pub const NAME_FUZZY_PAIR_SCORE: u32 = 8;
pub const NEIGHBORHOOD_FUZZY_PAIR_SCORE: u32 = 6;

/// Weights for one scored field.
struct FieldWeights {
    whole: u32,
    token: u32,
    fuzzy_pair: u32,
}

const NAME_WEIGHTS: FieldWeights = FieldWeights {
    whole: NAME_CONTAINS_STREET_SCORE,
    token: NAME_TOKEN_SCORE,
    fuzzy_pair: NAME_FUZZY_PAIR_SCORE,
};

const NEIGHBORHOOD_WEIGHTS: FieldWeights = FieldWeights {
    whole: NEIGHBORHOOD_CONTAINS_STREET_SCORE,
    token: NEIGHBORHOOD_TOKEN_SCORE,
    fuzzy_pair: NEIGHBORHOOD_FUZZY_PAIR_SCORE,
};

/// A street normalized and tokenized once.
#[derive(Debug, Clone)]
pub struct StreetQuery {
    normalized: String,
    tokens: Vec<String>,
}

impl StreetQuery {
    pub fn new(street: &str) -> Self {
        let normalized = normalize(street);
        let tokens = tokens(&normalized).into_iter().map(String::from).collect();
        StreetQuery { normalized, tokens }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn score(&self, record: &Record) -> u32 {
        let name = self.score_field(&record.complex_name, &NAME_WEIGHTS);
        let neighborhood = record
            .neighborhood
            .as_deref()
            .map_or(0, |n| self.score_field(n, &NEIGHBORHOOD_WEIGHTS));
        name + neighborhood
    }

    fn score_field(&self, text: &str, weights: &FieldWeights) -> u32 {
        let value = normalize(text);
        if value.is_empty() {
            return 0;
        }

        let mut score = 0;
        if contains_either(&value, &self.normalized) {
            score += weights.whole;
        }

        let contained = self
            .tokens
            .iter()
            .filter(|t| value.contains(t.as_str()))
            .count() as u32;
        score += contained * weights.token;

        let pairs = fuzzy_pair_count(&tokens(&value), &self.tokens) as u32;
        score + pairs * weights.fuzzy_pair
    }
}

/// Street relevance of `record`. Zero means "not on this street".
pub fn score_street(record: &Record, street: &str) -> u32 {
    StreetQuery::new(street).score(record)
}
