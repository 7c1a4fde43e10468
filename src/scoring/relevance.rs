// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Free-text relevance: how a record earns points against `q`.
//!
//! Four text fields are scored in fixed order (complex name, neighborhood,
//! complex number, developer) and the field scores are summed. Within a
//! field the rules form an explicit ordered list:
//!
//! | # | Rule                   | Points        | Evaluated                    |
//! |---|------------------------|---------------|------------------------------|
//! | 1 | field == query         | 100           | first                        |
//! | 2 | field contains query   | 60            | only if 1 did not fire       |
//! | 3 | query contains field   | 40            | only if 1–2 did not fire     |
//! | 4 | word overlap           | 15 per token  | only if 1–3 did not fire     |
//! | 5 | fuzzy token pairs      | 10 per pair   | always                       |
//!
//! Rule 4 counts each *distinct* query token once, however many field tokens
//! it overlaps. Rule 5 counts every qualifying (query token, field token)
//! pair, and it runs even when rule 4 already credited the same pair. That
//! double credit is how the observed rankings come out, so it stays.
//!
//! [`ScoreBreakdown`] records which rule fired where, so a ranking can be
//! explained after the fact.

use serde::Serialize;

use crate::types::{Record, RecordField};
use crate::util::normalize;
use crate::util::tokens::{contains_either, fuzzy_pair_count, tokens};

/// Field equals the query.
pub const EXACT_FIELD_SCORE: u32 = 100;

/// Field contains the query.
pub const FIELD_CONTAINS_QUERY_SCORE: u32 = 60;

/// Query contains the field.
pub const QUERY_CONTAINS_FIELD_SCORE: u32 = 40;

/// Per distinct query token overlapping some field token.
pub const WORD_OVERLAP_SCORE: u32 = 15;

/// Per (query token, field token) pair within two edits.
pub const FUZZY_PAIR_SCORE: u32 = 10;

/// The mutually exclusive whole-field rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldRule {
    Exact,
    FieldContainsQuery,
    QueryContainsField,
}

impl FieldRule {
    /// Evaluation order. The first rule that applies wins.
    pub const ORDERED: [FieldRule; 3] = [
        FieldRule::Exact,
        FieldRule::FieldContainsQuery,
        FieldRule::QueryContainsField,
    ];

    /// Both arguments normalized; `field` non-empty.
    pub fn applies(self, field: &str, query: &str) -> bool {
        match self {
            FieldRule::Exact => field == query,
            FieldRule::FieldContainsQuery => !query.is_empty() && field.contains(query),
            FieldRule::QueryContainsField => query.contains(field),
        }
    }

    pub fn score(self) -> u32 {
        match self {
            FieldRule::Exact => EXACT_FIELD_SCORE,
            FieldRule::FieldContainsQuery => FIELD_CONTAINS_QUERY_SCORE,
            FieldRule::QueryContainsField => QUERY_CONTAINS_FIELD_SCORE,
        }
    }
}

/// How one field contributed to a record's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldScore {
    pub field: RecordField,
    /// Whole-field rule that fired, if any.
    pub rule: Option<FieldRule>,
    /// Distinct query tokens credited by word overlap.
    pub overlap_tokens: u32,
    /// Token pairs credited by the fuzzy rule.
    pub fuzzy_pairs: u32,
}

impl FieldScore {
    fn empty(field: RecordField) -> Self {
        FieldScore {
            field,
            rule: None,
            overlap_tokens: 0,
            fuzzy_pairs: 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.rule.map_or(0, FieldRule::score)
            + self.overlap_tokens * WORD_OVERLAP_SCORE
            + self.fuzzy_pairs * FUZZY_PAIR_SCORE
    }
}

/// Per-field account of a relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub fields: Vec<FieldScore>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.fields.iter().map(FieldScore::total).sum()
    }

    /// Fields that contributed anything.
    pub fn contributing(&self) -> impl Iterator<Item = &FieldScore> {
        self.fields.iter().filter(|f| f.total() > 0)
    }
}

/// A free-text query normalized and tokenized once, scored against many records.
#[derive(Debug, Clone)]
pub struct RelevanceQuery {
    normalized: String,
    /// All tokens, duplicates kept: fuzzy pairs count per occurrence.
    tokens: Vec<String>,
    /// Distinct tokens in first-seen order: overlap credits each once.
    distinct_tokens: Vec<String>,
}

impl RelevanceQuery {
    pub fn new(query: &str) -> Self {
        let normalized = normalize(query);
        let tokens: Vec<String> = tokens(&normalized).into_iter().map(String::from).collect();
        let mut distinct_tokens: Vec<String> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            if !distinct_tokens.contains(token) {
                distinct_tokens.push(token.clone());
            }
        }
        RelevanceQuery {
            normalized,
            tokens,
            distinct_tokens,
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn score(&self, record: &Record) -> u32 {
        record
            .scored_fields()
            .iter()
            .map(|(field, text)| self.score_field(*field, text).total())
            .sum()
    }

    pub fn explain(&self, record: &Record) -> ScoreBreakdown {
        ScoreBreakdown {
            fields: record
                .scored_fields()
                .iter()
                .map(|(field, text)| self.score_field(*field, text))
                .collect(),
        }
    }

    fn score_field(&self, field: RecordField, text: &str) -> FieldScore {
        let mut result = FieldScore::empty(field);
        let value = normalize(text);
        if value.is_empty() {
            return result;
        }

        result.rule = FieldRule::ORDERED
            .into_iter()
            .find(|rule| rule.applies(&value, &self.normalized));

        let field_tokens = tokens(&value);
        if result.rule.is_none() {
            result.overlap_tokens = self
                .distinct_tokens
                .iter()
                .filter(|q| field_tokens.iter().any(|f| contains_either(q, f)))
                .count() as u32;
        }
        result.fuzzy_pairs = fuzzy_pair_count(&self.tokens, &field_tokens) as u32;

        result
    }
}

/// Relevance of `record` to the free-text query `query`.
///
/// Zero means "not a match"; the pipeline drops those.
pub fn score(record: &Record, query: &str) -> u32 {
    RelevanceQuery::new(query).score(record)
}

/// [`score`], itemized per field.
pub fn explain(record: &Record, query: &str) -> ScoreBreakdown {
    RelevanceQuery::new(query).explain(record)
}
