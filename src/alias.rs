// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! City names and their other spellings.
//!
//! The declarations spell cities the way each municipality filed them:
//! "תל אביב יפו" next to "ת\"א", "פתח תקווה" next to "פתח תקוה". A user types
//! whichever one they know. [`resolve_city`] expands a query city into every
//! spelling in its alias group, and [`CityMatcher`] checks record cities
//! against that set, with a small typo allowance on top.
//!
//! Resolution is bidirectional: querying an alias yields the canonical name
//! and all sibling aliases, and querying the canonical name yields every alias.

use std::collections::BTreeSet;

use crate::fuzzy::levenshtein_within;
use crate::util::normalize;
use crate::util::tokens::{char_len, contains_either, MAX_FUZZY_DISTANCE, MIN_FUZZY_TOKEN_CHARS};

/// Canonical city → alternate spellings.
///
/// Entries are raw text; everything is normalized at lookup, so quote and
/// gershayim variants of the same abbreviation need only one entry.
pub const CITY_ALIASES: &[(&str, &[&str])] = &[
    ("תל אביב יפו", &["תל אביב", "תל-אביב", "ת\"א"]),
    ("ירושלים", &["ירושליים", "י-ם"]),
    ("חיפה", &["חיפא"]),
    ("באר שבע", &["ב\"ש", "באר-שבע"]),
    ("ראשון לציון", &["ראשל\"צ", "ראשון"]),
    ("פתח תקווה", &["פתח תקוה", "פ\"ת", "פתח-תקווה"]),
    ("רמת גן", &["ר\"ג", "רמת-גן"]),
    ("בני ברק", &["ב\"ב", "בני-ברק"]),
    ("הרצליה", &["הרצלייה"]),
    ("כפר סבא", &["כ\"ס", "כפר-סבא"]),
    ("רעננה", &["רעננא"]),
    ("הוד השרון", &["הוד-השרון"]),
    ("נתניה", &["נתנייה"]),
    ("בת ים", &["בת-ים"]),
    ("גבעתיים", &["גבעתים"]),
    ("קריית אונו", &["קרית אונו"]),
    ("קריית גת", &["קרית גת"]),
    ("קריית ים", &["קרית ים"]),
    ("קריית ביאליק", &["קרית ביאליק"]),
    ("מודיעין מכבים רעות", &["מודיעין", "מודיעין-מכבים-רעות"]),
];

/// Every normalized spelling of `input`'s city.
///
/// Always contains `normalize(input)` itself, whether or not the table knows
/// the city.
///
/// ```
/// use mitcham::resolve_city;
///
/// let candidates = resolve_city("ת״א");
/// assert!(candidates.contains("תל אביב יפו"));
/// assert!(candidates.contains("תא"));
/// ```
pub fn resolve_city(input: &str) -> BTreeSet<String> {
    resolve_city_in(input, CITY_ALIASES)
}

/// [`resolve_city`] against a caller-supplied table.
pub fn resolve_city_in(input: &str, table: &[(&str, &[&str])]) -> BTreeSet<String> {
    let normalized = normalize(input);
    let mut candidates = BTreeSet::new();

    for (canonical, aliases) in table {
        let group: Vec<String> = std::iter::once(*canonical)
            .chain(aliases.iter().copied())
            .map(normalize)
            .collect();
        if group.iter().any(|name| *name == normalized) {
            candidates.extend(group);
        }
    }

    candidates.insert(normalized);
    candidates
}

/// Does `record_city` match `query_city`?
///
/// One-shot form of [`CityMatcher`]. When filtering many records, build the
/// matcher once instead.
pub fn city_match(record_city: &str, query_city: &str) -> bool {
    CityMatcher::new(query_city).matches(record_city)
}

/// A query city resolved once, reused across every record.
#[derive(Debug, Clone)]
pub struct CityMatcher {
    normalized: String,
    candidates: BTreeSet<String>,
}

impl CityMatcher {
    pub fn new(query_city: &str) -> Self {
        CityMatcher {
            normalized: normalize(query_city),
            candidates: resolve_city(query_city),
        }
    }

    /// The normalized query city.
    pub fn query(&self) -> &str {
        &self.normalized
    }

    pub fn candidates(&self) -> &BTreeSet<String> {
        &self.candidates
    }

    /// Match rules, in order:
    /// 1. record city equals, contains, or is contained by any candidate
    /// 2. typo fallback: query city of 3+ chars within two edits of the record city
    pub fn matches(&self, record_city: &str) -> bool {
        let city = normalize(record_city);
        if city.is_empty() {
            return false;
        }

        if self
            .candidates
            .iter()
            .any(|candidate| *candidate == city || contains_either(&city, candidate))
        {
            return true;
        }

        char_len(&self.normalized) >= MIN_FUZZY_TOKEN_CHARS
            && levenshtein_within(&self.normalized, &city, MAX_FUZZY_DISTANCE)
    }
}
