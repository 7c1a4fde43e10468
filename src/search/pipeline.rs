// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: city filter → scoring → developer filter → truncate.
//!
//! The working set is a list of dataset positions, starting with every
//! record. Each stage runs only when its query field is present, and stages
//! always run in this order:
//!
//! 1. **city**: keep records whose city matches (order preserved)
//! 2. **q**: relevance-score, drop zeros, stable sort by descending score
//! 3. **street**: only when there is no `q`; same treatment with the street
//!    scorer
//! 4. **developer**: keep records whose developer matches (order preserved)
//!
//! Scores never leak into the response; they only decide order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::alias::CityMatcher;
use crate::config::SearchConfig;
use crate::contracts::{
    check_positions_in_bounds, check_ranked, check_stage_monotonic, check_truncation,
};
use crate::dataset::Dataset;
use crate::scoring::ranking::rank;
use crate::scoring::relevance::RelevanceQuery;
use crate::scoring::street::StreetQuery;
use crate::search::developer::DeveloperMatcher;
use crate::types::{Query, Record, ScoredRecord, SearchResponse, PROVENANCE};

/// Run `query` against `dataset` with the default configuration.
///
/// ```
/// use mitcham::{search, Dataset, Query, Record};
///
/// let dataset = Dataset::new(vec![
///     Record::new("תל אביב יפו", "מתחם הרצל"),
///     Record::new("חיפה", "רמות רמז"),
/// ])
/// .unwrap();
///
/// let response = search(&dataset, &Query::new().with_city("תל אביב"));
/// assert_eq!(response.total, 1);
/// assert_eq!(response.records[0].complex_name, "מתחם הרצל");
/// ```
pub fn search(dataset: &Dataset, query: &Query) -> SearchResponse {
    search_with_config(dataset, query, &SearchConfig::default())
}

pub fn search_with_config(
    dataset: &Dataset,
    query: &Query,
    config: &SearchConfig,
) -> SearchResponse {
    let ranked = search_scored(dataset, query, config);
    let total = ranked.len();
    let records: Vec<Record> = ranked
        .iter()
        .take(config.limit)
        .filter_map(|s| dataset.get(s.index).cloned())
        .collect();

    check_truncation(records.len(), total, config.limit);
    debug!(total, returned = records.len(), "search complete");

    SearchResponse {
        records,
        total,
        source: PROVENANCE.to_string(),
    }
}

/// Every match in final order, before truncation.
///
/// `score` is the relevance or street score that ordered the list, or 0 when
/// the query had neither `q` nor `street`.
pub fn search_scored(
    dataset: &Dataset,
    query: &Query,
    config: &SearchConfig,
) -> Vec<ScoredRecord> {
    let records = dataset.records();
    let mut working: Vec<ScoredRecord> = (0..records.len())
        .map(|index| ScoredRecord { index, score: 0 })
        .collect();

    if let Some(city) = query.city.as_deref() {
        let matcher = CityMatcher::new(city);
        let before = working.len();
        working = filter_stage(records, working, config, |r| matcher.matches(&r.city));
        check_stage_monotonic("city", before, working.len());
        debug!(
            city = matcher.query(),
            candidates = matcher.candidates().len(),
            before,
            after = working.len(),
            "city filter"
        );
    }

    if let Some(q) = query.q.as_deref() {
        let relevance = RelevanceQuery::new(q);
        let before = working.len();
        working = score_stage(records, working, config, |r| relevance.score(r));
        check_stage_monotonic("q", before, working.len());
        debug!(q = relevance.normalized(), before, after = working.len(), "relevance scoring");
    } else if let Some(street) = query.street.as_deref() {
        let street = StreetQuery::new(street);
        let before = working.len();
        working = score_stage(records, working, config, |r| street.score(r));
        check_stage_monotonic("street", before, working.len());
        debug!(street = street.normalized(), before, after = working.len(), "street scoring");
    }

    if let Some(developer) = query.developer.as_deref() {
        let matcher = DeveloperMatcher::new(developer);
        let before = working.len();
        working = filter_stage(records, working, config, |r| matcher.matches(r));
        check_stage_monotonic("developer", before, working.len());
        debug!(
            developer = matcher.query(),
            before,
            after = working.len(),
            "developer filter"
        );
    }

    working
}

/// Keep the entries whose record passes `keep`, in their current order.
fn filter_stage<F>(
    records: &[Record],
    working: Vec<ScoredRecord>,
    config: &SearchConfig,
    keep: F,
) -> Vec<ScoredRecord>
where
    F: Fn(&Record) -> bool + Sync,
{
    let passes = |s: &ScoredRecord| records.get(s.index).is_some_and(&keep);

    #[cfg(feature = "parallel")]
    if working.len() > config.parallel_threshold {
        return working.into_par_iter().filter(passes).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    working.into_iter().filter(passes).collect()
}

/// Replace each entry's score with `score_fn`, then drop zeros and rank.
fn score_stage<F>(
    records: &[Record],
    working: Vec<ScoredRecord>,
    config: &SearchConfig,
    score_fn: F,
) -> Vec<ScoredRecord>
where
    F: Fn(&Record) -> u32 + Sync,
{
    let rescore = |s: ScoredRecord| ScoredRecord {
        index: s.index,
        score: records.get(s.index).map_or(0, &score_fn),
    };

    let positions: Vec<usize> = working.iter().map(|s| s.index).collect();
    check_positions_in_bounds(&positions, records.len());

    // Indexed collect keeps input order, so the stable sort in `rank` sees
    // the same tie order on both paths.
    #[cfg(feature = "parallel")]
    let scored: Vec<ScoredRecord> = if working.len() > config.parallel_threshold {
        working.into_par_iter().map(rescore).collect()
    } else {
        working.into_iter().map(rescore).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let scored: Vec<ScoredRecord> = {
        let _ = config;
        working.into_iter().map(rescore).collect()
    };

    let ranked = rank(scored);
    check_ranked(&ranked);
    ranked
}
