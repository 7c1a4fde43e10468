//! Pipeline invariants over generated datasets and queries.

use mitcham::search::developer_match;
use mitcham::{city_match, search_scored, search_with_config, Dataset, Query, Record, SearchConfig};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn city_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "תל אביב יפו",
        "רעננה",
        "חיפה",
        "פתח תקוה",
        "קרית אונו",
        "בת ים",
    ])
}

fn words(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec("[א-ת]{1,6}", 1..=max).prop_map(|w| w.join(" "))
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        city_strategy(),
        words(3),
        prop::option::of(words(2)),
        prop::option::of("[0-9]{1,4}"),
        prop::option::of(words(3)),
    )
        .prop_map(|(city, name, neighborhood, number, developer)| {
            let mut record = Record::new(city, name);
            record.neighborhood = neighborhood;
            record.complex_number = number;
            record.developer_name = developer;
            record
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record_strategy(), 0..60)
        .prop_map(|records| Dataset::new(records).expect("generated records are valid"))
}

fn query_strategy() -> impl Strategy<Value = Query> {
    (
        prop::option::of(prop::sample::select(vec!["ת״א", "רעננע", "חיפה", "פתח תקווה", "קסם"])),
        prop::option::of(words(2)),
        prop::option::of(words(2)),
        prop::option::of(words(2)),
    )
        .prop_map(|(city, q, developer, street)| {
            Query::from_parts(city.map(String::from), q, developer, street)
        })
}

fn positions(scored: &[mitcham::ScoredRecord]) -> Vec<usize> {
    scored.iter().map(|s| s.index).collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Adding a filter never adds records.
    #[test]
    fn prop_filters_are_monotonic(dataset in dataset_strategy(), query in query_strategy()) {
        let config = SearchConfig::default();
        let full = search_scored(&dataset, &query, &config);

        let mut without_developer = query.clone();
        without_developer.developer = None;
        let wider = positions(&search_scored(&dataset, &without_developer, &config));

        for index in positions(&full) {
            prop_assert!(wider.contains(&index));
        }
        prop_assert!(full.len() <= wider.len());
        prop_assert!(wider.len() <= dataset.len());
    }

    /// Every result satisfies every filter that was present.
    #[test]
    fn prop_results_satisfy_filters(dataset in dataset_strategy(), query in query_strategy()) {
        for s in search_scored(&dataset, &query, &SearchConfig::default()) {
            let record = &dataset[s.index];
            if let Some(city) = &query.city {
                prop_assert!(city_match(&record.city, city));
            }
            if let Some(developer) = &query.developer {
                prop_assert!(developer_match(record, developer));
            }
            if query.q.is_some() || query.street.is_some() {
                prop_assert!(s.score > 0);
            }
        }
    }

    /// Scores are non-increasing and ties keep dataset order.
    #[test]
    fn prop_ranking_is_stable_descending(dataset in dataset_strategy(), query in query_strategy()) {
        let scored = search_scored(&dataset, &query, &SearchConfig::default());
        for pair in scored.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }

    /// `records.len() == min(limit, total)`.
    #[test]
    fn prop_truncation_law(
        dataset in dataset_strategy(),
        query in query_strategy(),
        limit in 0usize..40,
    ) {
        let config = SearchConfig::default().with_limit(limit);
        let response = search_with_config(&dataset, &query, &config);
        prop_assert_eq!(response.records.len(), response.total.min(limit));
    }

    /// Same inputs, same output, on either execution path.
    #[test]
    fn prop_deterministic_across_paths(dataset in dataset_strategy(), query in query_strategy()) {
        let parallel = SearchConfig::default().with_parallel_threshold(0);
        let sequential = SearchConfig::default().sequential();
        prop_assert_eq!(
            search_with_config(&dataset, &query, &parallel),
            search_with_config(&dataset, &query, &sequential)
        );
    }
}
