//! Stages run city → q/street → developer, and truncation comes last.

use super::common::*;
use mitcham::{search, search_with_config, Query, SearchConfig};

#[test]
fn developer_filters_the_ranked_list() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_q("גן").with_developer("אלקטרה"));

    // "גן עץ" also contains "גן" but has no developer
    assert_eq!(positions(&dataset, &response), vec![GAN_HADAR]);
}

#[test]
fn developer_keeps_relevance_order() {
    let dataset = fixture_dataset();
    // "אלקטרה מגורים" is two edits from "אזורים", so BIALIK (80) stays ahead of WEIZMANN (70)
    let response = search(&dataset, &Query::new().with_q("מתחם").with_developer("אזורים"));
    assert_eq!(positions(&dataset, &response), vec![BIALIK, WEIZMANN]);

    let response = search(&dataset, &Query::new().with_q("מתחם").with_developer("אלקטרה"));
    assert_eq!(positions(&dataset, &response), vec![BIALIK, HERZL_TLV]);
}

#[test]
fn city_and_developer_intersect() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_city("ת״א").with_developer("שיכון"));
    assert_eq!(positions(&dataset, &response), vec![YAD_ELIYAHU]);
}

#[test]
fn total_counts_before_truncation() {
    let dataset = synthetic_dataset(120);
    let response = search(&dataset, &Query::new().with_city("רעננה"));

    // two of every twelve synthetic records are in Raanana
    assert_eq!(response.total, 20);
    assert_eq!(response.records.len(), 20);

    let config = SearchConfig::default().with_limit(5);
    let response = search_with_config(&dataset, &Query::new().with_city("רעננה"), &config);
    assert_eq!(response.total, 20);
    assert_eq!(response.records.len(), 5);
}

#[test]
fn default_limit_is_twenty() {
    let dataset = synthetic_dataset(50);
    let response = search(&dataset, &Query::new());
    assert_eq!(response.total, 50);
    assert_eq!(response.records.len(), 20);
    assert_eq!(response.records[0], dataset[0]);
}

#[test]
fn zero_limit_still_reports_total() {
    let dataset = fixture_dataset();
    let config = SearchConfig::default().with_limit(0);
    let response = search_with_config(&dataset, &Query::new().with_developer("אלקטרה"), &config);
    assert!(response.records.is_empty());
    assert_eq!(response.total, 3);
}
