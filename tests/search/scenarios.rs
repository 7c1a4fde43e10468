//! End-to-end behavior on the shared fixture.

use super::common::*;
use mitcham::{explain, search, Query, PROVENANCE};

#[test]
fn city_alias_expands_to_canonical_name() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_city("תל אביב"));

    assert_eq!(response.total, 2);
    assert_eq!(positions(&dataset, &response), vec![HERZL_TLV, YAD_ELIYAHU]);
    assert!(response.records.iter().all(|r| r.city == "תל אביב יפו"));
}

#[test]
fn city_typo_still_matches() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_city("רעננע"));

    assert_eq!(positions(&dataset, &response), vec![GAN_ETZ, GAN_HADAR]);
}

#[test]
fn exact_name_outranks_single_shared_word() {
    let dataset = fixture_dataset();
    let query = Query::new().with_city("רעננה").with_q("גן עץ");
    let response = search(&dataset, &query);

    assert_eq!(positions(&dataset, &response), vec![GAN_ETZ, GAN_HADAR]);
    assert_eq!(explain(&dataset[GAN_ETZ], "גן עץ").total(), 100);
    assert_eq!(explain(&dataset[GAN_HADAR], "גן עץ").total(), 15);
}

#[test]
fn q_takes_precedence_over_street() {
    let dataset = fixture_dataset();
    let with_street = search(&dataset, &Query::new().with_q("גן עץ").with_street("הדר"));
    let q_only = search(&dataset, &Query::new().with_q("גן עץ"));
    let street_only = search(&dataset, &Query::new().with_street("הדר"));

    assert_eq!(with_street, q_only);
    assert_eq!(positions(&dataset, &with_street), vec![GAN_ETZ, GAN_HADAR]);
    // the street alone would have ordered things differently
    assert_eq!(positions(&dataset, &street_only)[..2], [GAN_HADAR, RAMOT_REMEZ]);
}

#[test]
fn developer_brand_matches_full_name() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_developer("אלקטרה"));

    assert_eq!(positions(&dataset, &response), vec![HERZL_TLV, GAN_HADAR, BIALIK]);
    assert_eq!(response.records[0].developer_name.as_deref(), Some("אלקטרה בניה"));
}

#[test]
fn unknown_city_returns_nothing() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_city("קסם"));

    assert_eq!(response.total, 0);
    assert!(response.records.is_empty());
    assert_eq!(response.source, PROVENANCE);
}

#[test]
fn response_serializes_in_camel_case() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_developer("גינדי"));
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["total"], 1);
    assert_eq!(json["source"], "הרשות להתחדשות עירונית");
    assert_eq!(json["records"][0]["complexName"], "מתחם לוי אשכול");
    assert_eq!(json["records"][0]["developerName"], "גינדי");
    assert!(json["records"][0].get("neighborhood").is_none());
}
