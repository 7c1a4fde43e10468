//! Developer filter.

use super::common::*;
use mitcham::search::developer_match;
use mitcham::{search, Query};

#[test]
fn typo_in_developer_token() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_developer("אפריקא"));
    assert_eq!(positions(&dataset, &response), vec![JABOTINSKY]);
}

#[test]
fn records_without_developer_never_match() {
    let record = make_record("רעננה", "גן עץ", None, None);
    assert!(!developer_match(&record, "אלקטרה"));
    assert!(!developer_match(&record, "גן"));
}

#[test]
fn full_name_query_matches_brand_record() {
    let record = make_record("רעננה", "גן הדר", None, Some("אלקטרה"));
    assert!(developer_match(&record, "אלקטרה מגורים בע\"מ"));
}
