//! City filter: aliases, containment and typos.

use super::common::*;
use mitcham::{city_match, resolve_city, search, Query};

#[test]
fn abbreviation_with_gershayim() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_city("ת״א"));
    assert_eq!(positions(&dataset, &response), vec![HERZL_TLV, YAD_ELIYAHU]);
}

#[test]
fn spelling_variant_in_the_data() {
    // the fixture spells it "פתח תקוה"; the query uses the canonical form
    let dataset = fixture_dataset();
    for city in ["פתח תקווה", "פ\"ת", "פתח-תקווה"] {
        let response = search(&dataset, &Query::new().with_city(city));
        assert_eq!(positions(&dataset, &response), vec![JABOTINSKY], "city {city}");
    }
}

#[test]
fn kiryat_spelled_both_ways() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_city("קריית אונו"));
    assert_eq!(positions(&dataset, &response), vec![KIRYAT_ONO]);
}

#[test]
fn short_alias_does_not_leak_into_other_cities() {
    let dataset = fixture_dataset();
    let response = search(&dataset, &Query::new().with_city("י-ם"));
    assert_eq!(positions(&dataset, &response), vec![KATAMONIM]);

    let response = search(&dataset, &Query::new().with_city("ב״ש"));
    assert_eq!(positions(&dataset, &response), vec![SHIKUN_D]);
}

#[test]
fn resolution_is_symmetric() {
    assert!(resolve_city("תל אביב יפו").contains("תא"));
    assert!(resolve_city("ת\"א").contains("תל אביב יפו"));
    assert!(city_match("תל אביב יפו", "תל-אביב"));
    assert!(city_match("תל-אביב", "תל אביב יפו"));
}

#[test]
fn blank_city_is_no_filter() {
    let dataset = fixture_dataset();
    let query = Query::from_parts(Some("   ".into()), None, None, None);
    assert!(query.city.is_none());
    assert_eq!(search(&dataset, &query).total, dataset.len());
}
