//! Scorer properties.

use mitcham::{explain, score, score_street, Record};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[א-ת]{2,7}").unwrap()
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|w| w.join(" "))
}

proptest! {
    /// The breakdown always adds up to the score.
    #[test]
    fn prop_explain_sums_to_score(name in phrase(), neighborhood in phrase(), q in phrase()) {
        let record = Record::new("חיפה", name).with_neighborhood(neighborhood);
        prop_assert_eq!(explain(&record, &q).total(), score(&record, &q));
    }

    /// A record whose name is the query scores at least the exact-match weight.
    #[test]
    fn prop_exact_name_scores_at_least_100(q in phrase()) {
        let record = Record::new("חיפה", q.clone());
        prop_assert!(score(&record, &q) >= 100);
    }

    /// A complex named after the street always gets street credit.
    #[test]
    fn prop_street_in_name_scores(street in word(), prefix in word()) {
        let record = Record::new("חיפה", format!("{} {}", prefix, street));
        prop_assert!(score_street(&record, &street) >= 50);
    }

    /// Scoring ignores vowel points in the record.
    #[test]
    fn prop_points_do_not_change_scores(name in phrase(), q in phrase()) {
        let pointed: String = name.chars().flat_map(|c| [c, '\u{05B8}']).collect();
        let plain = Record::new("חיפה", name);
        let with_points = Record::new("חיפה", pointed);
        prop_assert_eq!(score(&plain, &q), score(&with_points, &q));
    }
}
