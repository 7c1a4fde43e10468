//! Normalizer and edit-distance laws.

use mitcham::util::normalize::{is_hebrew_point, MAQAF};
use mitcham::{levenshtein, levenshtein_within, normalize, resolve_city, CITY_ALIASES};
use proptest::prelude::*;

fn raw_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[א-ת\u{0591}-\u{05C7}\"'״׳`\u{201C}\u{201D} \t]{0,24}").unwrap()
}

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[א-ת]{0,9}").unwrap()
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in raw_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_strips_and_collapses(text in raw_text()) {
        let out = normalize(&text);
        let has_point = out.chars().any(is_hebrew_point);
        prop_assert!(!has_point);
        prop_assert!(!out.contains(MAQAF));
        prop_assert!(!out.contains(&['"', '\'', '״', '׳'][..]));
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn prop_levenshtein_metric(a in word(), b in word(), c in word()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
        prop_assert_eq!(levenshtein(&a, ""), a.chars().count());
    }

    #[test]
    fn prop_bounded_agrees(a in word(), b in word(), max in 0usize..5) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein(&a, &b) <= max);
    }

    #[test]
    fn prop_alias_closure(i in 0..CITY_ALIASES.len()) {
        let (canonical, aliases) = CITY_ALIASES[i];
        for alias in aliases {
            prop_assert!(resolve_city(canonical).contains(&normalize(alias)));
            prop_assert!(resolve_city(alias).contains(&normalize(canonical)));
        }
    }
}
