// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::dataset::Dataset;
use crate::types::Record;

/// Create a record with the two required fields plus optional extras.
pub fn make_record(
    city: &str,
    complex_name: &str,
    neighborhood: Option<&str>,
    developer: Option<&str>,
) -> Record {
    let mut record = Record::new(city, complex_name);
    record.neighborhood = neighborhood.map(String::from);
    record.developer_name = developer.map(String::from);
    record
}

/// A small dataset that exercises aliases, typos, streets and developers.
///
/// Positions are stable; tests refer to records by index.
pub fn fixture_records() -> Vec<Record> {
    vec![
        // 0
        make_record("תל אביב יפו", "מתחם הרצל 12-20", Some("פלורנטין"), Some("אלקטרה בניה")),
        // 1
        make_record("תל אביב יפו", "יד אליהו צפון", Some("יד אליהו"), Some("שיכון ובינוי")),
        // 2
        make_record("רעננה", "גן עץ", Some("מרכז העיר"), None),
        // 3
        make_record("רעננה", "גן הדר", Some("צפון"), Some("אלקטרה")),
        // 4
        make_record("חיפה", "רמות רמז", Some("הדר"), Some("אזורים")),
        // 5
        make_record("פתח תקוה", "מתחם ז'בוטינסקי", Some("כפר גנים"), Some("אפריקה ישראל")),
        // 6
        make_record("בת ים", "רחוב בלפור", Some("רמת הנשיא"), None),
        // 7
        make_record("רמת גן", "מתחם ביאליק", Some("מרום נווה"), Some("אלקטרה מגורים")),
        // 8
        make_record("קרית אונו", "מתחם לוי אשכול", None, Some("גינדי")),
        // 9
        make_record("ירושלים", "קטמונים", Some("גוננים"), Some("שיכון ובינוי")),
        // 10
        make_record("כפר סבא", "מתחם וייצמן", Some("הזמר העברי"), Some("אזורים")),
        // 11
        make_record("באר שבע", "שכונה ד", Some("ד"), None),
    ]
}

pub fn fixture_dataset() -> Dataset {
    Dataset::new(fixture_records()).expect("fixture records are valid")
}

/// `n` records cycling through the fixture with numbered complex names.
pub fn synthetic_dataset(n: usize) -> Dataset {
    let base = fixture_records();
    let records = (0..n)
        .map(|i| {
            let mut record = base[i % base.len()].clone();
            record.complex_name = format!("{} {}", record.complex_name, i);
            record.complex_number = Some(i.to_string());
            record
        })
        .collect();
    Dataset::new(records).expect("synthetic records are valid")
}
