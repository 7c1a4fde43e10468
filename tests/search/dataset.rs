//! Loading datasets from disk.

use std::io::Write;

use mitcham::{search, Dataset, Error, Query};

#[test]
fn load_saved_response_and_search_it() {
    let json = r#"{
        "records": [
            {"city": "רמת גן", "complexName": "מתחם ביאליק", "complexNumber": 77, "status": "מאושר"},
            {"city": "בני ברק", "complexName": "פרדס כץ"}
        ],
        "total": 2,
        "source": "הרשות להתחדשות עירונית"
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let dataset = Dataset::load(file.path()).unwrap();
    let response = search(&dataset, &Query::new().with_city("ר\"ג"));

    assert_eq!(response.total, 1);
    assert_eq!(response.records[0].complex_number.as_deref(), Some("77"));
    assert_eq!(response.records[0].extra["status"], "מאושר");
}

#[test]
fn malformed_json_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{\"city\": ").unwrap();
    assert!(matches!(Dataset::load(file.path()), Err(Error::Json(_))));
}

#[test]
fn blank_complex_name_is_rejected() {
    let err = Dataset::from_json_str(r#"[{"city": "חיפה", "complexName": " "}]"#).unwrap_err();
    assert_eq!(err.to_string(), "record 0: blank complexName");
}
