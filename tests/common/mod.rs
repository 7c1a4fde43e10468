//! Shared test utilities and fixtures.

#![allow(dead_code)]

use mitcham::{Dataset, SearchResponse};

// Re-export canonical fixtures from mitcham::testing
pub use mitcham::testing::{fixture_dataset, fixture_records, make_record, synthetic_dataset};

// ============================================================================
// FIXTURE POSITIONS
// ============================================================================

pub const HERZL_TLV: usize = 0;
pub const YAD_ELIYAHU: usize = 1;
pub const GAN_ETZ: usize = 2;
pub const GAN_HADAR: usize = 3;
pub const RAMOT_REMEZ: usize = 4;
pub const JABOTINSKY: usize = 5;
pub const BIALIK: usize = 7;
pub const KIRYAT_ONO: usize = 8;
pub const KATAMONIM: usize = 9;
pub const WEIZMANN: usize = 10;
pub const SHIKUN_D: usize = 11;

// ============================================================================
// HELPERS
// ============================================================================

/// Dataset positions of the returned records, in response order.
pub fn positions(dataset: &Dataset, response: &SearchResponse) -> Vec<usize> {
    response
        .records
        .iter()
        .map(|record| {
            dataset
                .iter()
                .position(|r| r == record)
                .expect("response record not in dataset")
        })
        .collect()
}

pub fn names(response: &SearchResponse) -> Vec<&str> {
    response
        .records
        .iter()
        .map(|r| r.complex_name.as_str())
        .collect()
}
