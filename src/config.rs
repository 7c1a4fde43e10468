// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime knobs for a search.

use serde::{Deserialize, Serialize};

/// Default number of records returned per search.
pub const DEFAULT_LIMIT: usize = 20;

/// Working-set size above which scoring fans out across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Configuration for [`search_with_config`](crate::search_with_config).
///
/// Serializable so a host application can embed it in its own config file;
/// missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum records in the response. `total` is unaffected.
    pub limit: usize,

    /// Scoring runs in parallel only when the working set is larger than
    /// this. Ignored without the `parallel` feature.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Never go parallel.
    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }
}
