//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search nodes entered, leaves included.
    pub nodes_visited: u64,

    /// Positions scored by the evaluator at a leaf.
    pub leaves_evaluated: u64,

    /// Subtrees skipped by an alpha or beta cutoff.
    pub cutoffs: u64,

    /// Deepest depth limit whose root search finished.
    pub completed_depth: Option<u32>,

    /// Depth limits abandoned because the deadline passed mid-search.
    pub depths_abandoned: u32,

    /// Total time spent on the decision (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
