//! Growth-step history.
//!
//! Every completed tick is appended to a [`StepLog`] so a finished run can
//! be inspected, summarized, or exported without re-running it. Records are
//! plain serde values; persistence beyond JSON text is left to consumers.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::sim::GrowthOutcome;

/// One recorded growth step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based tick index
    pub step: u64,
    /// Contribution magnitude applied during the tick
    pub alpha: f64,
    /// What the tick did to the tree
    pub outcome: GrowthOutcome,
}

/// Append-only log of completed growth steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepLog {
    records: Vec<StepRecord>,
}

impl StepLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any step has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// The most recent record
    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    /// Number of recorded steps that founded a new module
    pub fn founded_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, GrowthOutcome::Founded { .. }))
            .count()
    }

    /// Serialize the full log as JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }

    pub(crate) fn record(&mut self, alpha: f64, outcome: GrowthOutcome) {
        let step = self.records.len() as u64 + 1;
        self.records.push(StepRecord {
            step,
            alpha,
            outcome,
        });
    }
}
