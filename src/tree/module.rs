//! Module records stored in the tree arena.

use serde::{Deserialize, Serialize};

/// Stable identifier of a module, equal to its arena index
pub type ModuleId = usize;

/// A node of the module tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Stable id
    pub id: ModuleId,
    /// Display label
    pub label: String,
    /// Parent id; `None` only for the root
    pub parent: Option<ModuleId>,
    /// Accumulated improvement; non-negative, non-decreasing
    pub x: f64,
    /// Contribution count; non-decreasing
    pub c: u64,
    /// Edges from the root plus one, so the root sits at depth 1
    pub depth: u32,
}

impl Module {
    pub(crate) fn root() -> Self {
        Self {
            id: 0,
            label: "m0".to_string(),
            parent: None,
            x: 0.0,
            c: 0,
            depth: 1,
        }
    }
}
