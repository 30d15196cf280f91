//! Error types for the simulation core.

use thiserror::Error;

/// Simulation errors
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Degenerate selection: total reward mass {total} is not positive")]
    DegenerateSelection { total: f64 },

    #[error("Numeric domain violation: {0}")]
    NumericDomain(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(usize),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;
