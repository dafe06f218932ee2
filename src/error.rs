//! Error types for the ACO N-queens solver.

use thiserror::Error;

/// Errors produced while configuring or running the optimizer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AcoError {
    /// A construction parameter is out of its valid range
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// A move-selection probability row summed to zero or contained a
    /// NaN/negative entry
    #[error("degenerate move distribution at column {column} (weight sum {weight_sum})")]
    DegenerateDistribution { column: usize, weight_sum: f64 },
}

impl AcoError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
