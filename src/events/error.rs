//! Event detection errors

use thiserror::Error;

use super::boolean::Reducer;
use crate::time::Epoch;

/// Errors raised while composing or evaluating event detectors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("{operator} requires at least one operand")]
    EmptyOperandSet { operator: Reducer },

    #[error("Invalid detector setting {name} = {value}: must be positive and finite")]
    InvalidSettings { name: &'static str, value: f64 },

    #[error("Indicator {name} failed: {reason}")]
    Indicator { name: String, reason: String },

    #[error("unable to converge after {0} iterations")]
    ConvergenceFailure(usize),

    #[error("Invalid search interval [{start}, {end}]")]
    InvalidInterval { start: Epoch, end: Epoch },
}

impl EventError {
    /// Failure of a leaf indicator
    pub fn indicator(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Indicator {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for event detection
pub type Result<T> = std::result::Result<T, EventError>;
