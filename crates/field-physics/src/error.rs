//! Errors raised when building particle behaviors

use std::fmt;

/// Rejected [`Behavior`](crate::Behavior) parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BehaviorError {
    /// A parameter was NaN or infinite.
    NonFinite(&'static str),
    /// A distance or factor that must not be negative was negative.
    Negative { name: &'static str, value: f32 },
    /// The damping factor was outside the open interval (0, 1).
    DampFactorOutOfRange(f32),
}

impl fmt::Display for BehaviorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BehaviorError::NonFinite(name) => write!(f, "{name} must be finite"),
            BehaviorError::Negative { name, value } => {
                write!(f, "{name} must not be negative (got {value})")
            }
            BehaviorError::DampFactorOutOfRange(value) => {
                write!(f, "damp factor must lie strictly between 0 and 1 (got {value})")
            }
        }
    }
}

impl std::error::Error for BehaviorError {}
