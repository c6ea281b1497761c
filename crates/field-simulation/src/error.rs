//! Errors raised while validating field parameters

use field_physics::BehaviorError;
use std::fmt;

/// Rejected [`FieldParams`](crate::FieldParams)
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// Field size was not positive and finite.
    InvalidSize { width: f32, height: f32 },
    /// A grid layout with no rows or no columns.
    EmptyGrid { columns: usize, rows: usize },
    /// Some other layout parameter was out of range.
    InvalidLayout(&'static str),
    /// A sampling range was inverted or not finite.
    InvalidSpread { name: &'static str, min: f32, max: f32 },
    /// A pick palette with no colors.
    EmptyPalette,
    /// The behavior ranges can produce an invalid behavior.
    Behavior(BehaviorError),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::InvalidSize { width, height } => {
                write!(f, "field size must be positive, got {width}x{height}")
            }
            ParamsError::EmptyGrid { columns, rows } => {
                write!(f, "grid needs at least one row and column, got {columns}x{rows}")
            }
            ParamsError::InvalidLayout(msg) => write!(f, "invalid layout: {msg}"),
            ParamsError::InvalidSpread { name, min, max } => {
                write!(f, "invalid {name} range [{min}, {max})")
            }
            ParamsError::EmptyPalette => write!(f, "palette has no colors"),
            ParamsError::Behavior(e) => write!(f, "invalid behavior: {e}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Behavior(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BehaviorError> for ParamsError {
    fn from(e: BehaviorError) -> Self {
        ParamsError::Behavior(e)
    }
}
