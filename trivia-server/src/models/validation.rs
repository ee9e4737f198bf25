//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or only whitespace) when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field outside its accepted range
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::OutOfRange {
                field,
                min,
                max,
                value,
            } => write!(
                f,
                "{} must be between {} and {} (got {})",
                field, min, max, value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "difficulty",
            min: 1,
            max: 5,
            value: 9,
        };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 5 (got 9)");

        let err = ValidationError::Empty { field: "answer" };
        assert_eq!(err.to_string(), "answer cannot be empty");
    }
}
