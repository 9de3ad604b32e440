//! Error types for declaration validation

use crate::logging::codes::{self, Code};
use std::fmt;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    Empty,
    TooLong { length: usize, max: usize },
    InvalidFirstCharacter(char),
    InvalidCharacter(char),
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name is empty"),
            Self::TooLong { length, max } => {
                write!(f, "name is {} characters long, maximum is {}", length, max)
            }
            Self::InvalidFirstCharacter(c) => {
                write!(f, "name must start with a letter or underscore, found '{}'", c)
            }
            Self::InvalidCharacter(c) => write!(f, "invalid character '{}' in name", c),
        }
    }
}

/// Validation failures for a (name, type, value) triple
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid symbol name '{name}': {violation}")]
    InvalidName { name: String, violation: NameViolation },

    #[error("Invalid type '{type_name}'")]
    InvalidType { type_name: String },

    #[error("Invalid value '{value}' for type '{type_name}': expected {expected}")]
    InvalidValue {
        type_name: String,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    pub fn invalid_name(name: &str, violation: NameViolation) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            violation,
        }
    }

    pub fn invalid_type(type_name: &str) -> Self {
        Self::InvalidType {
            type_name: type_name.to_string(),
        }
    }

    pub fn invalid_value(type_name: &str, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            type_name: type_name.to_string(),
            value: value.to_string(),
            expected,
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidName { .. } => codes::validation::INVALID_NAME,
            Self::InvalidType { .. } => codes::validation::INVALID_TYPE,
            Self::InvalidValue { .. } => codes::validation::INVALID_VALUE,
        }
    }
}
