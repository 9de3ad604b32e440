//! Error types for symbol table operations

use crate::logging::codes::{self, Code};
use crate::validation::{PrimitiveType, ValidationError};

/// Result type for symbol table operations
pub type SymbolResult<T> = Result<T, SymbolError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SymbolError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Symbol '{name}' already declared with type '{existing_type}'")]
    DuplicateSymbol {
        name: String,
        existing_type: PrimitiveType,
    },

    #[error("Symbol '{name}' not found")]
    NotFound { name: String },

    #[error("Symbol table is full: {limit} symbols")]
    TableFull { limit: usize },

    #[error("Invalid bucket count {requested}: must be between 1 and {max}")]
    InvalidCapacity { requested: usize, max: usize },
}

impl SymbolError {
    pub fn duplicate_symbol(name: &str, existing_type: PrimitiveType) -> Self {
        Self::DuplicateSymbol {
            name: name.to_string(),
            existing_type,
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Validation(err) => err.error_code(),
            Self::DuplicateSymbol { .. } => codes::symbols::DUPLICATE_SYMBOL,
            Self::NotFound { .. } => codes::symbols::SYMBOL_NOT_FOUND,
            Self::TableFull { .. } => codes::symbols::TABLE_FULL,
            Self::InvalidCapacity { .. } => codes::symbols::INVALID_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::NameViolation;

    #[test]
    fn test_validation_errors_pass_through() {
        let err: SymbolError =
            ValidationError::invalid_name("5", NameViolation::InvalidFirstCharacter('5')).into();
        assert_eq!(err.error_code(), codes::validation::INVALID_NAME);
        assert!(err.to_string().starts_with("Invalid symbol name '5'"));
    }

    #[test]
    fn test_duplicate_message() {
        let err = SymbolError::duplicate_symbol("y", PrimitiveType::Float);
        assert_eq!(
            err.to_string(),
            "Symbol 'y' already declared with type 'float'"
        );
        assert_eq!(err.error_code(), codes::symbols::DUPLICATE_SYMBOL);
    }
}
