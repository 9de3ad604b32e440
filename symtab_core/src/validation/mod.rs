//! Declaration validation
//!
//! Pure checks deciding whether a (name, type, value) triple may become a
//! symbol. Nothing here touches a table or logs; callers decide how to report.

pub mod error;
pub mod literal;
pub mod name;
pub mod types;

pub use error::{NameViolation, ValidationError, ValidationResult};
pub use literal::{is_valid_value, strip_quotes, validate_value};
pub use name::{is_valid_name, validate_name};
pub use types::{PrimitiveType, TypeFamily};

/// Resolve a type spelling against the fixed type set
pub fn validate_type(type_name: &str) -> ValidationResult<PrimitiveType> {
    type_name.parse()
}

pub fn is_valid_type(type_name: &str) -> bool {
    validate_type(type_name).is_ok()
}

/// A triple that passed every check, ready for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDeclaration {
    pub data_type: PrimitiveType,
    /// Value as stored: quote markers removed for char and string types
    pub value: String,
}

/// Run name, type and value checks in that order, stopping at the first failure
pub fn validate_declaration(
    name: &str,
    type_name: &str,
    value: &str,
) -> ValidationResult<ValidatedDeclaration> {
    validate_name(name)?;
    let data_type = validate_type(type_name)?;
    let stored = strip_quotes(data_type, value);
    validate_value(data_type, stored)?;

    Ok(ValidatedDeclaration {
        data_type,
        value: stored.to_string(),
    })
}
