//! Identifier rules

use super::error::{NameViolation, ValidationError, ValidationResult};
use crate::config::compile_time::symbols::MAX_NAME_LENGTH;

/// Check a candidate symbol name
///
/// A name is 1..=`MAX_NAME_LENGTH` ASCII characters, starts with a letter or
/// underscore and continues with letters, digits or underscores.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let mut chars = name.chars();

    let first = chars
        .next()
        .ok_or_else(|| ValidationError::invalid_name(name, NameViolation::Empty))?;

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::invalid_name(
            name,
            NameViolation::TooLong {
                length,
                max: MAX_NAME_LENGTH,
            },
        ));
    }

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(ValidationError::invalid_name(
            name,
            NameViolation::InvalidFirstCharacter(first),
        ));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(ValidationError::invalid_name(
            name,
            NameViolation::InvalidCharacter(bad),
        ));
    }

    Ok(())
}

pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_valid_names() {
        for name in ["x", "_", "_tmp", "camelCase", "snake_case_2", "A1"] {
            assert!(is_valid_name(name), "{} should be valid", name);
        }
        assert!(is_valid_name(&"a".repeat(MAX_NAME_LENGTH)));
    }

    #[test]
    fn test_empty_name() {
        assert_matches!(
            validate_name(""),
            Err(ValidationError::InvalidName { violation: NameViolation::Empty, .. })
        );
    }

    #[test]
    fn test_name_too_long() {
        let name = "thisIsAVeryLongVariableNameThatExceedsTheLimit";
        assert_matches!(
            validate_name(name),
            Err(ValidationError::InvalidName { violation: NameViolation::TooLong { .. }, .. })
        );
        assert!(!is_valid_name(&"a".repeat(MAX_NAME_LENGTH + 1)));
    }

    #[test]
    fn test_leading_digit() {
        assert_matches!(
            validate_name("5"),
            Err(ValidationError::InvalidName {
                violation: NameViolation::InvalidFirstCharacter('5'),
                ..
            })
        );
        assert!(!is_valid_name("9lives"));
    }

    #[test]
    fn test_special_characters() {
        assert_matches!(
            validate_name("x#"),
            Err(ValidationError::InvalidName {
                violation: NameViolation::InvalidCharacter('#'),
                ..
            })
        );
        assert!(!is_valid_name("has space"));
        assert!(!is_valid_name("dash-ed"));
        assert!(!is_valid_name("caf\u{e9}"));
    }
}
