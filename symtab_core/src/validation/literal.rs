//! Literal grammars per type family

use super::error::{ValidationError, ValidationResult};
use super::types::{PrimitiveType, TypeFamily};

const ESCAPES: [char; 7] = ['n', 't', 'r', '0', '\\', '\'', '"'];

/// Remove the surrounding quote markers of a char or string literal
///
/// Other types, and values without a matching pair of markers, are returned unchanged.
pub fn strip_quotes(data_type: PrimitiveType, value: &str) -> &str {
    let marker = match data_type.family() {
        TypeFamily::String => '"',
        TypeFamily::Character => '\'',
        _ => return value,
    };

    value
        .strip_prefix(marker)
        .and_then(|rest| rest.strip_suffix(marker))
        .unwrap_or(value)
}

/// Check a (quote-stripped) value against the declared type
///
/// An empty value is always accepted.
pub fn validate_value(data_type: PrimitiveType, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Ok(());
    }

    let family = data_type.family();
    let accepted = match family {
        TypeFamily::Void => false,
        TypeFamily::Integer => is_integer_literal(value),
        TypeFamily::Floating => is_floating_literal(value),
        TypeFamily::Boolean => value == "true" || value == "false",
        TypeFamily::Character => is_character_literal(value),
        TypeFamily::String => true,
    };

    if accepted {
        Ok(())
    } else {
        Err(ValidationError::invalid_value(
            data_type.as_str(),
            value,
            family.expected_literal(),
        ))
    }
}

pub fn is_valid_value(data_type: PrimitiveType, value: &str) -> bool {
    validate_value(data_type, value).is_ok()
}

fn strip_sign(value: &str) -> &str {
    value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer_literal(value: &str) -> bool {
    is_digits(strip_sign(value))
}

fn is_floating_literal(value: &str) -> bool {
    let unsigned = strip_sign(value);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    if let Some(exponent) = exponent {
        if !is_digits(strip_sign(exponent)) {
            return false;
        }
    }

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty())
}

fn is_character_literal(value: &str) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(_), None, _) => true,
        (Some('\\'), Some(escaped), None) => ESCAPES.contains(&escaped),
        _ => false,
    }
}
