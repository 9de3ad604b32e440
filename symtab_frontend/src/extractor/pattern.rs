//! The declaration pattern and per-line extraction

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::OnceLock;
use symtab_core::PrimitiveType;

static DECLARATION_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Build the declaration regex source
///
/// Type alternatives are listed longest first so that, for example,
/// `unsigned long long x` yields type `unsigned long long` and name `x`.
pub fn pattern_source() -> String {
    let alternatives: Vec<String> = PrimitiveType::spellings_longest_first()
        .into_iter()
        .map(|spelling| {
            spelling
                .split(' ')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();

    format!(
        r"\b({})\s+(const\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*(?:\((.*)\))?(?:\s*=\s*([^;]*))?(?:\s*;)?",
        alternatives.join("|")
    )
}

fn declaration_pattern() -> &'static Regex {
    DECLARATION_PATTERN.get_or_init(|| {
        Regex::new(&pattern_source()).expect("declaration pattern is built from fixed type spellings")
    })
}

/// One `type name` pair from a parenthesized argument list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

/// A declaration extracted from one source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Type spelling with whitespace runs collapsed
    pub type_name: String,
    pub is_const: bool,
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Initializer text, trimmed; quote markers are left for the table to strip
    pub value: String,
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capture<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map(|m| m.as_str()).unwrap_or("")
}

/// Split an argument list on commas, then each argument on its last whitespace
///
/// Arguments without whitespace (e.g. a bare `void`) are skipped.
pub fn parse_parameters(arguments: &str) -> Vec<Parameter> {
    arguments
        .split(',')
        .map(str::trim)
        .filter_map(|argument| {
            let split = argument.rfind(char::is_whitespace)?;
            let (type_name, name) = argument.split_at(split);
            Some(Parameter {
                type_name: normalize_whitespace(type_name),
                name: name.trim().to_string(),
            })
        })
        .collect()
}

/// Extract the first declaration in a (trimmed) line, if any
pub fn extract_declaration(line: &str) -> Option<Declaration> {
    let caps = declaration_pattern().captures(line)?;

    Some(Declaration {
        type_name: normalize_whitespace(capture(&caps, 1)),
        is_const: caps.get(2).is_some(),
        name: capture(&caps, 3).to_string(),
        parameters: parse_parameters(capture(&caps, 4)),
        value: capture(&caps, 5).trim().to_string(),
    })
}
