//! The fixed set of primitive types a symbol may be declared with

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Literal grammar shared by a group of types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Void,
    Integer,
    Floating,
    Boolean,
    Character,
    String,
}

impl TypeFamily {
    /// Short description of the accepted literal, used in diagnostics
    pub fn expected_literal(&self) -> &'static str {
        match self {
            Self::Void => "no value",
            Self::Integer => "an integer literal",
            Self::Floating => "a floating-point literal",
            Self::Boolean => "true or false",
            Self::Character => "a single character",
            Self::String => "a string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "signed char")]
    SignedChar,
    #[serde(rename = "unsigned char")]
    UnsignedChar,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "signed int")]
    SignedInt,
    #[serde(rename = "unsigned int")]
    UnsignedInt,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "signed long")]
    SignedLong,
    #[serde(rename = "unsigned long")]
    UnsignedLong,
    #[serde(rename = "long long")]
    LongLong,
    #[serde(rename = "signed long long")]
    SignedLongLong,
    #[serde(rename = "unsigned long long")]
    UnsignedLongLong,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "long double")]
    LongDouble,
    #[serde(rename = "wchar_t")]
    WChar,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "size_t")]
    SizeT,
    #[serde(rename = "string")]
    String,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 21] = [
        Self::Void,
        Self::Char,
        Self::SignedChar,
        Self::UnsignedChar,
        Self::Short,
        Self::Int,
        Self::SignedInt,
        Self::UnsignedInt,
        Self::Long,
        Self::SignedLong,
        Self::UnsignedLong,
        Self::LongLong,
        Self::SignedLongLong,
        Self::UnsignedLongLong,
        Self::Float,
        Self::Double,
        Self::LongDouble,
        Self::WChar,
        Self::Bool,
        Self::SizeT,
        Self::String,
    ];

    /// Canonical spelling, words separated by single spaces
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Char => "char",
            Self::SignedChar => "signed char",
            Self::UnsignedChar => "unsigned char",
            Self::Short => "short",
            Self::Int => "int",
            Self::SignedInt => "signed int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::SignedLong => "signed long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::SignedLongLong => "signed long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
            Self::WChar => "wchar_t",
            Self::Bool => "bool",
            Self::SizeT => "size_t",
            Self::String => "string",
        }
    }

    pub fn family(&self) -> TypeFamily {
        match self {
            Self::Void => TypeFamily::Void,
            Self::Char | Self::SignedChar | Self::UnsignedChar | Self::WChar => {
                TypeFamily::Character
            }
            Self::Short
            | Self::Int
            | Self::SignedInt
            | Self::UnsignedInt
            | Self::Long
            | Self::SignedLong
            | Self::UnsignedLong
            | Self::LongLong
            | Self::SignedLongLong
            | Self::UnsignedLongLong
            | Self::SizeT => TypeFamily::Integer,
            Self::Float | Self::Double | Self::LongDouble => TypeFamily::Floating,
            Self::Bool => TypeFamily::Boolean,
            Self::String => TypeFamily::String,
        }
    }

    /// Number of words in the spelling
    pub fn word_count(&self) -> usize {
        self.as_str().split(' ').count()
    }

    /// Whether stored values have their quote markers removed
    pub fn strips_quotes(&self) -> bool {
        matches!(self.family(), TypeFamily::Character | TypeFamily::String)
    }

    /// Resolve a spelling, collapsing whitespace runs between words
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        let normalized = spelling.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }

    /// Longest type spelled by the leading words, with the number of words used
    pub fn match_leading_words(words: &[&str]) -> Option<(Self, usize)> {
        Self::ALL
            .into_iter()
            .filter(|t| {
                let count = t.word_count();
                count <= words.len() && words[..count].join(" ") == t.as_str()
            })
            .max_by_key(|t| t.word_count())
            .map(|t| (t, t.word_count()))
    }

    /// All spellings ordered longest first (for alternation patterns)
    pub fn spellings_longest_first() -> Vec<&'static str> {
        let mut spellings: Vec<&'static str> = Self::ALL.iter().map(|t| t.as_str()).collect();
        spellings.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        spellings
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_spelling(s).ok_or_else(|| ValidationError::invalid_type(s))
    }
}
