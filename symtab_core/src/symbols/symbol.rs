//! A stored symbol record

use crate::validation::PrimitiveType;
use serde::Serialize;
use std::fmt;

/// One declared identifier with its type and literal value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: PrimitiveType,
    pub value: String,
}

impl Symbol {
    pub(crate) fn new(name: &str, data_type: PrimitiveType, value: String) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            value,
        }
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, type: {}, value: {}",
            self.name, self.data_type, self.value
        )
    }
}
