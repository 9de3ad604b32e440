//! Declaration extractor
//!
//! Reads source-like text line by line, recognizes variable and function
//! declarations with one fixed pattern and inserts them into a [`SymbolTable`].
//!
//! [`SymbolTable`]: symtab_core::SymbolTable

pub mod error;
pub mod loader;
pub mod pattern;
pub mod reader;

pub use error::LoadError;
pub use loader::{load_file, load_source, DeclarationExtractor, LoadReport, LoadSummary, RejectedEntry};
pub use pattern::{extract_declaration, Declaration, Parameter};
