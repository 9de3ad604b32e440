// Internal modules
pub mod config;
#[macro_use]
pub mod logging;
pub mod symbols;
pub mod validation;

// Re-export key types for library consumers
pub use symbols::{Symbol, SymbolError, SymbolResult, SymbolTable, TableStats};
pub use validation::{PrimitiveType, ValidationError};
