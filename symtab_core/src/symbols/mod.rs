//! Symbol storage: records, hashing and the chained table

pub mod error;
pub mod hash;
pub mod symbol;
pub mod table;

pub use error::{SymbolError, SymbolResult};
pub use hash::{hash_bucket, hash_name};
pub use symbol::Symbol;
pub use table::{SymbolTable, TableStats};
