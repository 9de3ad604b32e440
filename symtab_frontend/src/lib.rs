//! # symtab frontend
//!
//! External collaborators of the symbol table: the declaration extractor,
//! the command interpreter and the self-test scenarios.

pub mod extractor;
pub mod interpreter;
pub mod scenarios;

// Convenience re-exports
pub use extractor::{DeclarationExtractor, LoadError, LoadReport};
pub use interpreter::{Interpreter, Flow};
pub use scenarios::{run_scenarios, ScenarioReport};

pub mod prelude {
    pub use crate::extractor::{extract_declaration, Declaration, DeclarationExtractor, LoadError, LoadReport};
    pub use crate::interpreter::{parse_command, write_banner, Command, CommandError, Flow, Interpreter};
    pub use crate::scenarios::{run_scenarios, ScenarioOutcome, ScenarioReport};
    pub use symtab_core::{PrimitiveType, Symbol, SymbolError, SymbolTable};
}
