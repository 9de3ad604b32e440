//! Command interpreter
//!
//! One command per line; every command goes through the table's public
//! insert / find / get surface.

pub mod command;
pub mod session;

pub use command::{parse_command, Command, CommandError};
pub use session::{write_banner, Flow, Interpreter};
