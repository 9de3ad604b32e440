//! The line-oriented command loop

use super::command::{parse_command, Command, CommandError, USAGE};
use crate::extractor::DeclarationExtractor;
use crate::scenarios;
use std::io::{self, BufRead, Write};
use symtab_core::{log_debug, log_error, SymbolTable};

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Print the welcome banner and command list
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Symbol Table program!")?;
    write_commands(out)?;
    writeln!(out, "Enter a command (or 'exit' to quit):")
}

fn write_commands<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    for (_, usage) in USAGE {
        writeln!(out, "- {}", usage)?;
    }
    Ok(())
}

/// Translates text commands into symbol table calls
///
/// Borrows the table mutably for its whole lifetime; output goes to `out`.
pub struct Interpreter<'t, W: Write> {
    table: &'t mut SymbolTable,
    extractor: DeclarationExtractor,
    out: W,
}

impl<'t, W: Write> Interpreter<'t, W> {
    pub fn new(table: &'t mut SymbolTable, out: W) -> Self {
        Self::with_extractor(table, DeclarationExtractor::new(), out)
    }

    pub fn with_extractor(table: &'t mut SymbolTable, extractor: DeclarationExtractor, out: W) -> Self {
        Self {
            table,
            extractor,
            out,
        }
    }

    pub fn table(&self) -> &SymbolTable {
        self.table
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `exit` or end of input
    ///
    /// A line that is not valid UTF-8 is reported and skipped.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute(line.trim_end_matches(|c: char| c == '\n' || c == '\r'))?,
                Err(err) => {
                    let error = CommandError::InvalidEncoding {
                        offset: err.valid_up_to(),
                    };
                    self.reject(&error, &String::from_utf8_lossy(&buf))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.out.flush()
    }

    /// Execute one input line
    ///
    /// Command failures are printed and the loop continues; only I/O errors on
    /// the output sink are returned.
    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(CommandError::Empty) => return Ok(Flow::Continue),
            Err(err) => {
                self.reject(&err, line)?;
                return Ok(Flow::Continue);
            }
        };

        log_debug!("Executing command", "command" => format!("{:?}", command));

        match command {
            Command::Insert {
                name,
                type_name,
                value,
            } => self.insert(&name, &type_name, &value)?,
            Command::Find { name } => self.find(&name)?,
            Command::Get { name } => self.get(&name)?,
            Command::Load { path } => self.load(&path)?,
            Command::RunTests => {
                scenarios::run_scenarios(&mut self.out)?;
            }
            Command::Stats => self.stats()?,
            Command::Dump => self.dump()?,
            Command::Help => write_commands(&mut self.out)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn reject(&mut self, err: &CommandError, input: &str) -> io::Result<()> {
        log_error!(err.error_code(), &err.to_string(), "input" => input.trim());
        writeln!(self.out, "ERROR: {}", err)
    }

    fn insert(&mut self, name: &str, type_name: &str, value: &str) -> io::Result<()> {
        match self.table.insert(name, type_name, value) {
            Ok(()) => writeln!(self.out, "Symbol inserted successfully."),
            Err(err) => writeln!(self.out, "ERROR: {}", err),
        }
    }

    fn find(&mut self, name: &str) -> io::Result<()> {
        match self.table.find(name) {
            Some(_) => writeln!(self.out, "Symbol found."),
            None => writeln!(self.out, "ERROR: Symbol not found."),
        }
    }

    fn get(&mut self, name: &str) -> io::Result<()> {
        match self.table.get(name) {
            Ok(symbol) => writeln!(self.out, "{}", symbol),
            Err(_) => writeln!(self.out, "ERROR: Symbol not found."),
        }
    }

    /// Load a declaration file, narrating progress and rejections
    pub fn load(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "Loading and parsing the input file...")?;

        match self.extractor.load_file(path, self.table) {
            Ok(report) => {
                if self.extractor.preferences().report_rejections {
                    for rejected in &report.rejected {
                        writeln!(self.out, "ERROR: line {}: {}", rejected.line, rejected.error)?;
                    }
                }
                writeln!(self.out, "Parsing complete. Symbol table updated.")?;
                writeln!(self.out)?;
                writeln!(self.out, "Input file loaded and parsed successfully.")
            }
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                writeln!(self.out, "Failed to load and parse the input file.")
            }
        }
    }

    fn stats(&mut self) -> io::Result<()> {
        let stats = self.table.stats();
        writeln!(
            self.out,
            "Buckets: {}, symbols: {}, occupied buckets: {}, longest chain: {}, load factor: {:.2}",
            stats.capacity,
            stats.symbol_count,
            stats.occupied_buckets,
            stats.longest_chain,
            stats.load_factor
        )
    }

    fn dump(&mut self) -> io::Result<()> {
        match self.table.to_json() {
            Ok(json) => writeln!(self.out, "{}", json),
            Err(err) => writeln!(self.out, "ERROR: {}", err),
        }
    }
}
