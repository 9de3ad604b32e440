//! Feeding extracted declarations into a symbol table

use super::error::LoadError;
use super::pattern::extract_declaration;
use super::reader::read_source;
use serde::Serialize;
use std::path::Path;
use symtab_core::config::LoaderPreferences;
use symtab_core::logging::{self, codes};
use symtab_core::{log_debug, log_success, log_warning, SymbolError, SymbolTable};

/// An insert the table refused
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEntry {
    /// 1-based source line
    pub line: usize,
    pub name: String,
    pub error: SymbolError,
}

/// Outcome of loading one source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub lines_read: usize,
    /// Blank and comment lines
    pub lines_skipped: usize,
    pub declarations_matched: usize,
    pub symbols_inserted: usize,
    pub rejected: Vec<RejectedEntry>,
}

impl LoadReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    fn record(&mut self, line: usize, name: &str, result: Result<(), SymbolError>) {
        match result {
            Ok(()) => self.symbols_inserted += 1,
            Err(error) => self.rejected.push(RejectedEntry {
                line,
                name: name.to_string(),
                error,
            }),
        }
    }
}

/// Counters attached to the file-loaded event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub declarations_matched: usize,
    pub symbols_inserted: usize,
    pub rejected: usize,
}

impl From<&LoadReport> for LoadSummary {
    fn from(report: &LoadReport) -> Self {
        Self {
            lines_read: report.lines_read,
            lines_skipped: report.lines_skipped,
            declarations_matched: report.declarations_matched,
            symbols_inserted: report.symbols_inserted,
            rejected: report.rejected_count(),
        }
    }
}

impl LoadSummary {
    /// Compact JSON object of the counters
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Scans source-like text and inserts every declaration it recognizes
#[derive(Debug, Clone, Default)]
pub struct DeclarationExtractor {
    preferences: LoaderPreferences,
}

impl DeclarationExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_preferences(preferences: &LoaderPreferences) -> Self {
        Self {
            preferences: preferences.clone(),
        }
    }

    pub fn preferences(&self) -> &LoaderPreferences {
        &self.preferences
    }

    /// Read a file and load its declarations
    pub fn load_file(&self, file_path: &str, table: &mut SymbolTable) -> Result<LoadReport, LoadError> {
        let source = read_source(file_path)?;

        let report = logging::with_file_context(Path::new(file_path), || {
            self.load_source(&source, table)
        });

        if !report.is_clean() {
            log_warning!(
                "Declaration file had rejected entries",
                "file" => file_path,
                "rejected" => report.rejected_count()
            );
        }

        log_success!(
            codes::success::FILE_LOADED,
            "Declaration file loaded",
            "file" => file_path,
            "summary" => LoadSummary::from(&report).to_json()
        );

        Ok(report)
    }

    /// Load declarations from in-memory text
    ///
    /// Each line is trimmed; blank lines and comment lines are skipped. The
    /// primary declaration is inserted first, then each parameter without a value.
    pub fn load_source(&self, source: &str, table: &mut SymbolTable) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, raw_line) in source.lines().enumerate() {
            let line_number = index + 1;
            report.lines_read += 1;
            logging::set_current_line(line_number);

            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(self.preferences.comment_prefix.as_str()) {
                report.lines_skipped += 1;
                continue;
            }

            let Some(declaration) = extract_declaration(line) else {
                log_debug!("No declaration on line", "line" => line_number);
                continue;
            };
            report.declarations_matched += 1;

            let result = table.insert(&declaration.name, &declaration.type_name, &declaration.value);
            report.record(line_number, &declaration.name, result);

            for parameter in &declaration.parameters {
                let result = table.insert(&parameter.name, &parameter.type_name, "");
                report.record(line_number, &parameter.name, result);
            }
        }

        report
    }
}

/// Load a file with default loader preferences
pub fn load_file(file_path: &str, table: &mut SymbolTable) -> Result<LoadReport, LoadError> {
    DeclarationExtractor::new().load_file(file_path, table)
}

/// Load in-memory text with default loader preferences
pub fn load_source(source: &str, table: &mut SymbolTable) -> LoadReport {
    DeclarationExtractor::new().load_source(source, table)
}
