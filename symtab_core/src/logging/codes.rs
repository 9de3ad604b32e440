//! Consolidated error codes and classification system
//!
//! Single source of truth for all codes, their metadata, and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Validator error codes
pub mod validation {
    use super::Code;

    pub const INVALID_NAME: Code = Code::new("E100");
    pub const INVALID_TYPE: Code = Code::new("E101");
    pub const INVALID_VALUE: Code = Code::new("E102");
}

/// Symbol table error codes
pub mod symbols {
    use super::Code;

    pub const DUPLICATE_SYMBOL: Code = Code::new("E110");
    pub const SYMBOL_NOT_FOUND: Code = Code::new("E111");
    pub const TABLE_FULL: Code = Code::new("E112");
    pub const INVALID_CAPACITY: Code = Code::new("E113");
}

/// Declaration loader error codes
pub mod loader {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E200");
    pub const PERMISSION_DENIED: Code = Code::new("E201");
    pub const INVALID_PATH: Code = Code::new("E202");
    pub const FILE_TOO_LARGE: Code = Code::new("E203");
    pub const INVALID_ENCODING: Code = Code::new("E204");
    pub const IO_ERROR: Code = Code::new("E205");
}

/// Command interpreter error codes
pub mod commands {
    use super::Code;

    pub const MALFORMED_COMMAND: Code = Code::new("E300");
    pub const UNKNOWN_COMMAND: Code = Code::new("E301");
    pub const COMMAND_TOO_LONG: Code = Code::new("E302");
    pub const INVALID_INPUT_ENCODING: Code = Code::new("E303");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const TABLE_CREATED: Code = Code::new("I010");
    pub const SYMBOL_INSERTED: Code = Code::new("I050");
    pub const FILE_LOADED: Code = Code::new("I060");
    pub const SCENARIOS_COMPLETED: Code = Code::new("I070");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the failing input",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Initialization failure",
                "Check configuration files and command-line arguments",
            ),
            // Validation
            ErrorMetadata::new(
                "E100",
                "Validation",
                Severity::Medium,
                true,
                "Symbol name is empty, too long, or contains invalid characters",
                "Use a letter or underscore first, then letters, digits or underscores",
            ),
            ErrorMetadata::new(
                "E101",
                "Validation",
                Severity::Medium,
                true,
                "Type is not a supported primitive type",
                "Use one of the primitive type spellings (e.g. int, unsigned long, string)",
            ),
            ErrorMetadata::new(
                "E102",
                "Validation",
                Severity::Medium,
                true,
                "Value literal does not match the declared type",
                "Provide a literal of the declared type or leave the value empty",
            ),
            // Symbols
            ErrorMetadata::new(
                "E110",
                "Symbols",
                Severity::Medium,
                true,
                "Symbol name already declared",
                "Choose a different name; existing symbols are never overwritten",
            ),
            ErrorMetadata::new(
                "E111",
                "Symbols",
                Severity::Low,
                true,
                "Symbol not found",
                "Check the spelling; names are case-sensitive",
            ),
            ErrorMetadata::new(
                "E112",
                "Symbols",
                Severity::High,
                true,
                "Symbol table reached its maximum symbol count",
                "Raise max_symbols in the build configuration",
            ),
            ErrorMetadata::new(
                "E113",
                "Symbols",
                Severity::High,
                true,
                "Invalid bucket count requested",
                "Use a bucket count between 1 and the configured maximum",
            ),
            // Loader
            ErrorMetadata::new(
                "E200",
                "Loader",
                Severity::High,
                true,
                "Input file not found",
                "Check the path passed to load",
            ),
            ErrorMetadata::new(
                "E201",
                "Loader",
                Severity::High,
                true,
                "Permission denied reading input file",
                "Check file permissions",
            ),
            ErrorMetadata::new(
                "E202",
                "Loader",
                Severity::High,
                true,
                "Invalid input path",
                "Pass a path to a regular file",
            ),
            ErrorMetadata::new(
                "E203",
                "Loader",
                Severity::High,
                true,
                "Input file exceeds size or line limits",
                "Split the input into smaller files",
            ),
            ErrorMetadata::new(
                "E204",
                "Loader",
                Severity::High,
                true,
                "Input file is not valid UTF-8",
                "Convert the file to UTF-8",
            ),
            ErrorMetadata::new(
                "E205",
                "Loader",
                Severity::High,
                true,
                "I/O error while reading input file",
                "Retry or check the underlying storage",
            ),
            // Commands
            ErrorMetadata::new(
                "E300",
                "Commands",
                Severity::Low,
                true,
                "Command is missing required arguments",
                "Type help for command usage",
            ),
            ErrorMetadata::new(
                "E301",
                "Commands",
                Severity::Low,
                true,
                "Unknown command",
                "Type help for the list of commands",
            ),
            ErrorMetadata::new(
                "E302",
                "Commands",
                Severity::Low,
                true,
                "Command line exceeds the maximum length",
                "Shorten the command",
            ),
            ErrorMetadata::new(
                "E303",
                "Commands",
                Severity::Low,
                true,
                "Command line is not valid UTF-8",
                "Re-enter the command as UTF-8 text",
            ),
            // Success
            ErrorMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I010",
                "Symbols",
                Severity::Low,
                true,
                "Symbol table created",
                "No action required",
            ),
            ErrorMetadata::new(
                "I050",
                "Symbols",
                Severity::Low,
                true,
                "Symbol inserted",
                "No action required",
            ),
            ErrorMetadata::new(
                "I060",
                "Loader",
                Severity::Low,
                true,
                "Input file loaded",
                "No action required",
            ),
            ErrorMetadata::new(
                "I070",
                "Scenarios",
                Severity::Low,
                true,
                "Self-test scenarios completed",
                "No action required",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_metadata() {
        let all = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            validation::INVALID_NAME,
            validation::INVALID_TYPE,
            validation::INVALID_VALUE,
            symbols::DUPLICATE_SYMBOL,
            symbols::SYMBOL_NOT_FOUND,
            symbols::TABLE_FULL,
            symbols::INVALID_CAPACITY,
            loader::FILE_NOT_FOUND,
            loader::PERMISSION_DENIED,
            loader::INVALID_PATH,
            loader::FILE_TOO_LARGE,
            loader::INVALID_ENCODING,
            loader::IO_ERROR,
            commands::MALFORMED_COMMAND,
            commands::UNKNOWN_COMMAND,
            commands::COMMAND_TOO_LONG,
            commands::INVALID_INPUT_ENCODING,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::TABLE_CREATED,
            success::SYMBOL_INSERTED,
            success::FILE_LOADED,
            success::SCENARIOS_COMPLETED,
        ];

        for code in all {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(get_category("E110"), "Symbols");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(!is_recoverable("ERR001"));
        assert!(is_recoverable("E100"));
    }

    #[test]
    fn test_unknown_code_fallbacks() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_category("Z999"), "Unknown");
        assert_eq!(get_severity("Z999"), Severity::Medium);
    }
}
