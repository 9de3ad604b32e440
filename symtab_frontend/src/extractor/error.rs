//! Errors raised while reading a declaration file

use symtab_core::logging::codes::{self, Code};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid file path: '{path}'")]
    InvalidPath { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("File exceeds maximum line count: {lines} (max: {max_lines})")]
    TooManyLines { lines: usize, max_lines: usize },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    Io { message: String },
}

impl LoadError {
    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::FileNotFound { .. } => codes::loader::FILE_NOT_FOUND,
            Self::PermissionDenied { .. } => codes::loader::PERMISSION_DENIED,
            Self::InvalidPath { .. } => codes::loader::INVALID_PATH,
            Self::FileTooLarge { .. } | Self::TooManyLines { .. } => codes::loader::FILE_TOO_LARGE,
            Self::InvalidEncoding { .. } => codes::loader::INVALID_ENCODING,
            Self::Io { .. } => codes::loader::IO_ERROR,
        }
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }
}
