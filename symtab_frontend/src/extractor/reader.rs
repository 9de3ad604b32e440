//! Guarded file reading for declaration input

use super::error::LoadError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use symtab_core::config::compile_time::file_processing::{MAX_FILE_SIZE, MAX_LINE_COUNT};
use symtab_core::{log_debug, log_error};

/// Read a declaration file after checking path, size, encoding and line count
pub fn read_source(file_path: &str) -> Result<String, LoadError> {
    log_debug!("Reading declaration file", "file" => file_path);

    let path = validate_path(file_path)?;
    check_size(path, file_path)?;

    let bytes = fs::read(path).map_err(|e| {
        let error = io_error(e.kind(), file_path, &e.to_string());
        log_error!(error.error_code(), "Failed to read file",
            "path" => file_path,
            "io_error" => e);
        error
    })?;

    let source = String::from_utf8(bytes).map_err(|e| {
        let error = LoadError::InvalidEncoding {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "File is not valid UTF-8",
            "path" => file_path,
            "valid_up_to" => e.utf8_error().valid_up_to());
        error
    })?;

    let line_count = source.lines().count();
    if line_count > MAX_LINE_COUNT {
        let error = LoadError::TooManyLines {
            lines: line_count,
            max_lines: MAX_LINE_COUNT,
        };
        log_error!(error.error_code(), "File exceeds maximum line count",
            "path" => file_path,
            "lines" => line_count,
            "max_lines" => MAX_LINE_COUNT);
        return Err(error);
    }

    Ok(source)
}

fn validate_path(file_path: &str) -> Result<&Path, LoadError> {
    if file_path.trim().is_empty() {
        let error = LoadError::InvalidPath {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "Empty file path provided");
        return Err(error);
    }

    let path = Path::new(file_path);

    if !path.exists() {
        let error = LoadError::FileNotFound {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "File not found", "path" => file_path);
        return Err(error);
    }

    if !path.is_file() {
        let error = LoadError::InvalidPath {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "Path is not a file", "path" => file_path);
        return Err(error);
    }

    Ok(path)
}

fn check_size(path: &Path, file_path: &str) -> Result<(), LoadError> {
    let metadata = fs::metadata(path).map_err(|e| {
        let error = io_error(e.kind(), file_path, &e.to_string());
        log_error!(error.error_code(), "Failed to read file metadata",
            "path" => file_path,
            "io_error" => e);
        error
    })?;

    if metadata.len() > MAX_FILE_SIZE {
        let error = LoadError::FileTooLarge {
            size: metadata.len(),
            max_size: MAX_FILE_SIZE,
        };
        log_error!(error.error_code(), "File too large",
            "path" => file_path,
            "size_bytes" => metadata.len(),
            "max_size_bytes" => MAX_FILE_SIZE);
        return Err(error);
    }

    Ok(())
}

fn io_error(kind: ErrorKind, file_path: &str, message: &str) -> LoadError {
    match kind {
        ErrorKind::PermissionDenied => LoadError::PermissionDenied {
            path: file_path.to_string(),
        },
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: file_path.to_string(),
        },
        _ => LoadError::Io {
            message: format!("'{}': {}", file_path, message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_read_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "int x = 5;").unwrap();

        let source = read_source(file.path().to_str().unwrap()).unwrap();
        assert_eq!(source.trim(), "int x = 5;");
    }

    #[test]
    fn test_empty_path() {
        assert_matches!(read_source(""), Err(LoadError::InvalidPath { .. }));
    }

    #[test]
    fn test_missing_file() {
        assert_matches!(
            read_source("/no/such/declarations.txt"),
            Err(LoadError::FileNotFound { path }) if path == "/no/such/declarations.txt"
        );
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempdir().unwrap();
        assert_matches!(
            read_source(dir.path().to_str().unwrap()),
            Err(LoadError::InvalidPath { .. })
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x69, 0x6e, 0x74, 0x20, 0xff, 0xfe]).unwrap();

        assert_matches!(
            read_source(file.path().to_str().unwrap()),
            Err(LoadError::InvalidEncoding { .. })
        );
    }

    #[test]
    fn test_permission_mapping() {
        assert_matches!(
            io_error(ErrorKind::PermissionDenied, "locked.txt", "denied"),
            LoadError::PermissionDenied { .. }
        );
        assert_matches!(
            io_error(ErrorKind::Other, "odd.txt", "boom"),
            LoadError::Io { message } if message.contains("boom")
        );
    }
}
