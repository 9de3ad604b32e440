//! Global logging module for the symbol table
//!
//! Provides a thread-safe global logger, a per-thread file context used by the
//! declaration loader, and the `log_*!` macro family.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
#[cfg(feature = "log-facade")]
pub use service::FacadeLogger;
pub use service::{ConsoleLogger, Logger, LoggingService, NullLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// File currently being processed on this thread
#[derive(Debug, Clone, PartialEq)]
pub struct FileContext {
    pub file_path: PathBuf,
    pub line: Option<usize>,
}

thread_local! {
    static FILE_CONTEXT: RefCell<Option<FileContext>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from runtime preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    config::init_runtime_preferences(preferences.clone())?;

    let logging_service = Arc::new(service::create_configured_service());
    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with custom service (alternate sinks and tests)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// FILE CONTEXT MANAGEMENT
// ============================================================================

pub fn set_file_context(file_path: &Path) {
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(FileContext {
            file_path: file_path.to_path_buf(),
            line: None,
        });
    });
}

pub fn clear_file_context() {
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Record the line being processed; no-op outside a file context
pub fn set_current_line(line: usize) {
    FILE_CONTEXT.with(|ctx| {
        if let Some(file_ctx) = ctx.borrow_mut().as_mut() {
            file_ctx.line = Some(line);
        }
    });
}

/// Execute function with file context
pub fn with_file_context<F, R>(file_path: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_file_context(file_path);
    let result = f();
    clear_file_context();
    result
}

/// Get current file context (used by macros)
pub fn get_current_file_context() -> Option<FileContext> {
    FILE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

fn attach_file_context(mut event: LogEvent) -> LogEvent {
    if !config::include_file_context() {
        return event;
    }

    if let Some(file_ctx) = get_current_file_context() {
        event = event.with_context("file", &file_ctx.file_path.display().to_string());
        if event.line.is_none() {
            if let Some(line) = file_ctx.line {
                event = event.with_line(line);
            }
        }
    }

    event
}

fn dispatch(mut event: LogEvent, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(attach_file_context(event));
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    line: Option<usize>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);
    if let Some(line) = line {
        event = event.with_line(line);
    }
    dispatch(event, context);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::success(code, message), context);
}

pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::info(message), context);
}

pub fn log_warning_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::warning(message), context);
}

pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::debug(message), context);
}

/// Safe error logging (falls back to stderr if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_context_management() {
        let file_path = PathBuf::from("decls.txt");

        assert!(get_current_file_context().is_none());

        set_file_context(&file_path);
        set_current_line(7);
        let context = get_current_file_context().unwrap();
        assert_eq!(context.file_path, file_path);
        assert_eq!(context.line, Some(7));

        clear_file_context();
        assert!(get_current_file_context().is_none());
    }

    #[test]
    fn test_with_file_context() {
        let file_path = PathBuf::from("decls.txt");

        let result = with_file_context(&file_path, || {
            assert!(get_current_file_context().is_some());
            42
        });

        assert_eq!(result, 42);
        assert!(get_current_file_context().is_none());
    }

    #[test]
    fn test_set_line_outside_context_is_noop() {
        set_current_line(3);
        assert!(get_current_file_context().is_none());
    }

    #[test]
    fn test_attach_file_context() {
        let event = with_file_context(Path::new("input.txt"), || {
            set_current_line(12);
            attach_file_context(LogEvent::info("parsed"))
        });

        assert_eq!(event.context.get("file").map(String::as_str), Some("input.txt"));
        assert_eq!(event.line, Some(12));
    }

    #[test]
    fn test_logging_without_global_logger_does_not_panic() {
        log_error_with_context(codes::system::INTERNAL_ERROR, "Test error", Some(1), vec![]);
        log_info_with_context("Test info", vec![("key", "value")]);
        safe_log_error(codes::system::INTERNAL_ERROR, "Fallback error");
    }
}
