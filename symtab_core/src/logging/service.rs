//! Logging service implementation

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::Arc;

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with level filtering
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service from the active runtime preferences
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        let logger: Arc<dyn Logger> = if !config::use_console_logging() {
            Arc::new(NullLogger)
        } else if config::use_structured_logging() {
            Arc::new(StructuredLogger::new(min_level))
        } else {
            Arc::new(ConsoleLogger::new(min_level))
        };

        Self::new(logger, min_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    /// Log an event
    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }

    pub fn log_error(&self, error_code: Code, message: &str) {
        self.log_event(LogEvent::error(error_code, message));
    }

    pub fn log_success(&self, success_code: Code, message: &str) {
        self.log_event(LogEvent::success(success_code, message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }

    pub fn log_debug(&self, message: &str) {
        self.log_event(LogEvent::debug(message));
    }
}

/// Discards every event
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Simple console logger, errors to stderr
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            // Diagnostics share stderr so they never interleave with command output
            eprintln!("{}", truncate_message(&event.format()));
        }
    }
}

/// Structured logger for JSON output and better tooling integration
pub struct StructuredLogger {
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            match event.format_json() {
                Ok(json) => eprintln!("{}", json),
                // Fallback to regular format if JSON serialization fails
                Err(_) => eprintln!("{}", truncate_message(&event.format())),
            }
        }
    }
}

/// Forwards events to the `log` facade
#[cfg(feature = "log-facade")]
pub struct FacadeLogger;

#[cfg(feature = "log-facade")]
impl Logger for FacadeLogger {
    fn log(&self, event: &LogEvent) {
        let level = match event.level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        };
        log::log!(target: "symtab", level, "{}", event.format());
    }
}

fn truncate_message(formatted: &str) -> String {
    let max = config::get_max_log_message_length();
    match formatted.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &formatted[..cut]),
        None => formatted.to_string(),
    }
}

/// Create logging service based on current configuration
pub fn create_configured_service() -> LoggingService {
    LoggingService::with_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use std::sync::Mutex;

    /// Collects events so tests can inspect what was emitted
    #[derive(Default)]
    struct MemoryLogger {
        events: Mutex<Vec<LogEvent>>,
    }

    impl MemoryLogger {
        fn codes(&self) -> Vec<Code> {
            self.events.lock().unwrap().iter().map(|e| e.code).collect()
        }
    }

    impl Logger for MemoryLogger {
        fn log(&self, event: &LogEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_log_level_filtering() {
        let logger = Arc::new(MemoryLogger::default());
        let service = LoggingService::new(logger.clone(), LogLevel::Error);

        service.log_debug("Debug message");
        service.log_info("Info message");
        service.log_error(codes::symbols::DUPLICATE_SYMBOL, "Duplicate");

        assert_eq!(logger.codes(), [codes::symbols::DUPLICATE_SYMBOL]);
    }

    #[test]
    fn test_success_passes_info_level() {
        let logger = Arc::new(MemoryLogger::default());
        let service = LoggingService::new(logger.clone(), LogLevel::Info);

        service.log_success(codes::success::SYMBOL_INSERTED, "Inserted");
        service.log_debug("not shown");

        assert_eq!(logger.codes(), [codes::success::SYMBOL_INSERTED]);
        assert!(service.should_log(LogLevel::Warning));
        assert!(!service.should_log(LogLevel::Debug));
    }

    #[test]
    fn test_unconfigured_service_is_silent() {
        let service = create_configured_service();
        assert_eq!(service.min_level(), config::get_min_log_level());
        service.log_error(codes::system::INTERNAL_ERROR, "dropped quietly");
    }

    #[test]
    fn test_truncate_message() {
        let long = "x".repeat(config::get_max_log_message_length() + 10);
        let truncated = truncate_message(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_message("short"), "short");
    }
}
