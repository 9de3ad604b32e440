//! Logging configuration: compile-time message limit plus runtime preferences

use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::config::runtime::LoggingPreferences;
use crate::logging::events::LogLevel;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install runtime preferences; only the first call wins
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime logging preferences already initialized".to_string())
}

fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

pub fn get_min_log_level() -> LogLevel {
    get_runtime_preferences().min_log_level
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Whether events raised inside a file context carry file and line
pub fn include_file_context() -> bool {
    get_runtime_preferences().include_file_context
}

/// Maximum characters of a formatted console line
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}
