//! Configuration module for the symbol table
//!
//! Compile-time limits are generated by build.rs from `config/<profile>.toml`.
//! Runtime preferences live in [`runtime`] and are loaded from an optional TOML file.

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub use runtime::{ConfigError, LoaderPreferences, LoggingPreferences, RuntimeConfig, TablePreferences};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("SYMTAB_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("SYMTAB_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;
    use super::*;

    #[test]
    fn test_generated_limits_are_consistent() {
        assert!(symbols::MAX_NAME_LENGTH > 0);
        assert!(symbols::DEFAULT_BUCKET_COUNT > 0);
        assert!(symbols::DEFAULT_BUCKET_COUNT <= symbols::MAX_BUCKET_COUNT);
        assert!(file_processing::MAX_FILE_SIZE > 0);
        assert!(logging::MAX_LOG_MESSAGE_LENGTH > 0);
    }

    #[test]
    fn test_source_info() {
        assert!(build_info::source_info().ends_with(".toml"));
    }
}
