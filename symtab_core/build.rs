// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    symbols: SymbolLimits,
    file_processing: FileProcessingLimits,
    interpreter: InterpreterLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct SymbolLimits {
    max_name_length: usize,
    default_bucket_count: usize,
    max_bucket_count: usize,
    max_symbols: usize,
}

#[derive(serde::Deserialize)]
struct FileProcessingLimits {
    max_file_size: u64,
    max_line_count: usize,
}

#[derive(serde::Deserialize)]
struct InterpreterLimits {
    max_command_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SYMTAB_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=SYMTAB_CONFIG_DIR");

    let profile = env::var("SYMTAB_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("SYMTAB_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of symtab_core
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());
    println!("cargo:rustc-env=SYMTAB_BUILD_PROFILE={}", profile);
    println!("cargo:rustc-env=SYMTAB_CONFIG_DIR={}", config_dir);

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_NAME_LENGTH: usize = 255;
    const ABSOLUTE_MAX_FILE_SIZE: u64 = 1_000_000_000;
    const ABSOLUTE_MAX_BUCKETS: usize = 1 << 24;

    if config.symbols.max_name_length == 0
        || config.symbols.max_name_length > ABSOLUTE_MAX_NAME_LENGTH
    {
        panic!("LIMITS: max_name_length must be in 1..={}", ABSOLUTE_MAX_NAME_LENGTH);
    }

    if config.symbols.default_bucket_count == 0 {
        panic!("LIMITS: default_bucket_count must be at least 1");
    }

    if config.symbols.max_bucket_count > ABSOLUTE_MAX_BUCKETS {
        panic!("LIMITS: max_bucket_count exceeds absolute maximum");
    }

    if config.symbols.default_bucket_count > config.symbols.max_bucket_count {
        panic!("LIMITS: default_bucket_count exceeds max_bucket_count");
    }

    if config.file_processing.max_file_size > ABSOLUTE_MAX_FILE_SIZE {
        panic!("LIMITS: max_file_size exceeds absolute maximum");
    }

    if config.logging.max_log_message_length == 0 {
        panic!("LIMITS: max_log_message_length must be at least 1");
    }

    if profile == "production" && config.file_processing.max_file_size > 50_000_000 {
        panic!("PRODUCTION: max_file_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod symbols {{
        pub const MAX_NAME_LENGTH: usize = {};
        pub const DEFAULT_BUCKET_COUNT: usize = {};
        pub const MAX_BUCKET_COUNT: usize = {};
        pub const MAX_SYMBOLS: usize = {};
    }}

    pub mod file_processing {{
        pub const MAX_FILE_SIZE: u64 = {};
        pub const MAX_LINE_COUNT: usize = {};
    }}

    pub mod interpreter {{
        pub const MAX_COMMAND_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Symbols
        config.symbols.max_name_length,
        config.symbols.default_bucket_count,
        config.symbols.max_bucket_count,
        config.symbols.max_symbols,
        // File processing
        config.file_processing.max_file_size,
        config.file_processing.max_line_count,
        // Interpreter
        config.interpreter.max_command_length,
        // Logging
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
