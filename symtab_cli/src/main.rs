//! # symtab CLI
//!
//! Interactive front end for the symbol table: reads one command per line
//! from stdin or a script file.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use symtab_core::config::{ConfigError, RuntimeConfig};
use symtab_core::logging::{self, codes, FacadeLogger, LogLevel, LoggingService};
use symtab_core::{log_info, log_success, SymbolError, SymbolTable};
use symtab_frontend::interpreter::write_banner;
use symtab_frontend::{run_scenarios, DeclarationExtractor, Interpreter};

#[derive(Parser, Debug)]
#[command(name = "symtab", version, about = "Hash-chained symbol table with declaration validation")]
struct Args {
    /// Number of hash buckets (overrides the config file)
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Runtime preferences TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Declaration file to load before reading commands (repeatable)
    #[arg(short, long = "load", value_name = "FILE")]
    load: Vec<String>,

    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Run the self-test scenarios and exit
    #[arg(long)]
    run_tests: bool,

    /// Emit diagnostics to stderr at this level and above
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Emit diagnostics as JSON lines
    #[arg(long)]
    structured_logs: bool,

    /// Route diagnostics through the `log` facade (env_logger backend)
    #[arg(long)]
    log_facade: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevelArg> for LogLevel {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warning,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] SymbolError),

    #[error("Failed to open script '{path}': {source}")]
    Script { path: String, source: io::Error },

    #[error("Logging initialization failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Merge command-line overrides into the file preferences
fn apply_overrides(mut config: RuntimeConfig, args: &Args) -> Result<RuntimeConfig, ConfigError> {
    if let Some(capacity) = args.capacity {
        config.table.bucket_count = capacity;
    }

    if let Some(level) = args.log_level {
        config.logging.min_log_level = level.into();
        config.logging.enable_console_logging = true;
    }

    if args.structured_logs {
        config.logging.use_structured_logging = true;
        config.logging.enable_console_logging = true;
    }

    config.validate()?;
    Ok(config)
}

fn load_config(args: &Args) -> Result<RuntimeConfig, ConfigError> {
    let config = match &args.config {
        Some(path) => RuntimeConfig::from_file(path)?,
        None => RuntimeConfig::default(),
    };
    apply_overrides(config, args)
}

fn to_level_filter(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warning => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
    }
}

fn init_logging(config: &RuntimeConfig, use_facade: bool) -> Result<(), CliError> {
    if !use_facade {
        return logging::init_global_logging(&config.logging).map_err(CliError::Logging);
    }

    let level = config.logging.min_log_level;
    env_logger::Builder::new()
        .filter_level(to_level_filter(level))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    logging::config::init_runtime_preferences(config.logging.clone()).map_err(CliError::Logging)?;
    logging::init_global_logging_with_service(Arc::new(LoggingService::new(
        Arc::new(FacadeLogger),
        level,
    )))
    .map_err(CliError::Logging)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    init_logging(&config, args.log_facade)?;
    log_info!("symtab starting", "buckets" => config.table.bucket_count);

    let stdout = io::stdout();

    if args.run_tests {
        let report = run_scenarios(&mut stdout.lock())?;
        log_info!("Scenario run finished", "passed" => report.passed(), "total" => report.total());
        return Ok(());
    }

    let mut table = SymbolTable::from_preferences(&config.table)?;
    log_success!(
        codes::success::TABLE_CREATED,
        "Symbol table created",
        "buckets" => table.capacity()
    );

    if args.script.is_none() && io::stdin().is_terminal() {
        write_banner(&mut stdout.lock())?;
    }

    let extractor = DeclarationExtractor::from_preferences(&config.loader);
    let mut interpreter = Interpreter::with_extractor(&mut table, extractor, stdout.lock());

    for path in &args.load {
        interpreter.load(path)?;
    }

    match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Script {
                path: path.display().to_string(),
                source,
            })?;
            interpreter.run(BufReader::new(file))?;
        }
        None => interpreter.run(io::stdin().lock())?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &err.to_string());
            let _ = writeln!(io::stderr(), "Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write as _;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["symtab"]);
        assert!(args.capacity.is_none());
        assert!(args.load.is_empty());
        assert!(!args.run_tests);
        assert!(!args.log_facade);
    }

    #[test]
    fn test_repeatable_load() {
        let args = parse(&["symtab", "--load", "a.c", "-l", "b.c", "--run-tests"]);
        assert_eq!(args.load, ["a.c", "b.c"]);
        assert!(args.run_tests);
    }

    #[test]
    fn test_log_level_values() {
        let args = parse(&["symtab", "--log-level", "warn"]);
        assert_eq!(args.log_level, Some(LogLevelArg::Warn));
        assert!(Args::try_parse_from(["symtab", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let args = parse(&["symtab", "--capacity", "17", "--log-level", "debug", "--structured-logs"]);
        let config = apply_overrides(RuntimeConfig::default(), &args).unwrap();

        assert_eq!(config.table.bucket_count, 17);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(config.logging.enable_console_logging);
        assert!(config.logging.use_structured_logging);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let args = parse(&["symtab", "--capacity", "0"]);
        assert_matches!(
            apply_overrides(RuntimeConfig::default(), &args),
            Err(ConfigError::InvalidValue { field: "table.bucket_count", .. })
        );
    }

    #[test]
    fn test_config_file_then_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[table]\nbucket_count = 5\n\n[loader]\nreport_rejections = false").unwrap();

        let path = file.path().display().to_string();
        let args = parse(&["symtab", "--config", path.as_str(), "--capacity", "9"]);
        let config = load_config(&args).unwrap();

        assert_eq!(config.table.bucket_count, 9);
        assert!(!config.loader.report_rejections);
    }

    #[test]
    fn test_missing_config_file() {
        let args = parse(&["symtab", "--config", "/no/such/symtab.toml"]);
        assert_matches!(load_config(&args), Err(ConfigError::Unreadable { .. }));
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(to_level_filter(LogLevel::Warning), log::LevelFilter::Warn);
        assert_eq!(to_level_filter(LogLevel::Debug), log::LevelFilter::Debug);
    }
}
