//! Command line parsing

use symtab_core::config::compile_time::interpreter::MAX_COMMAND_LENGTH;
use symtab_core::logging::codes::{self, Code};
use symtab_core::PrimitiveType;

/// One parsed interpreter command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert {
        name: String,
        type_name: String,
        value: String,
    },
    Find {
        name: String,
    },
    Get {
        name: String,
    },
    Load {
        path: String,
    },
    RunTests,
    Stats,
    Dump,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Invalid input format. Usage: {usage}")]
    Malformed {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Unknown command.")]
    Unknown { command: String },

    #[error("Command is {length} characters long (max: {max})")]
    TooLong { length: usize, max: usize },

    #[error("Command is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },
}

impl CommandError {
    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Empty | Self::Malformed { .. } => codes::commands::MALFORMED_COMMAND,
            Self::Unknown { .. } => codes::commands::UNKNOWN_COMMAND,
            Self::TooLong { .. } => codes::commands::COMMAND_TOO_LONG,
            Self::InvalidEncoding { .. } => codes::commands::INVALID_INPUT_ENCODING,
        }
    }
}

/// Usage line for each command, in help order
pub const USAGE: [(&str, &str); 9] = [
    ("insert", "insert <symbol_name> <symbol_type> <symbol_value>"),
    ("find", "find <symbol_name>"),
    ("get", "get <symbol_name>"),
    ("load", "load <input_file_name>"),
    ("run", "run tests"),
    ("stats", "stats"),
    ("dump", "dump"),
    ("help", "help"),
    ("exit", "exit"),
];

fn usage_of(command: &'static str) -> &'static str {
    USAGE
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, usage)| *usage)
        .unwrap_or(command)
}

fn malformed(command: &'static str) -> CommandError {
    CommandError::Malformed {
        command,
        usage: usage_of(command),
    }
}

/// Whitespace-separated tokens with their byte offsets
fn tokenize(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (index, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(begin)) => {
                tokens.push((begin, &line[begin..index]));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }

    if let Some(begin) = start {
        tokens.push((begin, &line[begin..]));
    }

    tokens
}

/// Text after the token at `index`, trimmed
fn rest_after(line: &str, tokens: &[(usize, &str)], index: usize) -> String {
    let (offset, token) = tokens[index];
    line[offset + token.len()..].trim().to_string()
}

fn exactly_one(tokens: &[(usize, &str)], command: &'static str) -> Result<String, CommandError> {
    match tokens {
        [_, (_, argument)] => Ok(argument.to_string()),
        _ => Err(malformed(command)),
    }
}

fn no_arguments(tokens: &[(usize, &str)], command: &'static str, parsed: Command) -> Result<Command, CommandError> {
    if tokens.len() == 1 {
        Ok(parsed)
    } else {
        Err(malformed(command))
    }
}

fn parse_insert(line: &str, tokens: &[(usize, &str)]) -> Result<Command, CommandError> {
    if tokens.len() < 3 {
        return Err(malformed("insert"));
    }

    let name = tokens[1].1.to_string();
    let words: Vec<&str> = tokens[2..].iter().map(|(_, word)| *word).collect();

    // Longest known multi-word spelling wins; otherwise the next word is the type
    let (type_name, type_words) = match PrimitiveType::match_leading_words(&words) {
        Some((data_type, count)) => (data_type.as_str().to_string(), count),
        None => (words[0].to_string(), 1),
    };

    let value = rest_after(line, tokens, 1 + type_words);

    Ok(Command::Insert {
        name,
        type_name,
        value,
    })
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let length = line.chars().count();
    if length > MAX_COMMAND_LENGTH {
        return Err(CommandError::TooLong {
            length,
            max: MAX_COMMAND_LENGTH,
        });
    }

    let tokens = tokenize(line);
    let Some(&(_, keyword)) = tokens.first() else {
        return Err(CommandError::Empty);
    };

    match keyword {
        "insert" => parse_insert(line, &tokens),
        "find" => exactly_one(&tokens, "find").map(|name| Command::Find { name }),
        "get" => exactly_one(&tokens, "get").map(|name| Command::Get { name }),
        "load" => {
            let path = rest_after(line, &tokens, 0);
            if path.is_empty() {
                Err(malformed("load"))
            } else {
                Ok(Command::Load { path })
            }
        }
        "run" => match tokens.as_slice() {
            [_, (_, "tests")] => Ok(Command::RunTests),
            _ => Err(malformed("run")),
        },
        "stats" => no_arguments(&tokens, "stats", Command::Stats),
        "dump" => no_arguments(&tokens, "dump", Command::Dump),
        "help" => no_arguments(&tokens, "help", Command::Help),
        "exit" => no_arguments(&tokens, "exit", Command::Exit),
        other => Err(CommandError::Unknown {
            command: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn insert(name: &str, type_name: &str, value: &str) -> Command {
        Command::Insert {
            name: name.to_string(),
            type_name: type_name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_insert_simple() {
        assert_eq!(parse_command("insert x int 5"), Ok(insert("x", "int", "5")));
    }

    #[test]
    fn test_insert_value_keeps_inner_whitespace() {
        assert_eq!(
            parse_command("insert msg string \"hello   world\"  "),
            Ok(insert("msg", "string", "\"hello   world\""))
        );
    }

    #[test]
    fn test_insert_multi_word_type() {
        assert_eq!(
            parse_command("insert n unsigned   long long 7"),
            Ok(insert("n", "unsigned long long", "7"))
        );
        assert_eq!(
            parse_command("insert d long double"),
            Ok(insert("d", "long double", ""))
        );
    }

    #[test]
    fn test_insert_unknown_type_passes_through() {
        assert_eq!(
            parse_command("insert x invalid 5"),
            Ok(insert("x", "invalid", "5"))
        );
    }

    #[test]
    fn test_insert_without_value() {
        assert_eq!(parse_command("insert flag bool"), Ok(insert("flag", "bool", "")));
    }

    #[test]
    fn test_insert_missing_type() {
        assert_matches!(
            parse_command("insert x"),
            Err(CommandError::Malformed { command: "insert", .. })
        );
    }

    #[test]
    fn test_lookup_commands() {
        assert_eq!(
            parse_command("find y"),
            Ok(Command::Find {
                name: "y".to_string()
            })
        );
        assert_eq!(
            parse_command("  get   x "),
            Ok(Command::Get {
                name: "x".to_string()
            })
        );
        assert_matches!(parse_command("find"), Err(CommandError::Malformed { .. }));
        assert_matches!(parse_command("get a b"), Err(CommandError::Malformed { .. }));
    }

    #[test]
    fn test_load_path_with_spaces() {
        assert_eq!(
            parse_command("load my decls.c"),
            Ok(Command::Load {
                path: "my decls.c".to_string()
            })
        );
        assert_matches!(parse_command("load"), Err(CommandError::Malformed { command: "load", .. }));
    }

    #[test]
    fn test_run_tests() {
        assert_eq!(parse_command("run tests"), Ok(Command::RunTests));
        assert_matches!(parse_command("run"), Err(CommandError::Malformed { usage: "run tests", .. }));
        assert_matches!(parse_command("run all"), Err(CommandError::Malformed { .. }));
    }

    #[test]
    fn test_nullary_commands() {
        assert_eq!(parse_command("exit"), Ok(Command::Exit));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("stats"), Ok(Command::Stats));
        assert_eq!(parse_command("dump"), Ok(Command::Dump));
        assert_matches!(parse_command("exit now"), Err(CommandError::Malformed { .. }));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse_command(""), Err(CommandError::Empty));
        assert_eq!(parse_command("   \t"), Err(CommandError::Empty));
        assert_matches!(
            parse_command("delete x"),
            Err(CommandError::Unknown { command }) if command == "delete"
        );
        assert_matches!(parse_command("INSERT x int 5"), Err(CommandError::Unknown { .. }));
    }

    #[test]
    fn test_too_long() {
        let line = format!("find {}", "a".repeat(MAX_COMMAND_LENGTH));
        assert_matches!(parse_command(&line), Err(CommandError::TooLong { .. }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            malformed("find").to_string(),
            "Invalid input format. Usage: find <symbol_name>"
        );
        assert_eq!(
            CommandError::Unknown {
                command: "x".to_string()
            }
            .to_string(),
            "Unknown command."
        );
    }

    #[test]
    fn test_encoding_error_code() {
        let err = CommandError::InvalidEncoding { offset: 5 };
        assert_eq!(err.error_code(), codes::commands::INVALID_INPUT_ENCODING);
        assert!(err.to_string().contains("offset 5"));
    }
}
