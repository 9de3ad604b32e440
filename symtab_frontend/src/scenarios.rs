//! Self-test scenarios run by the `run tests` command
//!
//! The scenarios share one fresh table and run in order, so later checks see
//! the symbols earlier ones inserted.

use serde::Serialize;
use std::io::{self, Write};
use symtab_core::logging::codes;
use symtab_core::validation::{NameViolation, ValidationError};
use symtab_core::{log_success, PrimitiveType, SymbolError, SymbolTable};

type Check = fn(&mut SymbolTable) -> Result<String, String>;

struct Scenario {
    title: &'static str,
    check: Check,
}

const LONG_NAME: &str = "this_symbol_name_is_too_too_too_too_too_long";

const SCENARIOS: [Scenario; 13] = [
    Scenario {
        title: "Insert a new symbol into an empty symbol table",
        check: insert_into_empty,
    },
    Scenario {
        title: "Insert a symbol that already exists in the table",
        check: insert_duplicate,
    },
    Scenario {
        title: "Find a symbol that exists in the table",
        check: find_existing,
    },
    Scenario {
        title: "Find a symbol that does not exist in the table",
        check: find_missing,
    },
    Scenario {
        title: "Get the information of a symbol that exists in the table",
        check: get_existing,
    },
    Scenario {
        title: "Get the information of a symbol that does not exist in the table",
        check: get_missing,
    },
    Scenario {
        title: "Collision handling with multiple symbols",
        check: collisions,
    },
    Scenario {
        title: "Reject a symbol with an invalid data type",
        check: invalid_type,
    },
    Scenario {
        title: "Reject a symbol with an invalid value",
        check: invalid_value,
    },
    Scenario {
        title: "Reject a symbol name with special characters",
        check: name_with_special_characters,
    },
    Scenario {
        title: "Reject a symbol name that is too long",
        check: name_too_long,
    },
    Scenario {
        title: "Symbol names are case-sensitive",
        check: case_sensitivity,
    },
    Scenario {
        title: "Symbol names cannot start with a digit",
        check: leading_digit,
    },
];

fn expect_inserted(table: &mut SymbolTable, name: &str, type_name: &str, value: &str) -> Result<(), String> {
    table
        .insert(name, type_name, value)
        .map_err(|err| format!("insert {} {} {} failed: {}", name, type_name, value, err))
}

fn expect_rejected<F>(table: &mut SymbolTable, name: &str, type_name: &str, value: &str, matches: F) -> Result<String, String>
where
    F: Fn(&SymbolError) -> bool,
{
    match table.insert(name, type_name, value) {
        Err(err) if matches(&err) => Ok(format!("rejected: {}", err)),
        Err(err) => Err(format!("rejected for the wrong reason: {}", err)),
        Ok(()) => Err(format!("insert {} {} {} was accepted", name, type_name, value)),
    }
}

fn insert_into_empty(table: &mut SymbolTable) -> Result<String, String> {
    expect_inserted(table, "x", "int", "5")?;
    Ok("inserted x".to_string())
}

fn insert_duplicate(table: &mut SymbolTable) -> Result<String, String> {
    expect_inserted(table, "y", "float", "2.5")?;
    let detail = expect_rejected(table, "y", "int", "5", |err| {
        matches!(err, SymbolError::DuplicateSymbol { .. })
    })?;

    match table.find("y") {
        Some(symbol) if symbol.data_type == PrimitiveType::Float => Ok(detail),
        _ => Err("original symbol y was not preserved".to_string()),
    }
}

fn find_existing(table: &mut SymbolTable) -> Result<String, String> {
    table
        .find("y")
        .map(|_| "Symbol found.".to_string())
        .ok_or_else(|| "y not found".to_string())
}

fn find_missing(table: &mut SymbolTable) -> Result<String, String> {
    match table.find("z") {
        None => Ok("Symbol not found.".to_string()),
        Some(symbol) => Err(format!("unexpected symbol {}", symbol)),
    }
}

fn get_existing(table: &mut SymbolTable) -> Result<String, String> {
    let symbol = table.get("x").map_err(|err| err.to_string())?;
    if symbol.data_type == PrimitiveType::Int && symbol.value == "5" {
        Ok(symbol.to_string())
    } else {
        Err(format!("unexpected contents: {}", symbol))
    }
}

fn get_missing(table: &mut SymbolTable) -> Result<String, String> {
    match table.get("z") {
        Err(err @ SymbolError::NotFound { .. }) => Ok(err.to_string()),
        Err(err) => Err(format!("wrong error: {}", err)),
        Ok(symbol) => Err(format!("unexpected symbol {}", symbol)),
    }
}

fn collisions(table: &mut SymbolTable) -> Result<String, String> {
    let entries = [("a", "int", "1"), ("b", "float", "2"), ("c", "string", "3")];

    for (name, type_name, value) in entries {
        expect_inserted(table, name, type_name, value)?;
    }
    if let Some((name, _, _)) = entries.iter().find(|(name, _, _)| !table.contains(name)) {
        return Err(format!("{} not findable after insert", name));
    }

    // Force every name into one chain
    let mut single = SymbolTable::with_capacity(1).map_err(|err| err.to_string())?;
    for (name, type_name, value) in entries {
        expect_inserted(&mut single, name, type_name, value)?;
    }

    let chain: Vec<&str> = single.chain(0).iter().map(|s| s.name.as_str()).collect();
    if chain != ["a", "b", "c"] {
        return Err(format!("single-bucket chain out of order: {:?}", chain));
    }

    Ok("a, b, c findable; shared chain keeps insertion order".to_string())
}

fn invalid_type(table: &mut SymbolTable) -> Result<String, String> {
    expect_rejected(table, "x", "invalid", "5", |err| {
        matches!(err, SymbolError::Validation(ValidationError::InvalidType { .. }))
    })
}

fn invalid_value(table: &mut SymbolTable) -> Result<String, String> {
    expect_rejected(table, "x", "int", "invalid_value", |err| {
        matches!(err, SymbolError::Validation(ValidationError::InvalidValue { .. }))
    })
}

fn name_with_special_characters(table: &mut SymbolTable) -> Result<String, String> {
    expect_rejected(table, "x#", "int", "10", |err| {
        matches!(
            err,
            SymbolError::Validation(ValidationError::InvalidName {
                violation: NameViolation::InvalidCharacter(_),
                ..
            })
        )
    })
}

fn name_too_long(table: &mut SymbolTable) -> Result<String, String> {
    expect_rejected(table, LONG_NAME, "int", "10", |err| {
        matches!(
            err,
            SymbolError::Validation(ValidationError::InvalidName {
                violation: NameViolation::TooLong { .. },
                ..
            })
        )
    })
}

fn case_sensitivity(table: &mut SymbolTable) -> Result<String, String> {
    expect_inserted(table, "CaseSENSITIVE", "string", "CaseSENSISTIVEValue")?;

    if table.get("CaseSENSITIVE").is_err() {
        return Err("CaseSENSITIVE not found".to_string());
    }
    if table.get("casesensitive").is_ok() {
        return Err("casesensitive matched a differently-cased name".to_string());
    }

    Ok("CaseSENSITIVE found, casesensitive not found".to_string())
}

fn leading_digit(table: &mut SymbolTable) -> Result<String, String> {
    expect_rejected(table, "5", "int", "15", |err| {
        matches!(
            err,
            SymbolError::Validation(ValidationError::InvalidName {
                violation: NameViolation::InvalidFirstCharacter(_),
                ..
            })
        )
    })
}

/// Outcome of one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub number: usize,
    pub title: &'static str,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Run every scenario on a fresh table, narrating to `out`
pub fn run_scenarios<W: Write>(out: &mut W) -> io::Result<ScenarioReport> {
    let mut table = SymbolTable::new();
    let mut report = ScenarioReport::default();

    for (index, scenario) in SCENARIOS.iter().enumerate() {
        let number = index + 1;
        writeln!(out)?;
        writeln!(out, "Test {}: {}", number, scenario.title)?;

        let (passed, detail) = match (scenario.check)(&mut table) {
            Ok(detail) => (true, detail),
            Err(detail) => (false, detail),
        };
        writeln!(out, "{}: {}", if passed { "PASS" } else { "FAIL" }, detail)?;

        report.outcomes.push(ScenarioOutcome {
            number,
            title: scenario.title,
            passed,
            detail,
        });
    }

    writeln!(out)?;
    writeln!(out, "{}/{} scenarios passed", report.passed(), report.total())?;

    log_success!(
        codes::success::SCENARIOS_COMPLETED,
        "Self-test scenarios completed",
        "passed" => report.passed(),
        "total" => report.total()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scenarios_pass() {
        let mut out = Vec::new();
        let report = run_scenarios(&mut out).unwrap();

        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "failed: {:?}", failures);
        assert_eq!(report.total(), 13);
    }

    #[test]
    fn test_narration_format() {
        let mut out = Vec::new();
        run_scenarios(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Test 1: Insert a new symbol into an empty symbol table\nPASS: inserted x"));
        assert!(text.contains("Test 13: Symbol names cannot start with a digit\nPASS: rejected:"));
        assert!(text.trim_end().ends_with("13/13 scenarios passed"));
    }

    #[test]
    fn test_long_name_exceeds_limit() {
        use symtab_core::config::compile_time::symbols::MAX_NAME_LENGTH;
        assert!(LONG_NAME.len() > MAX_NAME_LENGTH);
    }

    #[test]
    fn test_report_serializes() {
        let mut out = Vec::new();
        let report = run_scenarios(&mut out).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][6]["number"], 7);
    }
}
