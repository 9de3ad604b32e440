//! Fixed-capacity hash table with chained buckets

use super::error::{SymbolError, SymbolResult};
use super::hash::{hash_bucket, hash_name};
use super::symbol::Symbol;
use crate::config::compile_time::symbols::{DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT, MAX_SYMBOLS};
use crate::config::runtime::TablePreferences;
use crate::logging::codes;
use crate::validation::validate_declaration;
use crate::{log_debug, log_error, log_success};
use serde::Serialize;

/// Bucket and chain statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    pub capacity: usize,
    pub symbol_count: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

/// Symbol table keyed by exact (case-sensitive) name
///
/// The bucket count is fixed at construction; chains grow without bound and
/// keep insertion order. Symbols are never removed or overwritten.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    buckets: Vec<Vec<Symbol>>,
    len: usize,
    symbol_limit: usize,
    log_inserts: bool,
}

impl SymbolTable {
    /// Create a table with `DEFAULT_BUCKET_COUNT` buckets
    pub fn new() -> Self {
        Self::build(DEFAULT_BUCKET_COUNT, true)
    }

    /// Create a table with `bucket_count` buckets (1..=`MAX_BUCKET_COUNT`)
    pub fn with_capacity(bucket_count: usize) -> SymbolResult<Self> {
        Self::checked(bucket_count, true)
    }

    /// Create a table from runtime preferences
    pub fn from_preferences(preferences: &TablePreferences) -> SymbolResult<Self> {
        Self::checked(preferences.bucket_count, preferences.log_successful_inserts)
    }

    fn checked(bucket_count: usize, log_inserts: bool) -> SymbolResult<Self> {
        if bucket_count == 0 || bucket_count > MAX_BUCKET_COUNT {
            let err = SymbolError::InvalidCapacity {
                requested: bucket_count,
                max: MAX_BUCKET_COUNT,
            };
            log_error!(err.error_code(), &err.to_string(), "requested" => bucket_count);
            return Err(err);
        }

        Ok(Self::build(bucket_count, log_inserts))
    }

    fn build(bucket_count: usize, log_inserts: bool) -> Self {
        log_debug!("Symbol table created", "buckets" => bucket_count);
        Self {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
            symbol_limit: MAX_SYMBOLS,
            log_inserts,
        }
    }

    /// Validate and store a new symbol
    ///
    /// Checks run name, type, value; the first failure is reported and the
    /// table is left unchanged. Existing names are rejected, never overwritten.
    pub fn insert(&mut self, name: &str, type_name: &str, value: &str) -> SymbolResult<()> {
        let result = self.try_insert(name, type_name, value);

        match &result {
            Ok(()) if self.log_inserts => {
                log_success!(
                    codes::success::SYMBOL_INSERTED,
                    "Symbol inserted",
                    "name" => name,
                    "type" => type_name.trim(),
                    "bucket" => self.bucket_of(name)
                );
            }
            Ok(()) => {}
            Err(err) => {
                log_error!(err.error_code(), &err.to_string(), "name" => name);
            }
        }

        result
    }

    fn try_insert(&mut self, name: &str, type_name: &str, value: &str) -> SymbolResult<()> {
        let declaration = validate_declaration(name, type_name, value)?;

        let bucket = self.bucket_of(name);
        if let Some(existing) = self.buckets[bucket].iter().find(|s| s.name == name) {
            return Err(SymbolError::duplicate_symbol(name, existing.data_type));
        }

        if self.len >= self.symbol_limit {
            return Err(SymbolError::TableFull {
                limit: self.symbol_limit,
            });
        }

        self.buckets[bucket].push(Symbol::new(name, declaration.data_type, declaration.value));
        self.len += 1;
        Ok(())
    }

    /// Look up a symbol, scanning only its bucket's chain
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.buckets[self.bucket_of(name)]
            .iter()
            .find(|symbol| symbol.name == name)
    }

    /// Look up a symbol, reporting a miss as `NotFound`
    pub fn get(&self, name: &str) -> SymbolResult<&Symbol> {
        self.find(name).ok_or_else(|| {
            let err = SymbolError::not_found(name);
            log_error!(err.error_code(), &err.to_string(), "name" => name);
            err
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a name hashes to
    pub fn bucket_of(&self, name: &str) -> usize {
        hash_bucket(hash_name(name), self.buckets.len())
    }

    /// Symbols chained in one bucket, in insertion order
    pub fn chain(&self, bucket: usize) -> &[Symbol] {
        self.buckets.get(bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All symbols in bucket order, then chain order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.buckets.iter().flatten()
    }

    pub fn stats(&self) -> TableStats {
        let capacity = self.capacity();
        TableStats {
            capacity,
            symbol_count: self.len,
            occupied_buckets: self.buckets.iter().filter(|b| !b.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
            load_factor: self.len as f64 / capacity as f64,
        }
    }

    /// All symbols as a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let symbols: Vec<&Symbol> = self.iter().collect();
        serde_json::to_string_pretty(&symbols)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Vec<Symbol>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{PrimitiveType, ValidationError};
    use assert_matches::assert_matches;

    #[test]
    fn test_insert_and_find() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", "5").unwrap();

        let symbol = table.find("x").unwrap();
        assert_eq!(symbol.data_type, PrimitiveType::Int);
        assert_eq!(symbol.value, "5");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_rejected_without_overwrite() {
        let mut table = SymbolTable::new();
        table.insert("y", "float", "2.5").unwrap();

        assert_matches!(
            table.insert("y", "int", "5"),
            Err(SymbolError::DuplicateSymbol { existing_type: PrimitiveType::Float, .. })
        );

        let symbol = table.get("y").unwrap();
        assert_eq!(symbol.data_type, PrimitiveType::Float);
        assert_eq!(symbol.value, "2.5");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_validation_failures_leave_table_unchanged() {
        let mut table = SymbolTable::new();

        assert_matches!(
            table.insert("x#", "int", "10"),
            Err(SymbolError::Validation(ValidationError::InvalidName { .. }))
        );
        assert_matches!(
            table.insert("5", "int", "15"),
            Err(SymbolError::Validation(ValidationError::InvalidName { .. }))
        );
        assert_matches!(
            table.insert("x", "invalid", "5"),
            Err(SymbolError::Validation(ValidationError::InvalidType { .. }))
        );
        assert_matches!(
            table.insert("x", "int", "invalid_value"),
            Err(SymbolError::Validation(ValidationError::InvalidValue { .. }))
        );

        assert!(table.is_empty());
        assert!(table.find("x").is_none());
    }

    #[test]
    fn test_full_table_rejects_new_names() {
        let mut table = SymbolTable::with_capacity(2).unwrap();
        table.symbol_limit = 3;
        for name in ["a", "b", "c"] {
            table.insert(name, "int", "1").unwrap();
        }

        assert_matches!(
            table.insert("d", "int", "4"),
            Err(SymbolError::TableFull { limit: 3 })
        );
        assert_eq!(table.len(), 3);
        assert!(table.find("d").is_none());
        assert_eq!(table.find("a").unwrap().value, "1");

        // Duplicates are still reported as duplicates once full
        assert_matches!(
            table.insert("a", "int", "2"),
            Err(SymbolError::DuplicateSymbol { .. })
        );
    }

    #[test]
    fn test_default_symbol_limit() {
        assert_eq!(SymbolTable::new().symbol_limit, MAX_SYMBOLS);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let table = SymbolTable::new();
        assert_matches!(table.get("z"), Err(SymbolError::NotFound { name }) if name == "z");
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let mut table = SymbolTable::new();
        table.insert("CaseSENSITIVE", "int", "1").unwrap();

        assert!(table.contains("CaseSENSITIVE"));
        assert!(!table.contains("casesensitive"));
    }

    #[test]
    fn test_collisions_keep_insertion_order() {
        let mut table = SymbolTable::with_capacity(1).unwrap();
        table.insert("a", "int", "1").unwrap();
        table.insert("b", "float", "2").unwrap();
        table.insert("c", "string", "3").unwrap();

        let names: Vec<&str> = table.chain(0).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);

        for name in ["a", "b", "c"] {
            assert!(table.contains(name));
        }

        let stats = table.stats();
        assert_eq!(stats.longest_chain, 3);
        assert_eq!(stats.occupied_buckets, 1);
        assert_eq!(stats.load_factor, 3.0);
    }

    #[test]
    fn test_invalid_capacity() {
        assert_matches!(
            SymbolTable::with_capacity(0),
            Err(SymbolError::InvalidCapacity { requested: 0, .. })
        );
        assert_matches!(
            SymbolTable::with_capacity(MAX_BUCKET_COUNT + 1),
            Err(SymbolError::InvalidCapacity { .. })
        );
        assert_eq!(SymbolTable::with_capacity(MAX_BUCKET_COUNT).unwrap().capacity(), MAX_BUCKET_COUNT);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", "5").unwrap();

        let first = table.get("x").unwrap().clone();
        let second = table.get("x").unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_quotes_stripped_on_insert() {
        let mut table = SymbolTable::new();
        table.insert("s", "string", "\"hello world\"").unwrap();
        table.insert("c", "char", "'q'").unwrap();

        assert_eq!(table.find("s").unwrap().value, "hello world");
        assert_eq!(table.find("c").unwrap().value, "q");
    }

    #[test]
    fn test_chain_out_of_range_is_empty() {
        let table = SymbolTable::with_capacity(3).unwrap();
        assert!(table.chain(99).is_empty());
    }

    #[test]
    fn test_iteration_and_json() {
        let mut table = SymbolTable::with_capacity(7).unwrap();
        table.insert("alpha", "int", "1").unwrap();
        table.insert("beta", "bool", "true").unwrap();

        assert_eq!(table.iter().count(), 2);
        assert_eq!((&table).into_iter().count(), 2);

        let json: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_from_preferences() {
        let preferences = TablePreferences {
            bucket_count: 13,
            log_successful_inserts: false,
        };
        let table = SymbolTable::from_preferences(&preferences).unwrap();
        assert_eq!(table.capacity(), 13);
    }
}
