//! The collection of tables produced by one load.

use std::collections::BTreeMap;

use crate::table::Table;

/// Tables keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    tables: BTreeMap<String, Table>,
}

impl TableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table under its own name, returning any table it replaced.
    pub fn insert(&mut self, table: Table) -> Option<Table> {
        self.tables.insert(table.name().to_string(), table)
    }

    /// Look up a table by name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// The first table in name order.
    pub fn first(&self) -> Option<&Table> {
        self.tables.values().next()
    }

    /// Table names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Iterate over all tables in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables were loaded.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
