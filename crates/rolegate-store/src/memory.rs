//! In-memory implementation of the DefinitionStore trait.
//!
//! This is primarily for testing. It has the same semantics as the
//! YAML file store but keeps the records in memory with no persistence.

use std::sync::RwLock;

use rolegate_core::{GroupRecord, GroupRegistry};

use crate::defaults::builtin_definitions;
use crate::error::Result;
use crate::traits::DefinitionStore;

/// In-memory definition store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    records: RwLock<Vec<(String, GroupRecord)>>,
}

impl MemoryStore {
    /// Create an empty store. `ensure` will install the built-in
    /// defaults into it.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-seeded with the given records.
    pub fn with_records(records: Vec<(String, GroupRecord)>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionStore for MemoryStore {
    fn ensure(&self) -> Result<bool> {
        let mut records = self.records.write().unwrap();
        if records.is_empty() {
            *records = builtin_definitions();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn load(&self) -> Result<Vec<(String, GroupRecord)>> {
        Ok(self.records.read().unwrap().clone())
    }

    fn save(&self, registry: &GroupRegistry) -> Result<()> {
        let mut records = self.records.write().unwrap();
        *records = registry
            .iter()
            .map(|g| (g.name().to_string(), g.record()))
            .collect();
        Ok(())
    }
}
