//! Testing utilities for flowslim-tools.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::store::{SchemaStore, StoreError};

/// An in-memory [SchemaStore] for tests that should not touch the
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, schema: Value) -> Self {
        self.files.insert(path.into(), schema);
        self
    }

    pub fn get(&self, path: &Path) -> Option<&Value> {
        self.files.get(path)
    }
}

impl SchemaStore for MemoryStore {
    fn load(&self, path: &Path) -> Result<Value, StoreError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::Missing(path.to_path_buf()))
    }

    fn save(&mut self, path: &Path, schema: &Value) -> Result<(), StoreError> {
        self.files.insert(path.to_path_buf(), schema.clone());
        Ok(())
    }
}
