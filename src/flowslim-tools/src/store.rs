//! Filesystem seam for loading and persisting schema documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("input file does not exist: {}", .0.display())]
    Missing(PathBuf),
    #[error("invalid JSON in input file '{}'", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO error for '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where schema documents live. Implemented over the local filesystem by
/// [FsSchemaStore] and in memory by [crate::testing::MemoryStore].
pub trait SchemaStore {
    /// Read and parse the UTF-8 JSON document at `path`.
    fn load(&self, path: &Path) -> Result<Value, StoreError>;

    /// Persist `schema` at `path` with stable indented formatting,
    /// creating parent directories as needed.
    fn save(&mut self, path: &Path, schema: &Value) -> Result<(), StoreError>;
}

/// The production [SchemaStore], backed by the local filesystem.
pub struct FsSchemaStore;

impl SchemaStore for FsSchemaStore {
    fn load(&self, path: &Path) -> Result<Value, StoreError> {
        if !path.exists() {
            return Err(StoreError::Missing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save(&mut self, path: &Path, schema: &Value) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut content =
            serde_json::to_string_pretty(schema).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            })?;
        content.push('\n');

        fs::write(path, content).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
