//! A small document store: collections are directories, resources are
//! `<name>.json` files inside them.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, trace};

const EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("collection not found: {0}")]
    CollectionNotFound(String),
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    Direct,
    Recursive,
}

/// Storage boundary used by [`JsonRepo`](crate::JsonRepo). Records are
/// passed as serialized text.
pub trait DocumentStore: Send + Sync + 'static {
    /// Creates or overwrites a resource, creating the collection if needed.
    fn write(&self, collection: &Path, resource: &str, record: &str) -> Result<(), StoreError>;
    fn read(&self, collection: &Path, resource: &str) -> Result<String, StoreError>;
    fn read_all(&self, collection: &Path, depth: Depth) -> Result<Vec<String>, StoreError>;
    fn delete(&self, collection: &Path, resource: &str) -> Result<(), StoreError>;
    fn collection_exists(&self, collection: &Path) -> bool;
}

#[derive(Clone, Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: &Path) -> Result<PathBuf, StoreError> {
        if !collection
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(StoreError::InvalidName(collection.display().to_string()));
        }
        Ok(self.root.join(collection))
    }

    fn resource_file(&self, collection: &Path, resource: &str) -> Result<PathBuf, StoreError> {
        if resource.is_empty()
            || resource == "."
            || resource == ".."
            || resource.contains(['/', '\\'])
        {
            return Err(StoreError::InvalidName(resource.to_string()));
        }
        Ok(self
            .collection_dir(collection)?
            .join(format!("{resource}.{EXTENSION}")))
    }

    fn collect(&self, dir: &Path, depth: Depth, out: &mut Vec<String>) -> Result<(), StoreError> {
        let mut entries = fs::read_dir(dir)
            .map_err(|e| StoreError::io(dir, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::io(dir, e))?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            let kind = entry.file_type().map_err(|e| StoreError::io(&path, e))?;
            if kind.is_dir() {
                if depth == Depth::Recursive {
                    self.collect(&path, depth, out)?;
                }
                continue;
            }
            if path.extension().and_then(|s| s.to_str()) != Some(EXTENSION) {
                continue;
            }
            trace!(file = %path.display(), "reading record");
            out.push(fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?);
        }
        Ok(())
    }

    /// Removes now-empty collections from `dir` upwards, stopping at the root.
    fn prune(&self, mut dir: PathBuf) {
        while dir != self.root && dir.starts_with(&self.root) {
            if fs::remove_dir(&dir).is_err() {
                break;
            }
            debug!(dir = %dir.display(), "pruned empty collection");
            if !dir.pop() {
                break;
            }
        }
    }
}

impl DocumentStore for FsStore {
    fn write(&self, collection: &Path, resource: &str, record: &str) -> Result<(), StoreError> {
        let file = self.resource_file(collection, resource)?;
        let dir = self.collection_dir(collection)?;
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
        tmp.write_all(record.as_bytes())
            .and_then(|_| tmp.flush())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&file).map_err(|e| StoreError::io(&file, e.error))?;
        debug!(file = %file.display(), "wrote record");
        Ok(())
    }

    fn read(&self, collection: &Path, resource: &str) -> Result<String, StoreError> {
        let file = self.resource_file(collection, resource)?;
        fs::read_to_string(&file).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(file.display().to_string()),
            _ => StoreError::io(&file, e),
        })
    }

    fn read_all(&self, collection: &Path, depth: Depth) -> Result<Vec<String>, StoreError> {
        let dir = self.collection_dir(collection)?;
        if !dir.is_dir() {
            return Err(StoreError::CollectionNotFound(collection.display().to_string()));
        }
        let mut records = Vec::new();
        self.collect(&dir, depth, &mut records)?;
        Ok(records)
    }

    fn delete(&self, collection: &Path, resource: &str) -> Result<(), StoreError> {
        let file = self.resource_file(collection, resource)?;
        fs::remove_file(&file).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(file.display().to_string()),
            _ => StoreError::io(&file, e),
        })?;
        debug!(file = %file.display(), "deleted record");
        if let Some(dir) = file.parent() {
            self.prune(dir.to_path_buf());
        }
        Ok(())
    }

    fn collection_exists(&self, collection: &Path) -> bool {
        self.collection_dir(collection)
            .map(|dir| dir.is_dir())
            .unwrap_or(false)
    }
}
