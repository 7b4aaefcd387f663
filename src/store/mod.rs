//! Persistence adapters for entity collections.
//!
//! A store owns one named collection of records serialized as a JSON array.
//! [`JsonFileStore`] is the production adapter; [`MemoryStore`] is the
//! in-process fake injected by tests so the core never touches the file
//! system. The [`Store`] trait is the seam the service depends on.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure reading or writing a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("store contains malformed records: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A persisted, ordered collection of records.
///
/// `load` returns the records in store enumeration order; that order is the
/// tie-break the service relies on when selecting among available cars.
/// `save` replaces the whole collection.
#[async_trait]
pub trait Store<T>: Send + Sync {
    async fn load(&self) -> Result<Vec<T>, StoreError>;
    async fn save(&self, records: &[T]) -> Result<(), StoreError>;
}

/// Store backed by a JSON file holding an array of records.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Opens the store named `name` (e.g. `"cars"`) in the per-user data
    /// directory, creating the directory if needed.
    pub fn open_default(name: &str) -> anyhow::Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "fleet-rental")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Ok(Self::new(dirs.data_dir().join(format!("{name}.json"))))
    }
}

#[async_trait]
impl<T> Store<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // A store that was never written is an empty collection.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// In-memory store used as a test double.
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// A copy of the currently persisted records, for assertions on
    /// mutations the service wrote back.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.lock().expect("store lock poisoned").clone()
    }
}

#[async_trait]
impl<T> Store<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.snapshot())
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        *self.records.lock().expect("store lock poisoned") = records.to_vec();
        Ok(())
    }
}
