//! File-backed record store - one JSON file per collection.
//!
//! Each `JsonStore` is the single owner of its file. All read-modify-write
//! sequences are serialized behind a write lock, and every save goes
//! through a temp-file-then-rename so a failed write never corrupts the
//! previously durable state. When a save fails the in-memory collection
//! is left untouched, so memory never diverges from disk.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A durable keyed collection backed by a single JSON file.
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
}

impl<T> JsonStore<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Open the store, loading persisted state or falling back to the
    /// seed.
    ///
    /// A missing file is not an error. An unreadable or corrupt file is
    /// treated as absent - the seed is used and a diagnostic is logged,
    /// but the corruption never propagates to callers.
    pub fn open(path: PathBuf, seed: Vec<T>) -> Self {
        let records = Self::load(&path, seed);
        Self {
            path,
            records: RwLock::new(records),
        }
    }

    fn load(path: &Path, seed: Vec<T>) -> Vec<T> {
        if !path.exists() {
            return seed;
        }
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "persisted collection is corrupt; starting from defaults"
                    );
                    seed
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "persisted collection is unreadable; starting from defaults"
                );
                seed
            }
        }
    }

    /// Clone of the current records. Never observes a partial save.
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Acquire the write lock for a read-modify-write sequence.
    ///
    /// Callers clone the guarded records, mutate the clone, persist via
    /// [`JsonStore::stage`], and only then assign the clone back through
    /// the guard. A persistence failure leaves the guard untouched, which
    /// is the rollback.
    pub async fn lock_write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().await
    }

    /// Write `records` to the temp file, ready to be renamed into place.
    pub fn stage(&self, records: &[T]) -> Result<StagedWrite, StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        Ok(StagedWrite {
            tmp,
            dest: self.path.clone(),
            committed: false,
        })
    }

    /// Mutate the collection and persist atomically.
    ///
    /// The closure runs against a working copy; the copy only becomes
    /// visible (in memory and on disk) if the save succeeds.
    pub async fn update<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let mut guard = self.records.write().await;
        let mut working = guard.clone();
        let out = f(&mut working);
        self.stage(&working)?.commit()?;
        *guard = working;
        Ok(out)
    }
}

/// A fully written temp file awaiting its atomic rename.
#[derive(Debug)]
pub struct StagedWrite {
    tmp: PathBuf,
    dest: PathBuf,
    committed: bool,
}

impl StagedWrite {
    /// Rename the temp file over the destination.
    pub fn commit(mut self) -> Result<(), StoreError> {
        fs::rename(&self.tmp, &self.dest).map_err(|source| StoreError::Write {
            path: self.dest.clone(),
            source,
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedWrite {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp);
        }
    }
}
