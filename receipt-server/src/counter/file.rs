//! JSON file counter store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::ReceiptId;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{
    Allocation, CounterError, CounterOrigin, INITIAL_COUNTER, MAX_COUNTER, ReceiptCounter,
    parse_candidate,
};

/// On-disk format
#[derive(Debug, Serialize, Deserialize)]
struct CounterFile {
    counter: u64,
}

/// Counter persisted as `{"counter": <int>}`
///
/// Read-modify-write is serialized within this process only; two processes
/// sharing the file can still hand out the same id.
#[derive(Debug)]
pub struct FileCounterStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted counter
    pub async fn load(&self) -> Result<u64, CounterError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CounterError::Missing(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let file: CounterFile =
            serde_json::from_str(&raw).map_err(|e| CounterError::Corrupt(e.to_string()))?;
        if file.counter > MAX_COUNTER {
            return Err(CounterError::Corrupt(format!(
                "counter {} exhausted",
                file.counter
            )));
        }
        Ok(file.counter)
    }

    /// Persist `counter` as the next value to hand out
    pub async fn save(&self, counter: u64) -> Result<(), CounterError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec(&CounterFile { counter })
            .map_err(|e| CounterError::Corrupt(e.to_string()))?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }

    async fn load_or_default(&self) -> (u64, CounterOrigin) {
        match self.load().await {
            Ok(counter) => (counter, CounterOrigin::Persisted),
            Err(CounterError::Missing(_)) => {
                debug!(path = %self.path.display(), "counter file absent, starting at {}", INITIAL_COUNTER);
                (INITIAL_COUNTER, CounterOrigin::DefaultedMissing)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "counter unusable, restarting at {}", INITIAL_COUNTER);
                (INITIAL_COUNTER, CounterOrigin::from(&e))
            }
        }
    }

    async fn persist(&self, next: u64) {
        if let Err(e) = self.save(next).await {
            warn!(path = %self.path.display(), error = %e, next, "failed to persist counter");
        }
    }

    async fn allocate_locked(&self) -> Allocation {
        let (counter, origin) = self.load_or_default().await;
        self.persist(counter + 1).await;
        Allocation {
            id: ReceiptId::from_counter(counter),
            origin,
        }
    }
}

#[async_trait]
impl ReceiptCounter for FileCounterStore {
    async fn allocate(&self) -> Allocation {
        let _guard = self.lock.lock().await;
        self.allocate_locked().await
    }

    async fn ingest(&self, candidate: &str) -> Allocation {
        let _guard = self.lock.lock().await;
        match parse_candidate(candidate) {
            Some(value) => {
                self.persist(value + 1).await;
                Allocation {
                    id: ReceiptId::from_raw(candidate),
                    origin: CounterOrigin::Ingested,
                }
            }
            None => {
                debug!(candidate, "non-numeric receipt id, allocating instead");
                self.allocate_locked().await
            }
        }
    }
}
