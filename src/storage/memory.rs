use super::{StorageBackend, StorageError};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory backend for tests and ephemeral sessions. Clones share the
/// same underlying blobs, which models a second session opening the same
/// persisted storage. Write failures can be scripted per call to exercise
/// callers' rollback paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    blobs: Arc<Mutex<HashMap<String, String>>>,
    fail_plan: Arc<Mutex<VecDeque<bool>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next writes: `true` entries fail, `false` entries
    /// succeed. Writes beyond the script succeed.
    pub fn fail_next_writes(&self, plan: &[bool]) {
        self.fail_plan.lock().unwrap().extend(plan.iter().copied());
    }

    /// Raw blob under `key`, bypassing the trait for test assertions.
    pub fn blob(&self, key: &str) -> Option<String> {
        self.blobs.lock().unwrap().get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        if self.fail_plan.lock().unwrap().pop_front().unwrap_or(false) {
            return Err(StorageError::Write {
                key: key.to_string(),
                source: io::Error::other("write failure injected"),
            });
        }
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
