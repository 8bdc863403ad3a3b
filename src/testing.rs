//! Deterministic stand-ins for browser services, used by unit tests.

use crate::error::{StorageError, StorageResult};
use crate::ids::{Clock, IdGenerator};
use crate::storage::KeyValueStorage;

/// Yields `task-1`, `task-2`, ... or the same id forever
pub struct SequentialIds {
    next: u32,
    fixed: Option<String>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1, fixed: None }
    }

    pub fn repeating(id: &str) -> Self {
        Self { next: 1, fixed: Some(id.to_string()) }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        if let Some(id) = &self.fixed {
            return id.clone();
        }
        let id = format!("task-{}", self.next);
        self.next += 1;
        id
    }
}

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Every read and write fails
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Read("SecurityError".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Write("QuotaExceededError".to_string()))
    }
}
