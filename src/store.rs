//! Task Store
//!
//! Owns the task list and active filter, mirrors the list to storage after
//! every mutation.

use crate::config::AppConfig;
use crate::error::StorageResult;
use crate::ids::{Clock, IdGenerator};
use crate::models::{Filter, Task};
use crate::storage::KeyValueStorage;
use crate::view::{build_view, TaskListView};

/// Fresh ids drawn before falling back to a numbered suffix
const MAX_ID_ATTEMPTS: usize = 4;

/// Read the persisted list. Missing, unparsable or non-array data yields an empty list;
/// records without a string `id` and `text` are skipped.
pub fn load_tasks(storage: &dyn KeyValueStorage, key: &str) -> Vec<Task> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("{}", e);
            return Vec::new();
        }
    };
    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Discarding unparsable snapshot under {}: {}", key, e);
            return Vec::new();
        }
    };
    let serde_json::Value::Array(records) = value else {
        log::warn!("Discarding non-array snapshot under {}", key);
        return Vec::new();
    };
    // Bad entries are skipped individually
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(e) => {
                log::warn!("Skipping task record {} under {}: {}", index, key, e);
                None
            }
        })
        .collect()
}

/// Serialize and write the whole list
pub fn save_tasks(storage: &mut dyn KeyValueStorage, key: &str, tasks: &[Task]) -> StorageResult<()> {
    let json = serde_json::to_string(tasks)?;
    storage.set(key, &json)
}

pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    storage_key: String,
    storage: Box<dyn KeyValueStorage>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl TaskStore {
    /// Load the persisted list and start on the "all" filter
    pub fn open(
        config: &AppConfig,
        storage: Box<dyn KeyValueStorage>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let tasks = load_tasks(storage.as_ref(), &config.storage_key);
        log::info!("Loaded {} tasks from {}", tasks.len(), config.storage_key);
        Self {
            tasks,
            filter: Filter::All,
            storage_key: config.storage_key.clone(),
            storage,
            ids,
            clock,
        }
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn view(&self) -> TaskListView {
        build_view(&self.tasks, self.filter)
    }

    /// Prepend a new task. Blank input is ignored and returns `None`.
    pub fn add_task(&mut self, raw_text: &str) -> Option<&Task> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        let task = Task::new(id, text.to_string(), self.clock.now_millis());
        log::debug!("Adding task {}", task.id);
        self.tasks.insert(0, task);
        self.persist();
        self.tasks.first()
    }

    /// Flip `done` on the first task with `id`. Returns false if there is none.
    pub fn toggle_done(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.done = !task.done;
        log::debug!("Task {} done={}", id, task.done);
        self.persist();
        true
    }

    /// Remove every task with `id`, returning how many went
    pub fn remove_task(&mut self, id: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = before - self.tasks.len();
        log::debug!("Removed {} task(s) with id {}", removed, id);
        self.persist();
        removed
    }

    /// Drop all completed tasks, keeping the rest in order
    pub fn clear_done(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        let removed = before - self.tasks.len();
        log::debug!("Cleared {} completed task(s)", removed);
        self.persist();
        removed
    }

    /// Change the view filter. Not persisted.
    pub fn select_filter(&mut self, filter: Filter) {
        log::debug!("Filter -> {}", filter.as_str());
        self.filter = filter;
    }

    fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Next id from the generator that is not already in the list
    fn fresh_id(&mut self) -> String {
        let base = self.ids.next_id();
        if !self.contains(&base) {
            return base;
        }
        for _ in 1..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if !self.contains(&candidate) {
                return candidate;
            }
        }
        log::warn!("Id generator keeps colliding on {}, using a suffix", base);
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn persist(&mut self) {
        if let Err(e) = save_tasks(self.storage.as_mut(), &self.storage_key, &self.tasks) {
            log::error!("Failed to save {} tasks: {}", self.tasks.len(), e);
        }
    }
}
