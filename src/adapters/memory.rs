//! In-memory task repository
//!
//! Tasks live in a `BTreeMap` keyed by ID, behind an `RwLock`, so listing is
//! always in ID order and the repository can be shared across server workers.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::error::{TaskError, TaskResult};
use crate::core::models::{Task, TaskDraft, TaskId};
use crate::core::ports::TaskRepository;

/// Thread-safe in-memory task repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: TaskId,
}

impl InMemoryTaskRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskResult<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|e| TaskError::storage(format!("task store lock poisoned: {e}")))
    }

    fn write(&self) -> TaskResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|e| TaskError::storage(format!("task store lock poisoned: {e}")))
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list(&self) -> TaskResult<Vec<Task>> {
        Ok(self.read()?.tasks.values().cloned().collect())
    }

    fn get(&self, id: TaskId) -> TaskResult<Option<Task>> {
        Ok(self.read()?.tasks.get(&id).cloned())
    }

    fn insert(&self, draft: TaskDraft) -> TaskResult<Task> {
        let mut state = self.write()?;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| TaskError::storage("task ID space exhausted"))?;

        let task = Task::from_draft(id, draft);
        state.last_id = id;
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    fn update<F>(&self, id: TaskId, apply: F) -> TaskResult<Task>
    where
        F: FnOnce(&mut Task) -> TaskResult<()>,
    {
        let mut state = self.write()?;
        let slot = state.tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;

        let mut task = slot.clone();
        apply(&mut task)?;
        *slot = task.clone();
        Ok(task)
    }

    fn remove(&self, id: TaskId) -> TaskResult<()> {
        self.write()?
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskError::NotFound(id))
    }

    fn count(&self) -> TaskResult<usize> {
        Ok(self.read()?.tasks.len())
    }
}
