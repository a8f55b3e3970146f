//! Task service
//!
//! Validates incoming fields, applies lifecycle rules through the
//! [`status_machine`](super::status_machine), and persists through a
//! [`TaskRepository`].

use log::debug;

use super::status_machine;
use crate::core::error::{TaskError, TaskResult};
use crate::core::models::{
    NewTask, Priority, Task, TaskDraft, TaskFilter, TaskId, TaskStats, TaskStatus, TaskUpdate,
};
use crate::core::ports::TaskRepository;

/// Longest accepted title, in characters
pub const MAX_TITLE_LEN: usize = 200;

/// Task operations on top of a repository
#[derive(Debug)]
pub struct TaskService<R> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Create a service backed by `repo`
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Number of stored tasks
    pub fn count_tasks(&self) -> TaskResult<usize> {
        self.repo.count()
    }

    /// List tasks matching `filter`, ordered by ID
    pub fn get_all_tasks(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let tasks = self.repo.list()?;
        Ok(tasks.into_iter().filter(|t| filter.matches(t)).collect())
    }

    /// Aggregate counts over all tasks
    pub fn get_statistics(&self) -> TaskResult<TaskStats> {
        let tasks = self.repo.list()?;
        Ok(TaskStats::from_tasks(&tasks))
    }

    /// Fetch one task
    pub fn get_task_by_id(&self, id: TaskId) -> TaskResult<Task> {
        self.repo.get(id)?.ok_or(TaskError::NotFound(id))
    }

    /// Validate and store a new task
    ///
    /// A task created without a status starts in the first lifecycle status.
    pub fn create_task(&self, new_task: NewTask) -> TaskResult<Task> {
        let title = new_task
            .title
            .as_deref()
            .ok_or_else(|| TaskError::invalid_input("Title is required"))
            .and_then(validate_title)?;

        let status = match new_task.status.as_deref() {
            Some(status) => status_machine::parse(status)?,
            None => TaskStatus::first(),
        };

        let priority = match new_task.priority.as_deref() {
            Some(priority) => parse_priority(priority)?,
            None => Priority::default(),
        };

        let task = self.repo.insert(TaskDraft {
            title,
            description: new_task.description,
            status,
            priority,
        })?;

        debug!("Created task {} ({})", task.id, task.status);
        Ok(task)
    }

    /// Apply a partial update
    ///
    /// Every present field is validated before anything is written, so a
    /// rejected update leaves the stored task untouched. An update with no
    /// fields returns the task as stored.
    pub fn update_task(&self, id: TaskId, update: TaskUpdate) -> TaskResult<Task> {
        if update.is_empty() {
            debug!("Empty update for task {id}");
            return self.get_task_by_id(id);
        }

        let task = self.repo.update(id, move |task| {
            if let Some(status) = update.status.as_deref() {
                *task = status_machine::set_status(task, status)?;
            }
            if let Some(title) = update.title.as_deref() {
                task.title = validate_title(title)?;
            }
            if let Some(priority) = update.priority.as_deref() {
                task.priority = parse_priority(priority)?;
            }
            if let Some(description) = update.description {
                task.description = description;
            }
            task.touch();
            Ok(())
        })?;

        debug!("Updated task {id}");
        Ok(task)
    }

    /// Set a task's status by name
    pub fn update_task_status(&self, id: TaskId, status: &str) -> TaskResult<Task> {
        let task = self.repo.update(id, |task| {
            *task = status_machine::set_status(task, status)?;
            task.touch();
            Ok(())
        })?;

        debug!("Task {id} set to {}", task.status);
        Ok(task)
    }

    /// Advance a task to the next lifecycle status
    ///
    /// The read and the write happen under one repository update, so
    /// concurrent advances never skip or repeat a step. A task already in the
    /// terminal status keeps its `updated_at`.
    pub fn move_to_next_status(&self, id: TaskId) -> TaskResult<Task> {
        self.repo.update(id, |task| {
            let next = status_machine::next(task.status);
            if next == task.status {
                debug!("Task {id} already {next}, nothing to advance");
            } else {
                debug!("Task {id}: {} -> {next}", task.status);
                task.status = next;
                task.touch();
            }
            Ok(())
        })
    }

    /// Delete a task
    pub fn delete_task(&self, id: TaskId) -> TaskResult<()> {
        self.repo.remove(id)?;
        debug!("Deleted task {id}");
        Ok(())
    }
}

fn validate_title(title: &str) -> TaskResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::invalid_input("Title cannot be empty"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(TaskError::invalid_input(format!(
            "Title cannot exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

fn parse_priority(priority: &str) -> TaskResult<Priority> {
    priority.parse().map_err(TaskError::InvalidInput)
}
