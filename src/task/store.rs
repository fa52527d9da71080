//! Task store - JSON file persistence

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::error::{Result, TaskError};
use super::model::Task;
use crate::config::{SchedulerConfig, StoreConfig};
use crate::scheduler::{notification_command, JobScheduler};

/// Ordered task list backed by a single JSON file.
///
/// Every mutation rewrites the whole file before returning. A failed lookup
/// returns [`TaskError::TaskNotFound`] and leaves both memory and disk
/// untouched.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    scheduler: SchedulerConfig,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Make sure the database file exists (creating an empty one if needed)
    /// and load it.
    pub fn initialize(config: &StoreConfig) -> Result<Self> {
        let dir = config.db_dir();
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| TaskError::io(dir, e))?;
        }

        let path = config.db_path();
        if !path.exists() {
            write_db(&path, &[])?;
            info!("Created task database at {}", path.display());
        }

        let mut store = Self::open(path)?;
        store.scheduler = config.scheduler.clone();
        Ok(store)
    }

    /// Load an existing database file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = read_db(&path)?;
        Ok(Self {
            path,
            scheduler: SchedulerConfig::default(),
            tasks,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, description: impl Into<String>) -> Result<Task> {
        let id = self
            .last_id()
            .checked_add(1)
            .ok_or(TaskError::IdsExhausted)?;
        let task = Task::new(id, description);
        self.tasks.push(task.clone());
        self.save()?;
        info!("Added task {}", task.id);
        Ok(task)
    }

    /// Remove a task, keeping the order of the remaining ones.
    pub fn remove(&mut self, id: i64) -> Result<Task> {
        if self.tasks.is_empty() {
            return Err(TaskError::EmptyStore);
        }
        let index = self.position(id).ok_or(TaskError::TaskNotFound(id))?;

        let removed = self.tasks.remove(index);
        self.save()?;
        info!("Removed task {}", id);
        Ok(removed)
    }

    pub fn update(&mut self, id: i64, description: impl Into<String>) -> Result<()> {
        let task = self.get_task_mut(id).ok_or(TaskError::TaskNotFound(id))?;
        task.description = description.into();
        self.save()?;
        info!("Updated task {}", id);
        Ok(())
    }

    pub fn set_completed(&mut self, id: i64) -> Result<()> {
        let task = self.get_task_mut(id).ok_or(TaskError::TaskNotFound(id))?;
        task.completed = true;
        self.save()?;
        info!("Completed task {}", id);
        Ok(())
    }

    /// Hand a desktop-notification job for task `id` to `scheduler`.
    pub fn schedule_task(&self, id: i64, when: &str, scheduler: &impl JobScheduler) -> Result<()> {
        let task = self.get_task(id).ok_or(TaskError::TaskNotFound(id))?;
        let script = notification_command(&self.scheduler, &task.description);
        scheduler.submit(&script, when)?;
        info!("Scheduled reminder for task {} at '{}'", id, when);
        Ok(())
    }

    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn list_pending_tasks(&self) -> Vec<Task> {
        self.tasks.iter().filter(|t| !t.completed).cloned().collect()
    }

    pub fn get_task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_task_mut(&mut self, id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Highest id in the store, or 0 when empty. Does not assume sorted ids.
    pub fn last_id(&self) -> i64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0)
    }

    fn save(&self) -> Result<()> {
        write_db(&self.path, &self.tasks)
    }
}

/// Read the task list from `path`. An empty file is an empty list.
pub fn read_db(path: &Path) -> Result<Vec<Task>> {
    let content = fs::read_to_string(path).map_err(|e| TaskError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|source| TaskError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Write the task list to a sibling temp file and rename it over `path`.
pub fn write_db(path: &Path, tasks: &[Task]) -> Result<()> {
    let content = serde_json::to_string_pretty(tasks)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| TaskError::io(dir, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| TaskError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| TaskError::io(path, e.error))?;

    debug!("Wrote {} tasks to {}", tasks.len(), path.display());
    Ok(())
}
