//! Store configuration
//!
//! The environment is consulted exactly once, by [`StoreConfig::resolve`],
//! which the binary calls before opening the store. Everything below the
//! entry point receives the resolved config.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// File name of the task database inside the storage directory
pub const DB_FILE_NAME: &str = ".taskdb.json";

pub const DB_PATH_ENV: &str = "TASK_DB_PATH";
pub const SCHEDULER_ENV: &str = "TASK_SCHEDULER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Job scheduler executable, invoked as `<program> -f <file> <when>`
    pub program: String,

    /// Desktop notification command written into the job
    pub notifier: String,

    /// Notification summary line
    pub title: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            program: "at".to_string(),
            notifier: "notify-send".to_string(),
            title: "Reminder".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_dir: PathBuf,
    pub scheduler: SchedulerConfig,
}

impl StoreConfig {
    pub fn new(db_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_dir: db_dir.into(),
            scheduler: SchedulerConfig::default(),
        }
    }

    /// Resolve the storage directory from an explicit override, then
    /// `TASK_DB_PATH`, then `HOME`, then the platform home directory.
    /// Falls back to the current directory with a warning.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        let db_dir = override_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| non_empty_env(DB_PATH_ENV).map(PathBuf::from))
            .or_else(|| non_empty_env("HOME").map(PathBuf::from))
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| {
                warn!("Either set HOME or {}; using current directory", DB_PATH_ENV);
                PathBuf::from(".")
            });
        debug!("Task database directory: {}", db_dir.display());

        let mut scheduler = SchedulerConfig::default();
        if let Some(program) = non_empty_env(SCHEDULER_ENV) {
            scheduler.program = program;
        }

        Self { db_dir, scheduler }
    }

    pub fn db_dir(&self) -> &Path {
        &self.db_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.db_dir.join(DB_FILE_NAME)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
