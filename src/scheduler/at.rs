use std::io::{ErrorKind, Write};
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::debug;

use super::error::{Result, SchedulerError};
use super::JobScheduler;
use crate::config::SchedulerConfig;

/// Submits jobs with `at -f <file> <when>`.
#[derive(Debug, Clone)]
pub struct AtScheduler {
    program: String,
}

impl AtScheduler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self::new(config.program.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for AtScheduler {
    fn default() -> Self {
        Self::from_config(&SchedulerConfig::default())
    }
}

impl JobScheduler for AtScheduler {
    fn submit(&self, script: &str, when: &str) -> Result<()> {
        let when: Vec<&str> = when.split_whitespace().collect();
        if when.is_empty() {
            return Err(SchedulerError::EmptySchedule);
        }

        // Deleted when `job` drops, on every return path.
        let mut job = NamedTempFile::new().map_err(SchedulerError::TempFile)?;
        writeln!(job, "{}", script).map_err(SchedulerError::TempFile)?;
        job.flush().map_err(SchedulerError::TempFile)?;

        debug!(
            "Submitting {} to {} for '{}'",
            job.path().display(),
            self.program,
            when.join(" ")
        );

        let output = match Command::new(&self.program)
            .arg("-f")
            .arg(job.path())
            .args(&when)
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SchedulerError::NotInstalled(self.program.clone()));
            }
            Err(e) => return Err(SchedulerError::Io(e)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SchedulerError::Rejected(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
