//! Reminder scheduling through an external job scheduler
//!
//! A reminder is a one-line shell script that raises a desktop notification.
//! The script is handed to a [`JobScheduler`], which runs it at the requested
//! time. [`AtScheduler`] drives the system `at` command.

pub mod at;
pub mod error;

pub use at::AtScheduler;
pub use error::{Result, SchedulerError};

use crate::config::SchedulerConfig;

pub trait JobScheduler {
    /// Queue `script` to run at `when` (a time spec in the scheduler's syntax).
    fn submit(&self, script: &str, when: &str) -> Result<()>;
}

/// Build the notification command for a reminder. Summary and body follow
/// `--` so a leading `-` is never read as an option.
pub fn notification_command(config: &SchedulerConfig, description: &str) -> String {
    format!(
        "{} -- {} {}",
        config.notifier,
        shell_escape(&config.title),
        shell_escape(description)
    )
}

/// Shell-escape a value for interpolation into a double-quoted shell word.
pub fn shell_escape(val: &str) -> String {
    let escaped = val
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('`', "\\`")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}
