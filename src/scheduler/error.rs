use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("No date/time given for the reminder")]
    EmptySchedule,

    #[error("Couldn't write reminder job file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error(
        "Job scheduler '{0}' is not installed or not in PATH.\n\
         Install the `at` package and make sure atd is running."
    )]
    NotInstalled(String),

    #[error("Couldn't schedule reminder: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
