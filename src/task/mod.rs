//! Task tracking
//!
//! This module provides the task list and its file-backed persistence:
//! - `Task` records with a fixed creation-time display format
//! - `TaskStore` add/remove/update/complete/schedule operations
//! - Coloured listing output

pub mod error;
pub mod model;
pub mod render;
pub mod store;

pub use error::{Result, TaskError};
pub use model::Task;
pub use store::TaskStore;
