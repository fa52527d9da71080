//! taskdb library - Core functionality for the terminal task tracker

pub mod cli;
pub mod config;
pub mod scheduler;
pub mod task;
