//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod list;
pub mod remove;
pub mod schedule;
pub mod update;

pub use definition::{Cli, Commands};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{IsTerminal, Write};

use crate::config::StoreConfig;
use crate::scheduler::AtScheduler;
use crate::task::TaskStore;

/// Dispatch one command against an opened store, writing its output to `out`.
pub fn run(
    store: &mut TaskStore,
    config: &StoreConfig,
    command: Option<Commands>,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Some(Commands::Add(args)) => add::run(store, args, out),
        Some(Commands::Remove(args)) => remove::run(store, args, out),
        Some(Commands::Update(args)) => update::run(store, args, out),
        Some(Commands::Done(args)) => done::run(store, args, out),
        Some(Commands::Schedule(args)) => {
            let scheduler = AtScheduler::from_config(&config.scheduler);
            schedule::run(store, &scheduler, args, out)
        }
        Some(Commands::List(args)) => list::run(store, args, color, out),
        Some(Commands::Pending(args)) => list::run_pending(store, args, color, out),
        Some(Commands::Completion { shell }) => write_completions(shell, out),
        None => list::run(store, list::ListArgs::default(), color, out),
    }
}

pub fn write_completions(shell: Shell, out: &mut impl Write) -> Result<()> {
    generate(shell, &mut Cli::command(), "taskdb", out);
    Ok(())
}

pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// Colour only when stdout is a terminal and `NO_COLOR` is unset.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, StoreConfig, TaskStore) {
        let temp = tempdir().unwrap();
        let config = StoreConfig::new(temp.path());
        let store = TaskStore::initialize(&config).unwrap();
        (temp, config, store)
    }

    fn exec(store: &mut TaskStore, config: &StoreConfig, args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("taskdb").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(store, config, cli.command, false, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_words() {
        assert_eq!(join_words(&words(&["buy", "milk"])), "buy milk");
        assert_eq!(join_words(&words(&[""])), "");
        assert_eq!(join_words(&[]), "");
    }

    #[test]
    fn test_parse_add_joins_description() {
        let cli = Cli::try_parse_from(["taskdb", "add", "buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Add(_)) => {}
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_add_requires_description() {
        assert!(Cli::try_parse_from(["taskdb", "add"]).is_err());
    }

    #[test]
    fn test_parse_remove_alias() {
        let cli = Cli::try_parse_from(["taskdb", "rm", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Remove(_))));
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["taskdb", "done", "abc"]).is_err());
    }

    #[test]
    fn test_parse_complete_alias() {
        let cli = Cli::try_parse_from(["taskdb", "complete", "1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Done(_))));
    }

    #[test]
    fn test_parse_schedule_multi_word_time() {
        let cli =
            Cli::try_parse_from(["taskdb", "schedule", "2", "now", "+", "1", "hour"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Schedule(_))));
    }

    #[test]
    fn test_parse_db_dir_flag() {
        let cli = Cli::try_parse_from(["taskdb", "list", "--db-dir", "/tmp/tasks"]).unwrap();
        assert_eq!(cli.db_dir, Some(PathBuf::from("/tmp/tasks")));
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["taskdb"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_mutation_messages() -> Result<()> {
        let (_temp, config, mut store) = setup();

        let added = exec(&mut store, &config, &["add", "buy", "milk"])?;
        assert_eq!(added, "Added task 1: buy milk\n");

        let updated = exec(&mut store, &config, &["update", "1", "buy", "oat", "milk"])?;
        assert_eq!(updated, "Updated task 1\n");

        let done = exec(&mut store, &config, &["done", "1"])?;
        assert_eq!(done, "Completed task 1 (0 pending)\n");

        let removed = exec(&mut store, &config, &["rm", "1"])?;
        assert_eq!(removed, "Removed task 1: buy oat milk\n");
        Ok(())
    }

    #[test]
    fn test_list_is_default_command() -> Result<()> {
        let (_temp, config, mut store) = setup();
        assert_eq!(exec(&mut store, &config, &[])?, "No tasks found.\n");

        exec(&mut store, &config, &["add", "a"])?;
        exec(&mut store, &config, &["add", "b"])?;
        exec(&mut store, &config, &["done", "1"])?;

        let output = exec(&mut store, &config, &[])?;
        assert!(output.contains("  1  : [x] "));
        assert!(output.contains("  2  : [ ] "));
        assert!(output.ends_with("\n1 pending\n"));
        Ok(())
    }

    #[test]
    fn test_pending_json_lists_only_open_tasks() -> Result<()> {
        let (_temp, config, mut store) = setup();
        exec(&mut store, &config, &["add", "a"])?;
        exec(&mut store, &config, &["add", "b"])?;
        exec(&mut store, &config, &["done", "1"])?;

        let output = exec(&mut store, &config, &["pending", "--json"])?;
        let tasks: Vec<crate::task::Task> = serde_json::from_str(&output)?;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 2);
        Ok(())
    }

    #[test]
    fn test_remove_on_empty_store_reports_error() {
        let (_temp, config, mut store) = setup();
        let err = exec(&mut store, &config, &["remove", "1"]).unwrap_err();
        assert_eq!(err.to_string(), "No tasks present");
    }

    #[test]
    fn test_completion_is_handled_by_run() -> Result<()> {
        let (_temp, config, mut store) = setup();
        let output = exec(&mut store, &config, &["completion", "bash"])?;
        assert!(output.contains("taskdb"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_schedule_message() -> Result<()> {
        let (_temp, mut config, mut store) = setup();
        config.scheduler.program = "true".to_string();
        exec(&mut store, &config, &["add", "stretch"])?;

        let output = exec(&mut store, &config, &["schedule", "1", "now", "+", "1", "hour"])?;
        assert_eq!(output, "Scheduled reminder for task 1 at now + 1 hour\n");
        Ok(())
    }
}
