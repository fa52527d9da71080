//! taskdb - Personal task tracker for the terminal

use anyhow::Result;
use clap::Parser;
use taskdb::cli::{self, Cli, Commands};
use taskdb::config::StoreConfig;
use taskdb::task::TaskStore;

fn main() -> Result<()> {
    if std::env::var("TASKDB_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdb=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    // Completions don't touch the task database.
    if let Some(Commands::Completion { shell }) = &cli.command {
        return cli::write_completions(*shell, &mut stdout);
    }

    let config = StoreConfig::resolve(cli.db_dir);
    let mut store = TaskStore::initialize(&config)?;

    cli::run(&mut store, &config, cli.command, cli::use_color(), &mut stdout)
}
