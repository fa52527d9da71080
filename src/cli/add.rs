//! `taskdb add` command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::task::TaskStore;

#[derive(Args)]
pub struct AddArgs {
    /// Task description (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    description: Vec<String>,
}

pub fn run(store: &mut TaskStore, args: AddArgs, out: &mut impl Write) -> Result<()> {
    let task = store.add(super::join_words(&args.description))?;
    writeln!(out, "Added task {}: {}", task.id, task.description)?;
    Ok(())
}
