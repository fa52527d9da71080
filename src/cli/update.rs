//! `taskdb update` command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::task::TaskStore;

#[derive(Args)]
pub struct UpdateArgs {
    /// Task ID
    #[arg(allow_negative_numbers = true)]
    id: i64,

    /// New description
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    description: Vec<String>,
}

pub fn run(store: &mut TaskStore, args: UpdateArgs, out: &mut impl Write) -> Result<()> {
    store.update(args.id, super::join_words(&args.description))?;
    writeln!(out, "Updated task {}", args.id)?;
    Ok(())
}
