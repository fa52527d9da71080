//! Release chores for taskdb: the markdown CLI reference and the shell
//! completion scripts shipped next to the binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const COMPLETION_SHELLS: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Release chores for taskdb")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write docs/cli/reference.md from the taskdb argument definitions
    GenDocs {
        #[arg(long, default_value = "docs/cli")]
        out_dir: PathBuf,
    },

    /// Write bash, zsh and fish completion scripts
    GenCompletions {
        #[arg(long, default_value = "completions")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Commands::GenDocs { out_dir } => {
            let path = write_reference(&out_dir)?;
            println!("Wrote CLI reference to {}", path.display());
        }
        Commands::GenCompletions { out_dir } => {
            for path in write_completion_scripts(&out_dir)? {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}

fn write_reference(out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let path = out_dir.join("reference.md");
    let markdown = clap_markdown::help_markdown::<taskdb::cli::Cli>();
    fs::write(&path, markdown).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn completion_file_name(shell: Shell) -> &'static str {
    match shell {
        Shell::Zsh => "_taskdb",
        Shell::Fish => "taskdb.fish",
        _ => "taskdb.bash",
    }
}

fn write_completion_scripts(out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(COMPLETION_SHELLS.len());
    for shell in COMPLETION_SHELLS {
        let path = out_dir.join(completion_file_name(shell));
        let mut file =
            File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        taskdb::cli::write_completions(shell, &mut file)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reference_lists_every_subcommand() {
        let temp = tempdir().unwrap();
        let path = write_reference(temp.path()).unwrap();
        let markdown = fs::read_to_string(path).unwrap();

        for command in ["add", "remove", "update", "done", "schedule", "list", "pending"] {
            assert!(
                markdown.contains(&format!("taskdb {}", command)),
                "missing {} in reference",
                command
            );
        }
    }

    #[test]
    fn test_completion_scripts_written_per_shell() {
        let temp = tempdir().unwrap();
        let paths = write_completion_scripts(&temp.path().join("nested")).unwrap();

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["taskdb.bash", "_taskdb", "taskdb.fish"]);
        for path in paths {
            assert!(fs::read_to_string(path).unwrap().contains("taskdb"));
        }
    }
}
