//! CLI for adding KtBase components, hooks and styles.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use kt_core::InstallError;

use commands::{run_add, run_add_hook, run_add_style, run_completions, Workspace};

/// Top-level CLI for kt.
#[derive(Debug, Parser)]
#[command(name = "kt", version)]
#[command(about = "CLI for adding KtBase components from GitHub source.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download and add a component (e.g. KtButton) to your project.
    Add {
        /// Component name; the first letter is upper-cased.
        #[arg(value_name = "COMPONENT_NAME")]
        name: String,
    },

    /// Download and add a hook (e.g. useTheme) to src/hook.
    AddHook {
        /// Hook name, with or without the `.js` extension.
        #[arg(value_name = "HOOK_NAME")]
        name: String,
    },

    /// Download the shared stylesheet to src/index.css.
    AddStyle,

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Add { name } => run_add(&Workspace::load()?, &name).await?,
            CliCommand::AddHook { name } => run_add_hook(&Workspace::load()?, &name).await?,
            CliCommand::AddStyle => run_add_style(&Workspace::load()?).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

/// Lines printed to stderr when a command fails: the error chain, then a hint
/// when the failure is an install error that has one.
pub fn failure_report(err: &anyhow::Error) -> Vec<String> {
    let mut lines = vec![format!("kt error: {:#}", err)];
    if let Some(hint) = err.downcast_ref::<InstallError>().and_then(InstallError::hint) {
        lines.push(format!("  {}", hint));
    }
    lines
}

#[cfg(test)]
mod tests;
