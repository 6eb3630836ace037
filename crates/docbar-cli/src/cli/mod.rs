//! CLI for the documentation sidebar renderer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use docbar_core::config::{MissingFieldPolicy, SidebarFields};
use std::path::PathBuf;

use commands::{run_check, run_completions, run_init, run_man, run_render};

/// Top-level CLI for docbar.
#[derive(Debug, Parser)]
#[command(name = "docbar")]
#[command(about = "Render the documentation sidebar fragment", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the render values come from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Config file (TOML, or JSON with a .json extension). Defaults to ~/.config/docbar/config.toml if present.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Product name shown in the "About" anchor.
    #[arg(long)]
    pub base: Option<String>,

    /// Host serving the distribution archive.
    #[arg(long)]
    pub host: Option<String>,

    /// Directory on the host holding the archive.
    #[arg(long)]
    pub path: Option<String>,

    /// Package name prefix of the archive.
    #[arg(long)]
    pub package: Option<String>,

    /// Release version of the archive.
    #[arg(long)]
    pub version: Option<String>,

    /// Render missing fields as empty text instead of failing.
    #[arg(long)]
    pub permissive: bool,
}

impl SourceArgs {
    pub fn overrides(&self) -> SidebarFields {
        SidebarFields {
            base: self.base.clone(),
            host: self.host.clone(),
            path: self.path.clone(),
            package: self.package.clone(),
            version: self.version.clone(),
        }
    }

    pub fn policy(&self) -> MissingFieldPolicy {
        if self.permissive {
            MissingFieldPolicy::Permissive
        } else {
            MissingFieldPolicy::Strict
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render the sidebar fragment to stdout or a file.
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Write to FILE (created or truncated) instead of stdout.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Write a starter config file.
    Init {
        /// Where to write it. Defaults to ~/.config/docbar/config.toml.
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved values and download link, with link warnings.
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("parsed command: {:?}", cli.command);

        match cli.command {
            CliCommand::Render { source, output } => run_render(&source, output.as_deref())?,
            CliCommand::Init { config, force } => run_init(config.as_deref(), force)?,
            CliCommand::Check { source } => run_check(&source, &mut std::io::stdout().lock())?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
