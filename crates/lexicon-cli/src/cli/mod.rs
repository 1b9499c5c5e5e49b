//! CLI for the Lexicon exception and URL stores.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use lexicon_core::config;
use std::path::PathBuf;

use args::{parse_component, parse_selection};
use commands::{run_completions, run_exception, run_url};

/// Top-level CLI for the Lexicon stores.
#[derive(Debug, Parser)]
#[command(name = "lexicon")]
#[command(about = "Lexicon: keyed exception messages and URL templates", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/lexicon/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exception store file (overrides `exceptions_path` from the config).
    #[arg(long, global = true, value_name = "PATH")]
    pub exceptions_file: Option<PathBuf>,

    /// URL store file (overrides `urls_path` from the config).
    #[arg(long, global = true, value_name = "PATH")]
    pub urls_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Manage keyed exception messages.
    #[command(subcommand)]
    Exception(ExceptionAction),

    /// Manage keyed URL templates.
    #[command(subcommand)]
    Url(UrlAction),

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExceptionAction {
    /// Add or overwrite an exception message.
    Add {
        /// Exception key.
        key: String,
        /// Message stored under the key.
        message: String,
    },

    /// Remove an exception by key.
    Remove {
        /// Exception key.
        key: String,
    },

    /// Print the message stored under a key.
    Get {
        /// Exception key.
        key: String,
    },

    /// List every key and message.
    List,

    /// List every key.
    Keys,
}

#[derive(Debug, Subcommand)]
pub enum UrlAction {
    /// Add or overwrite a URL entry (a full URL, or a base URL with components).
    Add {
        /// URL key.
        key: String,
        /// Full URL, or the base URL when components are given.
        base_or_full: String,
        /// Path component and its candidate values, e.g. `language=en,hy`. Repeatable; order is kept.
        #[arg(long = "component", value_name = "NAME=V1,V2", value_parser = parse_component)]
        components: Vec<(String, Vec<String>)>,
    },

    /// Remove a URL entry by key.
    Remove {
        /// URL key.
        key: String,
    },

    /// Compose and print the URL stored under a key.
    Get {
        /// URL key.
        key: String,
        /// Component selection, e.g. `language=en`. Repeatable.
        #[arg(long = "with", value_name = "NAME=VALUE", value_parser = parse_selection)]
        selections: Vec<(String, String)>,
    },

    /// List every URL entry.
    List,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run()
    }

    pub fn run(self) -> Result<()> {
        let Cli {
            config: config_file,
            exceptions_file,
            urls_file,
            command,
        } = self;

        if let CliCommand::Completions { shell } = command {
            return run_completions(shell);
        }

        let cfg = match &config_file {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match command {
            CliCommand::Exception(action) => {
                let path = resolve_path(exceptions_file, || cfg.exceptions_path())?;
                run_exception(&path, action)
            }
            CliCommand::Url(action) => {
                let path = resolve_path(urls_file, || cfg.urls_path())?;
                run_url(&path, action)
            }
            CliCommand::Completions { .. } => Ok(()),
        }
    }
}

/// A path given on the command line wins over the configured one.
fn resolve_path(
    flag: Option<PathBuf>,
    configured: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    match flag {
        Some(p) => Ok(p),
        None => configured(),
    }
}

#[cfg(test)]
mod tests;
