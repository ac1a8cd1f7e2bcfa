//! CLI for the biodl ontology/annotation downloader.

mod commands;

use anyhow::{Context, Result};
use biodl_core::catalog::Catalog;
use biodl_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_fetch, run_get, run_list};

/// Top-level CLI for biodl.
#[derive(Debug, Parser)]
#[command(name = "biodl")]
#[command(about = "biodl: download bioinformatics ontology and annotation files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the known downloadable resources.
    List,

    /// Download known resources by name.
    Fetch {
        /// Resource names as shown by `biodl list`.
        names: Vec<String>,

        /// Download every resource in the catalog.
        #[arg(long)]
        all: bool,

        /// Directory to place downloads in (default: configured download
        /// dir, else the current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Download an arbitrary HTTP/HTTPS/FTP URL.
    Get {
        /// Source URL.
        url: String,

        /// Destination file (default: filename derived from the URL,
        /// placed in the download dir).
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        // A bad builtin entry is a packaging bug; fail startup loudly and
        // list every offender.
        let catalog = Catalog::builtin().context("builtin catalog is invalid")?;

        match cli.command {
            CliCommand::List => run_list(&catalog),
            CliCommand::Fetch { names, all, dir } => {
                run_fetch(&catalog, &cfg, &names, all, dir.as_deref())
            }
            CliCommand::Get { url, output } => run_get(&cfg, &url, output.as_deref()),
        }
    }
}
