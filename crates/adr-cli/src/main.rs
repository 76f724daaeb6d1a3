mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "adr",
    about = "Manage a directory of numbered architecture decision records",
    version,
    propagate_version = true
)]
struct Cli {
    /// Store directory (default: docs/decisions)
    #[arg(long, global = true, env = "ADR_STORE_DIR")]
    dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store directory, the seed record, and an empty index
    Init,

    /// Create a new record with the next free number
    New {
        /// Record title, kept verbatim in the heading and slugged in the filename
        title: String,

        /// Initial status (default: Proposed)
        status: Option<String>,
    },

    /// List all records
    List,

    /// Set the status of a record
    Status {
        /// Record number
        number: u32,

        /// New status: Proposed, Accepted, Deprecated, or Superseded
        new_status: String,

        /// Number of the superseding record (required with Superseded)
        superseded_by: Option<u32>,
    },

    /// Regenerate the README.md index from the records
    Index,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors go to stderr and exit 1; --help and --version
            // print to stdout and exit 0.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let dir = root::resolve_store_dir(cli.dir.as_deref());
    tracing::debug!("store dir: {}", dir.display());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&dir, cli.json),
        Commands::New { title, status } => cmd::new::run(&dir, &title, status.as_deref(), cli.json),
        Commands::List => cmd::list::run(&dir, cli.json),
        Commands::Status {
            number,
            new_status,
            superseded_by,
        } => cmd::status::run(&dir, number, &new_status, superseded_by, cli.json),
        Commands::Index => cmd::index::run(&dir, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
