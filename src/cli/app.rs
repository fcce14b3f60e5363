//! Main CLI application structure

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{edit, thread};
use crate::storage::{Config, Workspace};

#[derive(Parser)]
#[command(name = "threadlist")]
#[command(author, version, about = "Todo lists stored as chat message text")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new threadlist workspace
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Create an empty list for a thread
    New {
        /// Thread key
        thread: String,
    },

    /// Show a thread's list
    Show {
        /// Thread key
        thread: String,

        /// Print the stored text without parsing it
        #[arg(long)]
        raw: bool,
    },

    /// List threads that have a list
    Threads,

    /// Store a copied list message for a thread (file path or '-' for stdin)
    Import {
        /// Thread key
        thread: String,

        /// File containing the message text
        source: String,
    },

    #[command(flatten)]
    Edit(edit::EditCommands),
}

/// Main entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format.unwrap_or_else(|| {
        Config::load_global()
            .map(|global| global.default_format.into())
            .unwrap_or_default()
    });
    let output = Output::new(format, cli.verbose);

    output.verbose("threadlist starting");

    match execute(cli.command, &output) {
        Ok(()) => {
            output.verbose("Command completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands, output: &Output) -> Result<()> {
    match command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing workspace at: {}", path));
            let workspace = Workspace::init(&path)?;
            output.verbose_ctx(
                "init",
                &format!(
                    "Created .threadlist directory at: {}",
                    workspace.threadlist_dir().display()
                ),
            );
            output.success(&format!(
                "Initialized threadlist workspace at {}",
                workspace.root().display()
            ));
        }

        Commands::New { thread: key } => thread::new_thread(output, &key)?,
        Commands::Show { thread: key, raw } => thread::show_thread(output, &key, raw)?,
        Commands::Threads => thread::list_threads(output)?,
        Commands::Import { thread: key, source } => thread::import_thread(output, &key, &source)?,

        Commands::Edit(cmd) => edit::run(cmd, output)?,
    }

    Ok(())
}
