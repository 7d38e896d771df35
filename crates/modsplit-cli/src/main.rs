//! Modsplit CLI
//!
//! Command-line interface for splitting a monolithic source file into
//! per-group module files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "modsplit")]
#[command(author, version, about = "Split a monolithic source file into modules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract functions into per-group module files
    Split {
        /// Monolithic source file to split
        #[arg(default_value = "admin_backup.rs")]
        input: PathBuf,

        /// Directory the module files are written to
        #[arg(short, long, default_value = "src/admin_extracted")]
        out_dir: PathBuf,

        /// JSON plan file (defaults to the builtin plan)
        #[arg(short, long)]
        plan: Option<PathBuf>,
    },

    /// Show the resolved split plan
    Plan {
        /// JSON plan file (defaults to the builtin plan)
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// Dump the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("modsplit_cli=debug,modsplit_parser=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("modsplit_cli=info,modsplit_parser=info")
            .init();
    }

    match cli.command {
        Commands::Split {
            input,
            out_dir,
            plan,
        } => {
            commands::split::run(input, out_dir, plan)?;
        }
        Commands::Plan { plan, json } => {
            commands::plan::run(plan, json)?;
        }
    }

    Ok(())
}
