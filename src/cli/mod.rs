pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "restyle")]
#[command(about = "Bulk rewrite of utility className strings into standardized responsive classes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Rewrite every page in the configured directories")]
    Run {
        #[arg(short, long, default_value = ".", help = "Project root")]
        path: PathBuf,
        #[arg(short, long, help = "TOML rule file replacing the built-in catalogue")]
        rules: Option<PathBuf>,
        #[arg(long, help = "Report what would change without writing")]
        dry_run: bool,
        #[arg(long, help = "Process files in parallel")]
        parallel: bool,
        #[arg(long, help = "Emit the report as JSON instead of console lines")]
        json: bool,
    },

    #[command(about = "Print the rewritten text of one file without writing")]
    Preview {
        #[arg(help = "File to preview")]
        file: PathBuf,
        #[arg(short, long, help = "TOML rule file replacing the built-in catalogue")]
        rules: Option<PathBuf>,
    },

    #[command(about = "List the active rules in application order")]
    Rules {
        #[arg(short, long, help = "TOML rule file replacing the built-in catalogue")]
        rules: Option<PathBuf>,
    },
}
