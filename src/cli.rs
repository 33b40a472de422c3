use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "tournament standings and federation report export")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the ranked standings of a group
    Standings {
        /// Group snapshot (JSON)
        #[arg(short, long)]
        input: PathBuf,
        /// Only count games up to this round
        #[arg(short, long)]
        max_round: Option<u32>,
    },
    /// Export the fixed-column federation report of a group
    Export {
        /// Group snapshot (JSON)
        #[arg(short, long)]
        input: PathBuf,
        /// Rounds to report (optional, defaults to the highest scheduled round)
        #[arg(short, long)]
        rounds: Option<u32>,
        /// Output directory (optional, overrides REPORT_OUTPUT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Print the report instead of writing a file
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },
}
