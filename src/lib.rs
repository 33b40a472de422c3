pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod report;
pub mod scoring;
pub mod services;
pub mod standings;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::export::{ExportService, ExportTarget};
use crate::services::standings::StandingsService;

pub use crate::errors::{ReportError, ReportNotice};
pub use crate::report::{EncodedReport, build_report, build_rows, encode_report};
pub use crate::standings::{Standing, compute_standings};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_standings(input: &Path, max_round: Option<u32>) -> Result<()> {
    let config = AppConfig::new();
    let service = StandingsService::new(config);
    service.run(input, max_round)
}

pub fn handle_export(
    input: &Path,
    rounds: Option<u32>,
    output_dir: Option<&PathBuf>,
    to_stdout: bool,
) -> Result<()> {
    let mut config = AppConfig::new();
    if let Some(dir) = output_dir {
        config.export.output_dir = dir.clone();
    }

    let service = ExportService::new(config);
    if let ExportTarget::File(path) = service.run(input, rounds, to_stdout)? {
        info!("Report available at {}", path.display());
    }
    Ok(())
}
