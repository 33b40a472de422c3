use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use log::info;
use tempfile::NamedTempFile;

use super::loader::load_snapshot;
use crate::config::AppConfig;
use crate::domain::GroupSnapshot;
use crate::errors::with_write_context;
use crate::report::{self, EncodedReport, name};

/// Where an export went
#[derive(Debug, Clone, PartialEq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

pub struct ExportService {
    config: AppConfig,
}

impl ExportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, input: &Path, rounds: Option<u32>, to_stdout: bool) -> Result<ExportTarget> {
        info!("=== Starting Report Export ===");

        let snapshot = load_snapshot(input)?;
        let round_count = self.resolve_round_count(&snapshot, rounds);
        info!("  → Reporting {} rounds", round_count);

        let report = report::build_report(&snapshot, round_count, &self.config)?;
        info!(
            "  → Encoded {} participants ({} notices)",
            snapshot.participants.len(),
            report.notices.len()
        );

        let target = if to_stdout {
            print!("{}", report.text);
            ExportTarget::Stdout
        } else {
            let now = Local::now().naive_local();
            ExportTarget::File(self.write_report(&snapshot, round_count, &report, now)?)
        };

        info!("=== Export Complete ===");
        Ok(target)
    }

    fn resolve_round_count(&self, snapshot: &GroupSnapshot, rounds: Option<u32>) -> u32 {
        rounds.unwrap_or_else(|| snapshot.highest_round())
    }

    /// Write through a temp file in the output directory so readers never see
    /// a half-written report. The temp file is removed on every failure path.
    pub fn write_report(
        &self,
        snapshot: &GroupSnapshot,
        round_count: u32,
        report: &EncodedReport,
        now: NaiveDateTime,
    ) -> Result<PathBuf> {
        let dir = &self.config.export.output_dir;
        with_write_context(fs::create_dir_all(dir), &dir.display().to_string())?;

        let filename = report_filename(snapshot, round_count, now, self.config.export.file_extension);
        let path = dir.join(filename);
        let display = path.display().to_string();

        let mut temp = with_write_context(NamedTempFile::new_in(dir), &display)?;
        with_write_context(temp.write_all(report.text.as_bytes()), &display)?;
        with_write_context(temp.as_file().sync_all(), &display)?;
        with_write_context(temp.persist(&path).map_err(|e| e.error), &display)?;

        info!("  → Wrote report to {}", display);
        Ok(path)
    }
}

/// `<group>-r<rounds>-<timestamp>.<ext>`, suitable as a download name too
pub fn report_filename(
    snapshot: &GroupSnapshot,
    round_count: u32,
    now: NaiveDateTime,
    extension: &str,
) -> String {
    format!(
        "{}-r{}-{}.{}",
        group_slug(snapshot),
        round_count,
        now.format("%Y%m%d-%H%M%S"),
        extension
    )
}

fn group_slug(snapshot: &GroupSnapshot) -> String {
    let slug = snapshot
        .name
        .as_deref()
        .map(slugify)
        .unwrap_or_default();

    if slug.is_empty() {
        format!("group-{}", snapshot.group_id)
    } else {
        slug
    }
}

fn slugify(name: &str) -> String {
    let folded = name::fold(name).to_lowercase();
    folded
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
