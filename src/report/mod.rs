pub mod columns;
pub mod encoder;
pub mod name;
pub mod row;
pub mod ruler;

pub use encoder::{EncodedReport, encode_report};
pub use row::{ReportRow, RoundEntry, build_rows};

use crate::config::AppConfig;
use crate::domain::GroupSnapshot;
use crate::errors::ReportError;
use crate::standings::compute_standings;

/// Standings after `round_count` rounds, encoded as a complete document
pub fn build_report(
    snapshot: &GroupSnapshot,
    round_count: u32,
    config: &AppConfig,
) -> Result<EncodedReport, ReportError> {
    let standings = compute_standings(
        &snapshot.participants,
        &snapshot.games,
        Some(round_count),
        &config.standings.tie_break,
    )?;

    let rows = build_rows(
        &standings,
        &snapshot.participants,
        &snapshot.games,
        round_count as usize,
        &config.report,
    )?;

    encode_report(&rows, round_count as usize, &config.report)
}
