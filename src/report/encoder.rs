use log::warn;

use super::columns;
use super::row::{ReportRow, RoundEntry};
use super::ruler;
use crate::config::ReportSettings;
use crate::errors::{ReportError, ReportNotice};

/// Complete document plus the non-fatal findings made while encoding it
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedReport {
    pub text: String,
    pub notices: Vec<ReportNotice>,
}

impl EncodedReport {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Render header and rows into the fixed-column document.
///
/// Either every row encodes or the whole call fails.
pub fn encode_report(
    rows: &[ReportRow],
    round_count: usize,
    settings: &ReportSettings,
) -> Result<EncodedReport, ReportError> {
    let segments = columns::layout(round_count);
    let mut lines = header_lines(round_count, settings);
    let mut notices = Vec::new();

    for row in rows {
        check_round_count(row, round_count)?;
        let (cells, notice) = encode_cells(row)?;
        notices.extend(notice);
        lines.push(columns::compose(&segments, cells));
    }

    for notice in &notices {
        log_notice(notice);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(EncodedReport { text, notices })
}

/// Ruler lines, followed by the legend when enabled
pub fn header_lines(round_count: usize, settings: &ReportSettings) -> Vec<String> {
    let width = columns::line_width(round_count);
    let mut lines = vec![ruler::decade_line(width), ruler::digit_line(width)];
    if settings.include_legend {
        lines.push(columns::legend_line(round_count));
    }
    lines
}

/// Encode a single data line without any header
pub fn encode_row(row: &ReportRow) -> Result<(String, Option<ReportNotice>), ReportError> {
    let segments = columns::layout(row.rounds.len());
    let (cells, notice) = encode_cells(row)?;
    Ok((columns::compose(&segments, cells), notice))
}

fn check_round_count(row: &ReportRow, round_count: usize) -> Result<(), ReportError> {
    if row.rounds.len() != round_count {
        return Err(ReportError::RoundCountMismatch {
            participant_id: row.participant_id,
            expected: round_count,
            found: row.rounds.len(),
        });
    }
    Ok(())
}

fn encode_cells(row: &ReportRow) -> Result<(Vec<String>, Option<ReportNotice>), ReportError> {
    let (name, truncated) = columns::left_truncated(columns::NAME, &row.name);
    let notice = truncated.then(|| ReportNotice::NameTruncated {
        participant_id: row.participant_id,
        original: row.name.clone(),
        written: name.trim_end().to_string(),
    });

    let mut cells = vec![
        columns::zero_padded(columns::STARTING_POSITION, row.starting_position)?,
        columns::right(columns::SEQUENCE_INDEX, &row.sequence_index.to_string())?,
        columns::flag(row.sex.map(|s| s.code())),
        columns::left(columns::TITLE, row.title.map(|t| t.as_str()).unwrap_or(""))?,
        name,
        optional_number(columns::RATING, row.rating)?,
        columns::left(columns::FEDERATION, row.federation.as_deref().unwrap_or(""))?,
        columns::right(columns::IDENTIFIER, row.federation_id.as_deref().unwrap_or(""))?,
        columns::left(columns::BIRTH_DATE, &row.birth_date)?,
        columns::points(columns::POINTS, row.points)?,
        columns::right(columns::RANK, &row.rank.to_string())?,
    ];

    for entry in &row.rounds {
        cells.extend(encode_round(entry)?);
    }

    Ok((cells, notice))
}

fn encode_round(entry: &RoundEntry) -> Result<[String; 3], ReportError> {
    Ok([
        optional_number(columns::OPPONENT, entry.opponent_starting_position)?,
        columns::flag(entry.color.map(|c| c.code())),
        columns::flag(Some(entry.result_code)),
    ])
}

fn optional_number(field: columns::Field, value: Option<u32>) -> Result<String, ReportError> {
    match value {
        Some(number) => columns::right(field, &number.to_string()),
        None => Ok(columns::blank(field)),
    }
}

fn log_notice(notice: &ReportNotice) {
    match notice {
        ReportNotice::NameTruncated {
            participant_id,
            original,
            written,
        } => warn!(
            "Name of participant {} truncated to {} columns: {:?} -> {:?}",
            participant_id,
            columns::NAME.width(),
            original,
            written
        ),
    }
}
