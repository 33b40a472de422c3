//! Column layout of the federation report.
//!
//! Widths are derived from the legend strings, so the legend line and the
//! data lines cannot drift apart.

use crate::errors::ReportError;

/// A fixed-width field and its legend text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub legend: &'static str,
}

impl Field {
    pub const fn width(&self) -> usize {
        self.legend.len()
    }
}

/// Piece of a line: a field or a run of literal spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Field(Field),
    Gap(usize),
}

impl Segment {
    pub const fn width(&self) -> usize {
        match self {
            Segment::Field(field) => field.width(),
            Segment::Gap(width) => *width,
        }
    }
}

pub const STARTING_POSITION: Field = Field { name: "starting position", legend: "DDD" };
pub const SEQUENCE_INDEX: Field = Field { name: "sequence index", legend: "SSSS" };
pub const SEX: Field = Field { name: "sex", legend: "s" };
pub const TITLE: Field = Field { name: "title", legend: "TTT" };
pub const NAME: Field = Field { name: "name", legend: "NNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNN" };
pub const RATING: Field = Field { name: "rating", legend: "RRRR" };
pub const FEDERATION: Field = Field { name: "federation", legend: "FFF" };
pub const IDENTIFIER: Field = Field { name: "identifier", legend: "IIIIIIIIIII" };
pub const BIRTH_DATE: Field = Field { name: "birth date", legend: "BBBB/BB/BB" };
pub const POINTS: Field = Field { name: "points", legend: "PPPP" };
pub const RANK: Field = Field { name: "rank", legend: "RRRR" };

pub const OPPONENT: Field = Field { name: "opponent", legend: "OOOO" };
pub const COLOR: Field = Field { name: "color", legend: "C" };
pub const RESULT: Field = Field { name: "result", legend: "G" };

pub const PREAMBLE: [Segment; 20] = [
    Segment::Field(STARTING_POSITION),
    Segment::Gap(1),
    Segment::Field(SEQUENCE_INDEX),
    Segment::Gap(1),
    Segment::Field(SEX),
    Segment::Field(TITLE),
    Segment::Gap(1),
    Segment::Field(NAME),
    Segment::Gap(1),
    Segment::Field(RATING),
    Segment::Gap(1),
    Segment::Field(FEDERATION),
    Segment::Gap(1),
    Segment::Field(IDENTIFIER),
    Segment::Gap(1),
    Segment::Field(BIRTH_DATE),
    Segment::Gap(1),
    Segment::Field(POINTS),
    Segment::Gap(1),
    Segment::Field(RANK),
];

pub const ROUND_BLOCK: [Segment; 6] = [
    Segment::Gap(2),
    Segment::Field(OPPONENT),
    Segment::Gap(1),
    Segment::Field(COLOR),
    Segment::Gap(1),
    Segment::Field(RESULT),
];

/// Every line is closed by one literal space
pub const LINE_END: Segment = Segment::Gap(1);

pub fn preamble_width() -> usize {
    PREAMBLE.iter().map(Segment::width).sum()
}

pub fn round_block_width() -> usize {
    ROUND_BLOCK.iter().map(Segment::width).sum()
}

pub fn line_width(round_count: usize) -> usize {
    preamble_width() + round_count * round_block_width() + LINE_END.width()
}

/// Full layout of a line for `round_count` rounds
pub fn layout(round_count: usize) -> Vec<Segment> {
    let mut segments = PREAMBLE.to_vec();
    for _ in 0..round_count {
        segments.extend_from_slice(&ROUND_BLOCK);
    }
    segments.push(LINE_END);
    segments
}

/// Render cells into the layout. Cells must already have their field width.
pub fn compose<I>(segments: &[Segment], cells: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut cells = cells.into_iter();
    let mut line = String::new();

    for segment in segments {
        match segment {
            Segment::Field(field) => {
                let cell = cells.next().unwrap_or_default();
                debug_assert_eq!(cell.chars().count(), field.width(), "cell {}", field.name);
                line.push_str(&cell);
            }
            Segment::Gap(width) => line.push_str(&" ".repeat(*width)),
        }
    }

    line
}

/// Legend line: every field shows its legend letters
pub fn legend_line(round_count: usize) -> String {
    let segments = layout(round_count);
    let legends = segments.iter().filter_map(|segment| match segment {
        Segment::Field(field) => Some(field.legend.to_string()),
        Segment::Gap(_) => None,
    });
    compose(&segments, legends.collect::<Vec<_>>())
}

pub fn blank(field: Field) -> String {
    " ".repeat(field.width())
}

fn overflow(field: Field, value: &str) -> ReportError {
    ReportError::FieldOverflow {
        field: field.name,
        value: value.to_string(),
        width: field.width(),
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Right-aligned, space-padded; a wider value is an error
pub fn right(field: Field, value: &str) -> Result<String, ReportError> {
    if char_len(value) > field.width() {
        return Err(overflow(field, value));
    }
    Ok(format!("{:>width$}", value, width = field.width()))
}

/// Right-aligned, zero-padded number; a wider value is an error
pub fn zero_padded(field: Field, value: u32) -> Result<String, ReportError> {
    let formatted = format!("{:0width$}", value, width = field.width());
    if formatted.len() > field.width() {
        return Err(overflow(field, &formatted));
    }
    Ok(formatted)
}

/// Left-aligned, space-padded; a wider value is an error
pub fn left(field: Field, value: &str) -> Result<String, ReportError> {
    if char_len(value) > field.width() {
        return Err(overflow(field, value));
    }
    Ok(format!("{:<width$}", value, width = field.width()))
}

/// Left-aligned, cut to the field width. Returns whether anything was cut.
pub fn left_truncated(field: Field, value: &str) -> (String, bool) {
    let truncated = char_len(value) > field.width();
    let kept: String = value.chars().take(field.width()).collect();
    (format!("{:<width$}", kept, width = field.width()), truncated)
}

/// One decimal place, right-aligned
pub fn points(field: Field, value: f32) -> Result<String, ReportError> {
    right(field, &format!("{:.1}", value))
}

/// Single character or a space
pub fn flag(value: Option<char>) -> String {
    value.unwrap_or(' ').to_string()
}
