use std::path::PathBuf;

use log::warn;

use crate::domain::Participant;
use crate::standings::TieBreak;

const OUTPUT_DIR_VAR: &str = "REPORT_OUTPUT_DIR";
const TIE_BREAK_VAR: &str = "STANDINGS_TIEBREAK";

#[derive(Debug, Clone, Default)]
pub struct StandingsSettings {
    pub tie_break: TieBreak,
}

/// Which of the two rating scales goes into the rating column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingSource {
    International,
    National,
    #[default]
    InternationalThenNational,
}

impl RatingSource {
    pub fn pick(&self, participant: &Participant) -> Option<u32> {
        match self {
            RatingSource::International => participant.international_rating,
            RatingSource::National => participant.national_rating,
            RatingSource::InternationalThenNational => participant
                .international_rating
                .or(participant.national_rating),
        }
    }
}

/// Which identifier goes into the id column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierSource {
    #[default]
    Federation,
    International,
    National,
}

impl IdentifierSource {
    pub fn pick<'a>(&self, participant: &'a Participant) -> Option<&'a str> {
        match self {
            IdentifierSource::Federation => participant.federation_id.as_deref(),
            IdentifierSource::International => participant.international_id.as_deref(),
            IdentifierSource::National => participant.national_id.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub include_legend: bool,
    pub rating_source: RatingSource,
    pub identifier_source: IdentifierSource,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            include_legend: true,
            rating_source: RatingSource::default(),
            identifier_source: IdentifierSource::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub file_extension: &'static str,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            file_extension: "trf",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub standings: StandingsSettings,
    pub report: ReportSettings,
    pub export: ExportSettings,
}

impl AppConfig {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(OUTPUT_DIR_VAR) {
            self.export.output_dir = PathBuf::from(dir);
        }

        if let Ok(value) = std::env::var(TIE_BREAK_VAR) {
            match value.parse() {
                Ok(tie_break) => self.standings.tie_break = tie_break,
                Err(e) => warn!("Ignoring {}: {}", TIE_BREAK_VAR, e),
            }
        }
    }
}
