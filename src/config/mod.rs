pub mod settings;

pub use settings::{AppConfig, ExportSettings, IdentifierSource, RatingSource, ReportSettings, StandingsSettings};
