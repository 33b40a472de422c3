use anyhow::Context as _;
use thiserror::Error;

use crate::domain::ParticipantId;

/// Failures of the standings and report pipeline.
///
/// Each variant aborts the call that produced it; no partial standings or
/// documents are ever returned next to one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("invalid result code {code:?}: {reason}")]
    InvalidResultCode { code: String, reason: &'static str },

    #[error("contradictory result pairing {white}/{black}")]
    InvalidResultPairing { white: char, black: char },

    #[error("game {game_id} references participant {participant_id} outside the roster")]
    UnknownParticipant {
        game_id: i64,
        participant_id: ParticipantId,
    },

    #[error("no standing computed for participant {0}")]
    MissingStanding(ParticipantId),

    #[error("participant {0} appears more than once in the roster")]
    DuplicateParticipant(ParticipantId),

    #[error("starting position {starting_position} is shared by participants {participant_ids:?}")]
    DuplicateStartingPosition {
        starting_position: u32,
        participant_ids: (ParticipantId, ParticipantId),
    },

    #[error("game {game_id} pairs participant {participant_id} against themselves")]
    SelfPairing {
        game_id: i64,
        participant_id: ParticipantId,
    },

    #[error("game {game_id} has round 0; rounds start at 1")]
    InvalidRound { game_id: i64 },

    #[error("participant {participant_id} has more than one game in round {round}")]
    DuplicateRoundGame {
        participant_id: ParticipantId,
        round: u32,
    },

    #[error("row of participant {participant_id} has {found} rounds, report has {expected}")]
    RoundCountMismatch {
        participant_id: ParticipantId,
        expected: usize,
        found: usize,
    },

    #[error("field {field} value {value:?} does not fit into {width} columns")]
    FieldOverflow {
        field: &'static str,
        value: String,
        width: usize,
    },

    #[error("invalid birth date {year}/{month}/{day}")]
    InvalidBirthDate { year: i32, month: u32, day: u32 },
}

/// Informational findings that do not abort encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportNotice {
    NameTruncated {
        participant_id: ParticipantId,
        original: String,
        written: String,
    },
}

/// Add context to snapshot loading errors
pub fn load_context(path: &str) -> String {
    format!("Failed to load group snapshot from: {}", path)
}

/// Add context to report writing errors
pub fn write_context(path: &str) -> String {
    format!("Failed to write report to: {}", path)
}

/// Wrap result with load context
pub fn with_load_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(load_context(path))
}

/// Wrap result with write context
pub fn with_write_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(write_context(path))
}
