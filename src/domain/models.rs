use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;
use crate::scoring::{GameOutcome, GameResultCode};

pub type ParticipantId = i64;
pub type GroupId = i64;
pub type GameId = i64;

/// Seat colour of a participant in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn code(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "w")]
    Female,
}

impl Sex {
    pub fn code(&self) -> char {
        match self {
            Sex::Male => 'm',
            Sex::Female => 'w',
        }
    }
}

/// Chess titles as written into the title column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Title {
    GM,
    IM,
    FM,
    CM,
    WGM,
    WIM,
    WFM,
    WCM,
}

impl Title {
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::GM => "GM",
            Title::IM => "IM",
            Title::FM => "FM",
            Title::CM => "CM",
            Title::WGM => "WGM",
            Title::WIM => "WIM",
            Title::WFM => "WFM",
            Title::WCM => "WCM",
        }
    }
}

/// Birth date with a mandatory year; month and day may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BirthDateParts", into = "BirthDateParts")]
pub struct BirthDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

/// Serialized shape of [`BirthDate`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BirthDateParts {
    year: i32,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    day: Option<u32>,
}

impl BirthDate {
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Result<Self, ReportError> {
        let invalid = || ReportError::InvalidBirthDate {
            year,
            month: month.unwrap_or(0),
            day: day.unwrap_or(0),
        };

        if !(0..=9999).contains(&year) {
            return Err(invalid());
        }

        match (month, day) {
            (None, None) => {}
            (Some(m), None) if (1..=12).contains(&m) => {}
            (Some(m), Some(d)) if NaiveDate::from_ymd_opt(year, m, d).is_some() => {}
            _ => return Err(invalid()),
        }

        Ok(Self { year, month, day })
    }

    pub fn year_only(year: i32) -> Result<Self, ReportError> {
        Self::new(year, None, None)
    }

    /// Always `YYYY/MM/DD`; unknown parts are written as `00`
    pub fn format(&self) -> String {
        format!(
            "{:04}/{:02}/{:02}",
            self.year,
            self.month.unwrap_or(0),
            self.day.unwrap_or(0)
        )
    }
}

impl TryFrom<BirthDateParts> for BirthDate {
    type Error = ReportError;

    fn try_from(parts: BirthDateParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl From<BirthDate> for BirthDateParts {
    fn from(date: BirthDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

/// Tournament participant within one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub group_id: GroupId,
    pub starting_position: u32,
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    pub sex: Option<Sex>,
    pub title: Option<Title>,
    pub international_rating: Option<u32>,
    pub national_rating: Option<u32>,
    pub federation: Option<String>,
    pub federation_id: Option<String>,
    pub national_id: Option<String>,
    pub international_id: Option<String>,
    pub birth_date: BirthDate,
}

/// Game/pairing of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub group_id: GroupId,
    pub round: u32,
    pub board_number: u32,
    pub white_participant_id: ParticipantId,
    pub black_participant_id: ParticipantId,
    pub result: Option<GameResultCode>,
}

impl Game {
    pub fn involves(&self, participant_id: ParticipantId) -> bool {
        self.seat_of(participant_id).is_some()
    }

    pub fn seat_of(&self, participant_id: ParticipantId) -> Option<Color> {
        if self.white_participant_id == participant_id {
            Some(Color::White)
        } else if self.black_participant_id == participant_id {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn participant_at(&self, color: Color) -> ParticipantId {
        match color {
            Color::White => self.white_participant_id,
            Color::Black => self.black_participant_id,
        }
    }

    pub fn opponent_of(&self, participant_id: ParticipantId) -> Option<ParticipantId> {
        match self.seat_of(participant_id)? {
            Color::White => Some(self.black_participant_id),
            Color::Black => Some(self.white_participant_id),
        }
    }

    /// Outcomes for (white, black); unfinished games are unplayed for both seats
    pub fn outcomes(&self) -> (GameOutcome, GameOutcome) {
        match &self.result {
            Some(code) => code.outcomes(),
            None => (GameOutcome::Unplayed, GameOutcome::Unplayed),
        }
    }

    pub fn outcome_for(&self, color: Color) -> GameOutcome {
        let (white, black) = self.outcomes();
        match color {
            Color::White => white,
            Color::Black => black,
        }
    }
}
