use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::outcome::{DRAW, FORFEIT_LOSS, FORFEIT_WIN, GameOutcome, LOSS, WIN};
use crate::errors::ReportError;

/// Alias accepted for a draw seat in imported codes
const DRAW_ALIAS: char = '=';
const SEAT_SEPARATOR: char = ':';

/// Result of a finished game: one seat character for white and one for black.
///
/// Only consistent pairs can be constructed, so decoding a stored code
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameResultCode {
    white: char,
    black: char,
}

impl GameResultCode {
    pub fn new(white: char, black: char) -> Result<Self, ReportError> {
        let white = normalize_seat(white);
        let black = normalize_seat(black);
        decode_pair(white, black)?;
        Ok(Self { white, black })
    }

    pub fn outcomes(&self) -> (GameOutcome, GameOutcome) {
        // Validated on construction
        decode_pair(self.white, self.black).unwrap_or((GameOutcome::Unplayed, GameOutcome::Unplayed))
    }

    /// Points of (white, black)
    pub fn points(&self) -> (f32, f32) {
        let (white, black) = self.outcomes();
        (white.points(), black.points())
    }
}

/// Decode a (white, black) pair of seat characters into outcomes
pub fn decode_pair(white: char, black: char) -> Result<(GameOutcome, GameOutcome), ReportError> {
    use GameOutcome::*;

    match (white, black) {
        (WIN, LOSS) => Ok((Win, Loss)),
        (LOSS, WIN) => Ok((Loss, Win)),
        (DRAW, DRAW) => Ok((Draw, Draw)),
        (FORFEIT_WIN, FORFEIT_LOSS) => Ok((ForfeitWin, ForfeitLoss)),
        (FORFEIT_LOSS, FORFEIT_WIN) => Ok((ForfeitLoss, ForfeitWin)),
        (FORFEIT_LOSS, FORFEIT_LOSS) => Ok((DoubleForfeit, DoubleForfeit)),
        _ => Err(ReportError::InvalidResultPairing { white, black }),
    }
}

fn normalize_seat(seat: char) -> char {
    if seat == DRAW_ALIAS { DRAW } else { seat }
}

fn split_seats(code: &str) -> Result<(char, char), ReportError> {
    let invalid = |reason| ReportError::InvalidResultCode {
        code: code.to_string(),
        reason,
    };

    let chars: Vec<char> = code.trim().chars().collect();
    match chars.as_slice() {
        [white, black] => Ok((*white, *black)),
        [white, SEAT_SEPARATOR, black] => Ok((*white, *black)),
        [_, _, _] => Err(invalid("seats must be separated by ':'")),
        _ => Err(invalid("expected two seat characters")),
    }
}

impl FromStr for GameResultCode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (white, black) = split_seats(s)?;
        Self::new(white, black)
    }
}

impl TryFrom<String> for GameResultCode {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameResultCode> for String {
    fn from(code: GameResultCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for GameResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.white, SEAT_SEPARATOR, self.black)
    }
}
