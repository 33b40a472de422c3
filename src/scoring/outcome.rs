/// Per-seat seat characters of the result alphabet
pub const WIN: char = '1';
pub const LOSS: char = '0';
pub const DRAW: char = '½';
pub const FORFEIT_WIN: char = '+';
pub const FORFEIT_LOSS: char = '-';
pub const NOT_PLAYED: char = 'Z';

/// Outcome of a game from the point of view of one seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
    ForfeitWin,
    ForfeitLoss,
    DoubleForfeit,
    Unplayed,
}

impl GameOutcome {
    /// Points in half-point units, so sums stay exact
    pub fn half_points(&self) -> u32 {
        match self {
            GameOutcome::Win | GameOutcome::ForfeitWin => 2,
            GameOutcome::Draw => 1,
            GameOutcome::Loss
            | GameOutcome::ForfeitLoss
            | GameOutcome::DoubleForfeit
            | GameOutcome::Unplayed => 0,
        }
    }

    pub fn points(&self) -> f32 {
        self.half_points() as f32 / 2.0
    }

    pub fn counts_as_played(&self) -> bool {
        !matches!(self, GameOutcome::Unplayed)
    }

    /// Decided at the board rather than by default
    pub fn is_over_the_board(&self) -> bool {
        matches!(self, GameOutcome::Win | GameOutcome::Loss | GameOutcome::Draw)
    }

    pub fn seat_code(&self) -> char {
        match self {
            GameOutcome::Win => WIN,
            GameOutcome::Loss => LOSS,
            GameOutcome::Draw => DRAW,
            GameOutcome::ForfeitWin => FORFEIT_WIN,
            GameOutcome::ForfeitLoss | GameOutcome::DoubleForfeit => FORFEIT_LOSS,
            GameOutcome::Unplayed => NOT_PLAYED,
        }
    }
}
