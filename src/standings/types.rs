use std::collections::HashMap;

use serde::Serialize;

use crate::domain::ParticipantId;

pub type TallyTable = HashMap<ParticipantId, Tally>;

/// Ranked result of one participant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub participant_id: ParticipantId,
    pub points: f32,
    pub games_played: u32,
    pub rank: u32,
}

/// Running score of one participant before ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub participant_id: ParticipantId,
    pub starting_position: u32,
    pub half_points: u32,
    pub games_played: u32,
    /// Opponents met over the board, in no particular order
    pub opponents: Vec<ParticipantId>,
}

impl Tally {
    pub fn new(participant_id: ParticipantId, starting_position: u32) -> Self {
        Self {
            participant_id,
            starting_position,
            half_points: 0,
            games_played: 0,
            opponents: Vec::new(),
        }
    }

    pub fn points(&self) -> f32 {
        self.half_points as f32 / 2.0
    }

    pub fn into_standing(self, rank: u32) -> Standing {
        Standing {
            participant_id: self.participant_id,
            points: self.points(),
            games_played: self.games_played,
            rank,
        }
    }
}
