use std::collections::HashMap;

use super::models::{Game, GameId, Participant, ParticipantId};
use crate::errors::ReportError;

/// Roster of one group indexed by participant ID.
///
/// IDs and starting positions are unique within a roster.
pub struct Roster<'a> {
    participants: HashMap<ParticipantId, &'a Participant>,
}

impl<'a> Roster<'a> {
    pub fn new(participants: &'a [Participant]) -> Result<Self, ReportError> {
        let mut by_id = HashMap::with_capacity(participants.len());
        let mut by_position = HashMap::with_capacity(participants.len());

        for participant in participants {
            if by_id.insert(participant.id, participant).is_some() {
                return Err(ReportError::DuplicateParticipant(participant.id));
            }
            if let Some(first) = by_position.insert(participant.starting_position, participant.id) {
                return Err(ReportError::DuplicateStartingPosition {
                    starting_position: participant.starting_position,
                    participant_ids: (first, participant.id),
                });
            }
        }

        Ok(Self { participants: by_id })
    }

    pub fn get(&self, id: ParticipantId) -> Option<&'a Participant> {
        self.participants.get(&id).copied()
    }

    /// Look up a participant referenced by a game
    pub fn require(&self, id: ParticipantId, game_id: GameId) -> Result<&'a Participant, ReportError> {
        self.get(id).ok_or(ReportError::UnknownParticipant {
            game_id,
            participant_id: id,
        })
    }

    /// A game must sit in round 1 or later and pair two distinct roster participants
    pub fn check_game(&self, game: &Game) -> Result<(), ReportError> {
        if game.round == 0 {
            return Err(ReportError::InvalidRound { game_id: game.id });
        }
        if game.white_participant_id == game.black_participant_id {
            return Err(ReportError::SelfPairing {
                game_id: game.id,
                participant_id: game.white_participant_id,
            });
        }

        self.require(game.white_participant_id, game.id)?;
        self.require(game.black_participant_id, game.id)?;
        Ok(())
    }

    pub fn check_games(&self, games: &[Game]) -> Result<(), ReportError> {
        games.iter().try_for_each(|game| self.check_game(game))
    }
}
