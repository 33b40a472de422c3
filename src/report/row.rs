use std::collections::HashSet;

use super::name::format_name;
use crate::config::ReportSettings;
use crate::domain::{Color, Game, Participant, ParticipantId, Roster, Sex, Title};
use crate::errors::ReportError;
use crate::scoring::outcome::NOT_PLAYED;
use crate::standings::Standing;

/// One round of a participant's history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundEntry {
    pub opponent_starting_position: Option<u32>,
    pub color: Option<Color>,
    pub result_code: char,
}

impl RoundEntry {
    /// No game in this round
    pub fn bye() -> Self {
        Self {
            opponent_starting_position: None,
            color: None,
            result_code: NOT_PLAYED,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.opponent_starting_position.is_none()
    }
}

/// Typed line of the report, ready for column encoding
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub participant_id: ParticipantId,
    pub starting_position: u32,
    pub sequence_index: u32,
    pub sex: Option<Sex>,
    pub title: Option<Title>,
    pub name: String,
    pub rating: Option<u32>,
    pub federation: Option<String>,
    pub federation_id: Option<String>,
    pub birth_date: String,
    pub points: f32,
    pub rank: u32,
    pub rounds: Vec<RoundEntry>,
}

/// Build one row per standing, in standings order.
///
/// Rounds `1..=round_count` are reported; later games are ignored.
pub fn build_rows(
    standings: &[Standing],
    participants: &[Participant],
    games: &[Game],
    round_count: usize,
    settings: &ReportSettings,
) -> Result<Vec<ReportRow>, ReportError> {
    let roster = Roster::new(participants)?;
    roster.check_games(games)?;
    ensure_every_participant_has_standing(standings, participants)?;

    standings
        .iter()
        .enumerate()
        .map(|(idx, standing)| -> Result<ReportRow, ReportError> {
            let participant = roster
                .get(standing.participant_id)
                .ok_or(ReportError::MissingStanding(standing.participant_id))?;
            let rounds = build_round_entries(participant, games, round_count, &roster)?;
            Ok(build_row(participant, standing, idx as u32 + 1, rounds, settings))
        })
        .collect()
}

fn ensure_every_participant_has_standing(
    standings: &[Standing],
    participants: &[Participant],
) -> Result<(), ReportError> {
    let ranked: HashSet<ParticipantId> = standings.iter().map(|s| s.participant_id).collect();

    match participants.iter().find(|p| !ranked.contains(&p.id)) {
        Some(missing) => Err(ReportError::MissingStanding(missing.id)),
        None => Ok(()),
    }
}

fn build_row(
    participant: &Participant,
    standing: &Standing,
    sequence_index: u32,
    rounds: Vec<RoundEntry>,
    settings: &ReportSettings,
) -> ReportRow {
    ReportRow {
        participant_id: participant.id,
        starting_position: participant.starting_position,
        sequence_index,
        sex: participant.sex,
        title: participant.title,
        name: format_name(&participant.last_name, &participant.first_name),
        rating: settings.rating_source.pick(participant),
        federation: participant.federation.clone(),
        federation_id: settings.identifier_source.pick(participant).map(str::to_string),
        birth_date: participant.birth_date.format(),
        points: standing.points,
        rank: standing.rank,
        rounds,
    }
}

/// Round history indexed by round number; rounds without a game stay byes
pub fn build_round_entries(
    participant: &Participant,
    games: &[Game],
    round_count: usize,
    roster: &Roster,
) -> Result<Vec<RoundEntry>, ReportError> {
    let mut entries = vec![RoundEntry::bye(); round_count];
    let mut filled = vec![false; round_count];

    for game in games.iter().filter(|g| g.involves(participant.id)) {
        let Some(slot) = round_slot(game.round, round_count) else {
            continue;
        };

        if filled[slot] {
            return Err(ReportError::DuplicateRoundGame {
                participant_id: participant.id,
                round: game.round,
            });
        }

        entries[slot] = round_entry(participant.id, game, roster)?;
        filled[slot] = true;
    }

    Ok(entries)
}

fn round_slot(round: u32, round_count: usize) -> Option<usize> {
    let round = round as usize;
    (1..=round_count).contains(&round).then(|| round - 1)
}

fn round_entry(participant_id: ParticipantId, game: &Game, roster: &Roster) -> Result<RoundEntry, ReportError> {
    let color = game
        .seat_of(participant_id)
        .ok_or(ReportError::UnknownParticipant {
            game_id: game.id,
            participant_id,
        })?;
    let opponent = roster.require(game.participant_at(color.opposite()), game.id)?;

    Ok(RoundEntry {
        opponent_starting_position: Some(opponent.starting_position),
        color: Some(color),
        result_code: game.outcome_for(color).seat_code(),
    })
}

