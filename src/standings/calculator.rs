use log::debug;

use super::policy::RankingPolicy;
use super::types::{Standing, Tally, TallyTable};
use crate::domain::{Color, Game, Participant, Roster};
use crate::errors::ReportError;

/// Computes ranked standings of one group.
///
/// Only games up to `max_round` (all when `None`) contribute, but every
/// supplied game must be a valid pairing of roster participants. The
/// result holds exactly one standing per roster participant, best first.
pub fn compute_standings<P>(
    participants: &[Participant],
    games: &[Game],
    max_round: Option<u32>,
    policy: &P,
) -> Result<Vec<Standing>, ReportError>
where
    P: RankingPolicy + ?Sized,
{
    let roster = Roster::new(participants)?;
    roster.check_games(games)?;

    let mut table = build_tally_table(participants);
    let counted = apply_games(&mut table, games, max_round);
    debug!(
        "Counted {} of {} games for {} participants",
        counted,
        games.len(),
        participants.len()
    );

    Ok(rank_tallies(table, policy))
}

fn build_tally_table(participants: &[Participant]) -> TallyTable {
    participants
        .iter()
        .map(|p| (p.id, Tally::new(p.id, p.starting_position)))
        .collect()
}

fn apply_games(table: &mut TallyTable, games: &[Game], max_round: Option<u32>) -> usize {
    let mut counted = 0;

    for game in games.iter().filter(|g| is_in_scope(g, max_round)) {
        if game.result.is_none() {
            continue;
        }

        apply_seat(table, game, Color::White);
        apply_seat(table, game, Color::Black);
        counted += 1;
    }

    counted
}

fn is_in_scope(game: &Game, max_round: Option<u32>) -> bool {
    max_round.is_none_or(|max| game.round <= max)
}

fn apply_seat(table: &mut TallyTable, game: &Game, color: Color) {
    let participant_id = game.participant_at(color);
    let outcome = game.outcome_for(color);
    let opponent = game.opponent_of(participant_id);

    if let Some(tally) = table.get_mut(&participant_id) {
        tally.half_points += outcome.half_points();
        if outcome.counts_as_played() {
            tally.games_played += 1;
        }
        if outcome.is_over_the_board() {
            tally.opponents.extend(opponent);
        }
    }
}

fn rank_tallies<P>(table: TallyTable, policy: &P) -> Vec<Standing>
where
    P: RankingPolicy + ?Sized,
{
    let mut tallies: Vec<&Tally> = table.values().collect();
    tallies.sort_by(|a, b| policy.compare(a, b, &table));

    tallies
        .into_iter()
        .enumerate()
        .map(|(idx, tally)| tally.clone().into_standing(idx as u32 + 1))
        .collect()
}
