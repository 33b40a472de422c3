use std::cmp::Ordering;
use std::str::FromStr;

use super::types::{Tally, TallyTable};

/// Total ordering used to rank tallies, best first
pub trait RankingPolicy {
    fn compare(&self, a: &Tally, b: &Tally, table: &TallyTable) -> Ordering;
}

/// Points descending, then starting position ascending
#[derive(Debug, Clone, Copy, Default)]
pub struct StartingPositionPolicy;

impl RankingPolicy for StartingPositionPolicy {
    fn compare(&self, a: &Tally, b: &Tally, _table: &TallyTable) -> Ordering {
        by_points(a, b).then_with(|| by_starting_position(a, b))
    }
}

/// Points descending, then Buchholz (sum of the opponents' points)
/// descending, then starting position ascending
#[derive(Debug, Clone, Copy, Default)]
pub struct BuchholzPolicy;

impl RankingPolicy for BuchholzPolicy {
    fn compare(&self, a: &Tally, b: &Tally, table: &TallyTable) -> Ordering {
        by_points(a, b)
            .then_with(|| buchholz(b, table).cmp(&buchholz(a, table)))
            .then_with(|| by_starting_position(a, b))
    }
}

/// Sum of opponents' half points
pub fn buchholz(tally: &Tally, table: &TallyTable) -> u32 {
    tally
        .opponents
        .iter()
        .filter_map(|id| table.get(id))
        .map(|opponent| opponent.half_points)
        .sum()
}

fn by_points(a: &Tally, b: &Tally) -> Ordering {
    b.half_points.cmp(&a.half_points)
}

fn by_starting_position(a: &Tally, b: &Tally) -> Ordering {
    a.starting_position
        .cmp(&b.starting_position)
        .then_with(|| a.participant_id.cmp(&b.participant_id))
}

/// Tie-break selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    #[default]
    StartingPosition,
    Buchholz,
}

impl TieBreak {
    pub fn as_str(&self) -> &str {
        match self {
            TieBreak::StartingPosition => "starting-position",
            TieBreak::Buchholz => "buchholz",
        }
    }
}

impl FromStr for TieBreak {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starting-position" | "start" => Ok(TieBreak::StartingPosition),
            "buchholz" => Ok(TieBreak::Buchholz),
            other => anyhow::bail!("Unknown tie-break: {}", other),
        }
    }
}

impl RankingPolicy for TieBreak {
    fn compare(&self, a: &Tally, b: &Tally, table: &TallyTable) -> Ordering {
        match self {
            TieBreak::StartingPosition => StartingPositionPolicy.compare(a, b, table),
            TieBreak::Buchholz => BuchholzPolicy.compare(a, b, table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(id: i64, start: u32, half_points: u32, opponents: Vec<i64>) -> Tally {
        Tally {
            participant_id: id,
            starting_position: start,
            half_points,
            games_played: opponents.len() as u32,
            opponents,
        }
    }

    fn table(tallies: &[Tally]) -> TallyTable {
        tallies.iter().map(|t| (t.participant_id, t.clone())).collect()
    }

    #[test]
    fn test_starting_position_breaks_ties() {
        let a = tally(1, 4, 2, vec![]);
        let b = tally(2, 2, 2, vec![]);
        let t = table(&[a.clone(), b.clone()]);

        assert_eq!(StartingPositionPolicy.compare(&a, &b, &t), Ordering::Greater);
        assert_eq!(StartingPositionPolicy.compare(&b, &a, &t), Ordering::Less);
    }

    #[test]
    fn test_points_come_first() {
        let a = tally(1, 9, 3, vec![]);
        let b = tally(2, 1, 2, vec![]);
        let t = table(&[a.clone(), b.clone()]);

        assert_eq!(StartingPositionPolicy.compare(&a, &b, &t), Ordering::Less);
    }

    #[test]
    fn test_buchholz_prefers_stronger_opponents() {
        let strong = tally(3, 3, 4, vec![]);
        let weak = tally(4, 4, 0, vec![]);
        let a = tally(1, 2, 2, vec![3]);
        let b = tally(2, 1, 2, vec![4]);
        let t = table(&[a.clone(), b.clone(), strong, weak]);

        assert_eq!(BuchholzPolicy.compare(&a, &b, &t), Ordering::Less);
        assert_eq!(TieBreak::StartingPosition.compare(&a, &b, &t), Ordering::Greater);
    }

    #[test]
    fn test_parse_tie_break() {
        assert_eq!("buchholz".parse::<TieBreak>().unwrap(), TieBreak::Buchholz);
        assert_eq!(
            " Starting-Position ".parse::<TieBreak>().unwrap(),
            TieBreak::StartingPosition
        );
        assert!("sonneborn".parse::<TieBreak>().is_err());
    }
}
