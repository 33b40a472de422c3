use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::info;

use super::loader::load_snapshot;
use crate::config::AppConfig;
use crate::domain::Participant;
use crate::report::name::format_name;
use crate::standings::{Standing, compute_standings};

pub struct StandingsService {
    config: AppConfig,
}

impl StandingsService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, input: &Path, max_round: Option<u32>) -> Result<()> {
        let snapshot = load_snapshot(input)?;
        info!(
            "Ranking with tie-break {}",
            self.config.standings.tie_break.as_str()
        );

        let standings = compute_standings(
            &snapshot.participants,
            &snapshot.games,
            max_round,
            &self.config.standings.tie_break,
        )?;

        println!("{}", render_header().bold());
        print!("{}", render_rows(&standings, &snapshot.participants));
        Ok(())
    }
}

pub fn render_header() -> String {
    format!("{:>4}  {:<33} {:>6} {:>5}", "Rank", "Name", "Points", "Games")
}

/// Plain-text table body, one line per standing
pub fn render_rows(standings: &[Standing], participants: &[Participant]) -> String {
    standings
        .iter()
        .map(|standing| {
            let name = participants
                .iter()
                .find(|p| p.id == standing.participant_id)
                .map(|p| format_name(&p.last_name, &p.first_name))
                .unwrap_or_else(|| format!("#{}", standing.participant_id));
            format!(
                "{:>4}  {:<33} {:>6.1} {:>5}\n",
                standing.rank, name, standing.points, standing.games_played
            )
        })
        .collect()
}
