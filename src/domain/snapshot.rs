use serde::{Deserialize, Serialize};

use super::models::{Game, GroupId, Participant};

/// One group as handed over by the data source: roster plus all games so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSnapshot {
    pub group_id: GroupId,
    #[serde(default)]
    pub name: Option<String>,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl GroupSnapshot {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Highest round that has at least one game scheduled
    pub fn highest_round(&self) -> u32 {
        self.games.iter().map(|g| g.round).max().unwrap_or(0)
    }
}
