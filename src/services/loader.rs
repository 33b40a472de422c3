use std::fs;
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::domain::GroupSnapshot;
use crate::errors::with_load_context;

/// Read a group snapshot exported by the data source
pub fn load_snapshot(path: &Path) -> Result<GroupSnapshot> {
    let display = path.display().to_string();
    let json = with_load_context(fs::read_to_string(path), &display)?;
    let snapshot = with_load_context(GroupSnapshot::from_json(&json), &display)?;

    info!(
        "Loaded group {} from {}: {} participants, {} games",
        snapshot.group_id,
        display,
        snapshot.participants.len(),
        snapshot.games.len()
    );
    Ok(snapshot)
}
