pub mod models;
mod roster;
mod snapshot;

pub use models::*;
pub use roster::Roster;
pub use snapshot::GroupSnapshot;
