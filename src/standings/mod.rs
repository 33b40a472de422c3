pub mod calculator;
pub mod policy;
pub mod types;

pub use calculator::compute_standings;
pub use policy::{BuchholzPolicy, RankingPolicy, StartingPositionPolicy, TieBreak};
pub use types::{Standing, Tally, TallyTable};
