pub mod outcome;
pub mod result_code;

pub use outcome::GameOutcome;
pub use result_code::{GameResultCode, decode_pair};
