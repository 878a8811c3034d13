pub mod player;
pub mod team;

pub use player::{Player, PlayerId, Rating};
pub use team::{SplitResult, Team};
