//! Rating resolution and the greedy team splitter.

pub mod rating;
pub mod splitter;

pub use rating::{resolve_rating, FALLBACK_RATING};
pub use splitter::{split_teams, split_teams_seeded};
