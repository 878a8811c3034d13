//! # tb_core - Team Balancer Core
//!
//! This library partitions a roster of rated players into balanced teams
//! using a greedy longest-processing-time-first heuristic with randomized
//! tie-breaking.
//!
//! ## Features
//! - Reproducible splits (same seed = same teams)
//! - Optional per-tag rating dimensions overriding the primary rating
//! - Roster persistence behind a pluggable key-value store
//! - Compact checksummed share codes for moving rosters between devices
//! - JSON API for easy integration with host applications

pub mod api;
pub mod balance;
pub mod error;
pub mod models;
pub mod share;
pub mod store;

// Re-export main API functions
pub use api::{split_teams_json, SplitTeamsRequest, SplitTeamsResponse};
pub use balance::{resolve_rating, split_teams, split_teams_seeded, FALLBACK_RATING};
pub use error::BalanceError;
pub use models::{Player, PlayerId, Rating, SplitResult, Team};
pub use share::{decode_share, encode_share, merge_by_id, ShareError};
pub use store::{initial_roster, KeyValueStore, RosterStore, StoreError};
