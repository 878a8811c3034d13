//! Roster persistence behind a pluggable key-value boundary.

pub mod kv;
pub mod roster;

use crate::models::PlayerId;
use thiserror::Error;

/// Storage key the roster lives under, shared by every store backend.
pub const ROSTER_KEY: &str = "team_balancer_players";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate player name: {name}")]
    DuplicateName { name: String },

    #[error("player not found: {id}")]
    NotFound { id: PlayerId },
}

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use roster::{initial_roster, RosterStore};
