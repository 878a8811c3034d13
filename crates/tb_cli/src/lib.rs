//! Team balancer CLI support library.
//!
//! Roster file IO and the plain-text team listing, kept out of `main.rs`
//! so they stay testable.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tb_core::models::{Player, SplitResult};

/// Read a roster from a JSON array file.
pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading roster file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing roster file {}", path.display()))
}

/// Write a roster back as pretty-printed JSON.
pub fn save_roster(path: &Path, players: &[Player]) -> Result<()> {
    let raw = serde_json::to_string_pretty(players)?;
    fs::write(path, raw).with_context(|| format!("writing roster file {}", path.display()))
}

/// Numbered plain-text team listing: one block per team with its total,
/// nicknames in parentheses where present.
pub fn format_teams(result: &SplitResult, weight_key: Option<&str>) -> String {
    let blocks: Vec<String> = result
        .teams
        .iter()
        .enumerate()
        .map(|(ti, team)| {
            let mut block = format!("Team {} (total {:.1}):", ti + 1, team.total(weight_key));
            for (pi, p) in team.players.iter().enumerate() {
                if p.nickname.is_empty() {
                    block.push_str(&format!("\n  {}. {}", pi + 1, p.name));
                } else {
                    block.push_str(&format!("\n  {}. {} ({})", pi + 1, p.name, p.nickname));
                }
            }
            block
        })
        .collect();
    blocks.join("\n\n")
}
