use super::Player;
use crate::balance::resolve_rating;
use serde::{Deserialize, Serialize};

/// One output team. Teams carry no identity beyond their index in the
/// result; colors and labels are the presentation layer's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub players: Vec<Player>,
}

impl Team {
    /// Sum of resolved ratings over the members.
    ///
    /// Derived on demand so a weight-key change is reflected without
    /// re-splitting. An empty team totals 0.
    pub fn total(&self, weight_key: Option<&str>) -> f64 {
        self.players.iter().map(|p| resolve_rating(p, weight_key)).sum()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// The outcome of one split: exactly the requested number of teams, in
/// index order. Teams past the selection size are legitimately empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub teams: Vec<Team>,
}

impl SplitResult {
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Per-team totals in team index order.
    pub fn totals(&self, weight_key: Option<&str>) -> Vec<f64> {
        self.teams.iter().map(|t| t.total(weight_key)).collect()
    }

    /// Max minus min team total, the quantity the splitter minimizes.
    pub fn spread(&self, weight_key: Option<&str>) -> f64 {
        let totals = self.totals(weight_key);
        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
        if totals.is_empty() {
            0.0
        } else {
            max - min
        }
    }
}
