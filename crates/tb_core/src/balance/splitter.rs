use super::rating::resolve_rating;
use crate::error::BalanceError;
use crate::models::{Player, PlayerId, SplitResult, Team};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Split the selected subset of `roster` into `team_count` balanced teams.
///
/// Greedy LPT with randomized tie-breaking: the selection is sorted
/// descending by resolved rating (stable, so equal ratings keep roster
/// order), then each player joins a uniformly random choice among the
/// currently lightest teams. Running the same input against the same RNG
/// state reproduces the same assignment; repeated runs with fresh
/// randomness stay fair without being identical.
///
/// A selection smaller than `team_count` leaves the surplus teams empty;
/// an empty selection yields `team_count` empty teams. Duplicate ids in
/// `selected_ids` include a player at most once. Ids that match nothing
/// in the roster are ignored; referential validity is the caller's
/// responsibility.
pub fn split_teams<R: Rng>(
    roster: &[Player],
    selected_ids: &[PlayerId],
    team_count: usize,
    weight_key: Option<&str>,
    rng: &mut R,
) -> Result<SplitResult, BalanceError> {
    if team_count == 0 {
        return Err(BalanceError::InvalidTeamCount(team_count));
    }

    let selected: HashSet<PlayerId> = selected_ids.iter().copied().collect();
    // Filtering the roster by membership keeps roster order as the
    // canonical pre-sort order and deduplicates the selection.
    let mut picked: Vec<&Player> = roster.iter().filter(|p| selected.contains(&p.id)).collect();
    picked.sort_by(|a, b| {
        let wa = resolve_rating(a, weight_key);
        let wb = resolve_rating(b, weight_key);
        wb.partial_cmp(&wa).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut teams: Vec<Team> = (0..team_count).map(|_| Team::default()).collect();
    let mut sums = vec![0.0f64; team_count];

    for player in picked {
        let min = sums.iter().copied().fold(f64::INFINITY, f64::min);
        // Exact compare is intended: tied sums come from identical additions.
        let tied: Vec<usize> = sums
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == min)
            .map(|(i, _)| i)
            .collect();
        let idx = tied[rng.gen_range(0..tied.len())];
        teams[idx].players.push(player.clone());
        sums[idx] += resolve_rating(player, weight_key);
    }

    Ok(SplitResult { teams })
}

/// Seeded convenience wrapper: same seed and input, same split.
pub fn split_teams_seeded(
    roster: &[Player],
    selected_ids: &[PlayerId],
    team_count: usize,
    weight_key: Option<&str>,
    seed: u64,
) -> Result<SplitResult, BalanceError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    split_teams(roster, selected_ids, team_count, weight_key, &mut rng)
}
