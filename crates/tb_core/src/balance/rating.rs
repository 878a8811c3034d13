use crate::models::{Player, Rating};

/// Rating substituted when neither a tag nor the primary rating yields a
/// usable number. Unrated players still weigh in instead of vanishing.
pub const FALLBACK_RATING: f64 = 5.0;

/// Resolve the rating a player is balanced by.
///
/// Precedence: the tag rating for `weight_key` when one is defined and
/// numeric, then the primary rating, then [`FALLBACK_RATING`]. Zero and
/// negative ratings pass through unrejected.
///
/// Total over borrowed data: never fails, touches no state.
pub fn resolve_rating(player: &Player, weight_key: Option<&str>) -> f64 {
    if let Some(key) = weight_key {
        if let Some(n) = player.tag_ratings.get(key).and_then(Rating::as_number) {
            return n;
        }
    }
    player
        .rating
        .as_ref()
        .and_then(Rating::as_number)
        .unwrap_or(FALLBACK_RATING)
}
