use thiserror::Error;

/// Errors from the split operation itself.
///
/// The balancer is total on its documented input shape; the only rejected
/// parameter is a zero team count (decided: reject, not clamp).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("team count must be at least 1, got {0}")]
    InvalidTeamCount(usize),
}
