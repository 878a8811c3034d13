pub mod json_api;

pub use json_api::{split_teams_json, SplitTeamsRequest, SplitTeamsResponse, TeamSummary};
