use crate::balance::split_teams_seeded;
use crate::models::{Player, PlayerId};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct SplitTeamsRequest {
    pub schema_version: u8,
    /// Seed for reproducible tie-breaking; omitted means draw a fresh one.
    #[serde(default)]
    pub seed: Option<u64>,
    pub roster: Vec<Player>,
    pub selected_ids: Vec<PlayerId>,
    pub team_count: usize,
    /// Balance by this tag's ratings instead of the primary rating.
    #[serde(default)]
    pub weight_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub players: Vec<Player>,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct SplitTeamsResponse {
    pub schema_version: u8,
    /// Seed the split actually ran with; echo it back to reproduce.
    pub seed: u64,
    pub team_count: usize,
    pub selected_count: usize,
    pub spread: f64,
    pub teams: Vec<TeamSummary>,
}

/// Split a roster from a JSON request, returning a JSON response.
///
/// Errors are returned as plain human-readable strings for the host
/// application to surface.
pub fn split_teams_json(request_json: &str) -> Result<String, String> {
    let request: SplitTeamsRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {e}"))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!(
            "Unsupported schema_version: {} (expected {})",
            request.schema_version, SCHEMA_VERSION
        ));
    }

    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let weight_key = request.weight_key.as_deref();

    let result = split_teams_seeded(
        &request.roster,
        &request.selected_ids,
        request.team_count,
        weight_key,
        seed,
    )
    .map_err(|e| e.to_string())?;

    let response = SplitTeamsResponse {
        schema_version: SCHEMA_VERSION,
        seed,
        team_count: result.team_count(),
        selected_count: result.player_count(),
        spread: result.spread(weight_key),
        teams: result
            .teams
            .into_iter()
            .map(|team| {
                let total = team.total(weight_key);
                TeamSummary { players: team.players, total }
            })
            .collect(),
    };

    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn request(seed: Option<u64>, team_count: usize) -> String {
        let seed_field = match seed {
            Some(s) => format!("\"seed\": {s},"),
            None => String::new(),
        };
        format!(
            r#"{{
                "schema_version": 1,
                {seed_field}
                "roster": [
                    {{ "id": 1, "name": "Ada", "rating": 90 }},
                    {{ "id": 2, "name": "Ben", "rating": 80 }},
                    {{ "id": 3, "name": "Cyd", "rating": 70 }},
                    {{ "id": 4, "name": "Dee", "rating": 60 }}
                ],
                "selected_ids": [1, 2, 3, 4],
                "team_count": {team_count}
            }}"#
        )
    }

    #[test]
    fn splits_a_valid_request() {
        let response = split_teams_json(&request(Some(7), 2)).unwrap();
        let value: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["seed"], 7);
        assert_eq!(value["team_count"], 2);
        assert_eq!(value["selected_count"], 4);
        assert_eq!(value["spread"], 0.0);
        assert_eq!(value["teams"].as_array().unwrap().len(), 2);
        assert_eq!(value["teams"][0]["total"], 150.0);
    }

    #[test]
    fn draws_a_seed_when_omitted() {
        let response = split_teams_json(&request(None, 2)).unwrap();
        let value: Value = serde_json::from_str(&response).unwrap();
        assert!(value["seed"].is_u64());
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let bad = request(Some(1), 2).replace("\"schema_version\": 1", "\"schema_version\": 9");
        let err = split_teams_json(&bad).unwrap_err();
        assert!(err.contains("schema_version"), "{err}");
    }

    #[test]
    fn rejects_zero_team_count() {
        let err = split_teams_json(&request(Some(1), 0)).unwrap_err();
        assert!(err.contains("team count"), "{err}");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = split_teams_json("{ nope").unwrap_err();
        assert!(err.contains("Invalid request JSON"), "{err}");
    }

    #[test]
    fn tag_ratings_flow_through_weight_key() {
        let json = r#"{
            "schema_version": 1,
            "seed": 3,
            "roster": [
                { "id": 1, "name": "Ada", "rating": 10, "tag_ratings": { "speed": 42 } },
                { "id": 2, "name": "Ben", "rating": 10 }
            ],
            "selected_ids": [1, 2],
            "team_count": 2,
            "weight_key": "speed"
        }"#;
        let response = split_teams_json(json).unwrap();
        let value: Value = serde_json::from_str(&response).unwrap();

        let mut totals: Vec<f64> = value["teams"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["total"].as_f64().unwrap())
            .collect();
        totals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        // Ben has no "speed" rating, so his primary rating 10 applies.
        assert_eq!(totals, vec![10.0, 42.0]);
    }
}
