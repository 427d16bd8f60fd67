//! Versioned JSON entry point for front ends and tooling.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::GameEngine;
use crate::models::Frame;
use crate::SCHEMA_VERSION;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_REQUEST";
    pub const SCHEMA_MISMATCH: &str = "E_SCHEMA";
    pub const SIMULATION_FAILED: &str = "E_SIMULATION";
    pub const SERIALIZATION_FAILED: &str = "E_SERIALIZE";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    /// Absent seed means OS entropy; the drawn seed is echoed back.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub frames: Vec<Frame>,
    pub total: u16,
}

/// Simulates one game from a [`GameRequest`] JSON string and returns the
/// [`GameResponse`] JSON. Same seed, same response bytes.
pub fn simulate_game_json(request_json: &str) -> Result<String, String> {
    let request: GameRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::SCHEMA_MISMATCH,
            format!(
                "schema_version must be {SCHEMA_VERSION}, got {}",
                request.schema_version
            ),
        ));
    }

    let seed = request.seed.unwrap_or_else(rand::random);
    debug!(seed, "simulating game");

    let game = GameEngine::from_seed(seed)
        .play()
        .map_err(|e| err_code(error_codes::SIMULATION_FAILED, e))?;
    info!(seed, total = game.score, "game simulated");

    let response = GameResponse {
        schema_version: SCHEMA_VERSION,
        seed,
        total: game.score,
        frames: game.frames,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION_FAILED, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeded_request_round_trip() {
        let request = json!({ "schema_version": 1, "seed": 42 }).to_string();
        let response = simulate_game_json(&request).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["seed"], 42);
        assert_eq!(parsed["frames"].as_array().unwrap().len(), 10);
        assert!(parsed["total"].as_u64().unwrap() <= 300);
    }

    #[test]
    fn test_same_seed_same_response_bytes() {
        let request = json!({ "schema_version": 1, "seed": 7 }).to_string();
        let a = simulate_game_json(&request).unwrap();
        let b = simulate_game_json(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_seed_draws_one_and_echoes_it() {
        let request = json!({ "schema_version": 1 }).to_string();
        let response = simulate_game_json(&request).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        let seed = parsed["seed"].as_u64().unwrap();

        // Echoed seed replays the identical game.
        let replay_request = json!({ "schema_version": 1, "seed": seed }).to_string();
        assert_eq!(simulate_game_json(&replay_request).unwrap(), response);
    }

    #[test]
    fn test_schema_mismatch_is_rejected() {
        let request = json!({ "schema_version": 99, "seed": 1 }).to_string();
        let err = simulate_game_json(&request).unwrap_err();
        assert!(err.starts_with(error_codes::SCHEMA_MISMATCH));
    }

    #[test]
    fn test_malformed_request_is_rejected() {
        let err = simulate_game_json("not json").unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_REQUEST));
    }
}
