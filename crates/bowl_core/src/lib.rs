//! # bowl_core - Deterministic Ten-Pin Bowling Simulation Engine
//!
//! This library simulates single games of ten-pin bowling with randomized
//! rolls and scores them under standard rules, with a JSON API for easy
//! integration with front ends and tooling.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Standard scoring: strike/spare bonus carry-over and tenth-frame rules
//! - Injectable roll source, so games can be scripted and replayed
//! - JSON API for easy integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{simulate_game_json, GameRequest, GameResponse};
pub use engine::{
    calculate_final_score, GameEngine, RollSource, ScriptedRolls, SeededRolls, FRAMES_PER_GAME,
    MAX_PINS,
};
pub use error::{GameError, Result};
pub use models::{Frame, Game};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
