use serde::{Deserialize, Serialize};

use super::frame::Frame;
use crate::engine::FRAMES_PER_GAME;

/// A single game: ten frames in play order plus the total score.
///
/// Frames are owned by value; a frame is fixed once handed to the game, and
/// only the score calculator writes to it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub frames: Vec<Frame>,
    /// Sum of all frame final scores; zero until the game is scored.
    pub score: u16,
    /// Set once the score calculator has run. Guards re-invocation.
    #[serde(default)]
    pub(crate) scored: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn is_complete(&self) -> bool {
        self.frames.len() == FRAMES_PER_GAME
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }
}
