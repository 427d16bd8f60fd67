//! Frame-by-frame game simulation.
//!
//! One frame per turn: first roll against a full rack, a second roll against
//! whatever is left (a picked-up rack resets to ten for bonus throws), and a
//! third roll in the tenth frame when a strike or spare earned it. Once all
//! ten frames exist the score calculator runs exactly once.

use crate::engine::roll::{RollSource, SeededRolls};
use crate::engine::scoring::calculate_final_score;
use crate::engine::{FRAMES_PER_GAME, MAX_PINS};
use crate::error::Result;
use crate::models::{Frame, Game};

/// Plays complete games against an owned roll source.
#[derive(Debug, Clone)]
pub struct GameEngine<R: RollSource> {
    rolls: R,
}

impl GameEngine<SeededRolls> {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_source(SeededRolls::new(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_source(SeededRolls::from_entropy())
    }

    pub fn seed(&self) -> u64 {
        self.rolls.seed()
    }
}

impl<R: RollSource> GameEngine<R> {
    pub fn with_source(rolls: R) -> Self {
        Self { rolls }
    }

    /// Plays ten frames and scores them. The unscored sequence never escapes,
    /// so the calculator's run-once precondition holds by construction.
    pub fn play(&mut self) -> Result<Game> {
        let mut game = self.play_frames();
        calculate_final_score(&mut game)?;
        Ok(game)
    }

    /// Plays ten frames without scoring them.
    pub fn play_frames(&mut self) -> Game {
        let mut game = Game::new();

        for frame_no in 0..FRAMES_PER_GAME {
            let last = frame_no == FRAMES_PER_GAME - 1;
            let mut frame = Frame::new();

            // First roll, always against a full rack.
            frame.add_roll(&mut self.rolls, MAX_PINS);
            if frame.is_strike && !last {
                log::debug!("frame {}: {:?} strike", frame_no + 1, frame.rolls);
                game.add_frame(frame);
                continue;
            }

            // Second roll against the pins left standing.
            frame.add_roll(&mut self.rolls, remaining_pins(frame.rolls[0]));

            // Third roll in the tenth frame when a strike or spare earned it.
            if last && (frame.is_strike || frame.is_spare) {
                frame.add_roll(&mut self.rolls, remaining_pins(frame.rolls[1]));
            }

            log::debug!(
                "frame {}: {:?} {} raw={}",
                frame_no + 1,
                frame.rolls,
                frame.display_text(),
                frame.score
            );
            game.add_frame(frame);
        }

        game
    }
}

/// Pins standing after `pinfall`; a cleared rack resets to ten so a bonus
/// throw is taken against a fresh rack.
fn remaining_pins(pinfall: u8) -> u8 {
    let remaining = MAX_PINS - pinfall;
    if remaining == 0 {
        MAX_PINS
    } else {
        remaining
    }
}
