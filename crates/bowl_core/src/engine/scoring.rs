//! Score calculation - bonus carry-over across frame boundaries.
//!
//! A spare is worth ten plus the next ball; a strike is worth ten plus the
//! next two balls, which span into the frame after next when the next frame
//! is itself a strike. The tenth frame gets no bonus: its own extra throws
//! are already part of its raw score.
//!
//! Bonuses are computed in a first pass over the immutable raw view and
//! written back in a second pass, so no lookahead ever reads a score that was
//! already finalized.

use crate::engine::FRAMES_PER_GAME;
use crate::error::{GameError, Result};
use crate::models::{Frame, Game};

/// Assigns every frame its bonus and totals the game. Runs exactly once per
/// game; a second invocation reports [`GameError::AlreadyScored`] instead of
/// double-adding.
pub fn calculate_final_score(game: &mut Game) -> Result<u16> {
    if game.is_scored() {
        return Err(GameError::AlreadyScored);
    }
    if game.frames.len() != FRAMES_PER_GAME {
        return Err(GameError::IncompleteGame {
            expected: FRAMES_PER_GAME,
            found: game.frames.len(),
        });
    }

    // Pass 1: bonuses from the raw view. The last frame earns none.
    let mut bonuses = [0u16; FRAMES_PER_GAME];
    for i in 0..FRAMES_PER_GAME - 1 {
        let frame = &game.frames[i];
        let next = i + 1;

        bonuses[i] = if frame.is_spare {
            bonus_roll(&game.frames, next, 0)?
        } else if frame.is_strike {
            let first = bonus_roll(&game.frames, next, 0)?;
            let second = if game.frames[next].is_strike && i + 2 < FRAMES_PER_GAME {
                // Back-to-back strikes: the second ball lives in the frame
                // after next (the tenth frame's first roll at the far end).
                bonus_roll(&game.frames, i + 2, 0)?
            } else {
                // Next frame is the tenth, whose second roll is itself the
                // second bonus ball, or the next frame is not a strike.
                bonus_roll(&game.frames, next, 1)?
            };
            first + second
        } else {
            0
        };
    }

    // Pass 2: write final scores and total the game.
    let mut total = 0u16;
    for (frame, bonus) in game.frames.iter_mut().zip(bonuses) {
        frame.bonus = bonus;
        frame.score += bonus;
        total += frame.score;
    }
    game.score = total;
    game.scored = true;

    log::debug!("game scored: total={total}");
    Ok(total)
}

/// Reads one bonus ball, reporting a malformed sequence instead of indexing
/// out of bounds.
fn bonus_roll(frames: &[Frame], frame_index: usize, roll_index: usize) -> Result<u16> {
    frames[frame_index]
        .rolls
        .get(roll_index)
        .copied()
        .map(u16::from)
        .ok_or(GameError::MissingBonusRoll {
            frame: frame_index,
            found: frames[frame_index].rolls.len(),
            needed: roll_index + 1,
        })
}
