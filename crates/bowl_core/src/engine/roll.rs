//! Roll generation - the injected randomness seam.
//!
//! The frame builder never touches a global random source; it draws every
//! roll through a [`RollSource`] handed in by the caller. Production play
//! uses [`SeededRolls`] over a ChaCha8 stream (same seed = same game), tests
//! and replays substitute [`ScriptedRolls`].

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::MAX_PINS;

/// Source of roll pin counts.
///
/// `pins_standing` is the number of pins that may legally be knocked down and
/// is caller-guaranteed to be in `1..=10`; implementations return a value in
/// `1..=pins_standing`.
pub trait RollSource {
    fn roll_for(&mut self, pins_standing: u8) -> u8;
}

/// Production roll source: uniform draws from a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededRolls {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRolls {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fresh seed from OS entropy. The seed stays readable so an interesting
    /// game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RollSource for SeededRolls {
    fn roll_for(&mut self, pins_standing: u8) -> u8 {
        debug_assert!((1..=MAX_PINS).contains(&pins_standing));
        self.rng.gen_range(1..=pins_standing)
    }
}

/// Sequence-replaying stand-in: returns a pre-scripted list of pin counts in
/// call order, ignoring `pins_standing`.
///
/// Panics when the script runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<u8>,
}

impl ScriptedRolls {
    pub fn new(rolls: &[u8]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll_for(&mut self, _pins_standing: u8) -> u8 {
        self.rolls.pop_front().expect("roll script exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_for_stays_in_range() {
        for seed in 0..16 {
            let mut rolls = SeededRolls::new(seed);
            for pins_standing in 1..=MAX_PINS {
                for _ in 0..200 {
                    let pinfall = rolls.roll_for(pins_standing);
                    assert!(
                        (1..=pins_standing).contains(&pinfall),
                        "roll_for({pins_standing}) returned {pinfall}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRolls::new(12345);
        let mut b = SeededRolls::new(12345);
        for _ in 0..100 {
            assert_eq!(a.roll_for(MAX_PINS), b.roll_for(MAX_PINS));
        }
    }

    #[test]
    fn test_entropy_seed_is_readable() {
        let rolls = SeededRolls::from_entropy();
        let mut replay = SeededRolls::new(rolls.seed());
        let mut original = rolls.clone();
        assert_eq!(original.roll_for(MAX_PINS), replay.roll_for(MAX_PINS));
    }

    #[test]
    fn test_scripted_rolls_replay_in_order() {
        let mut rolls = ScriptedRolls::new(&[10, 6, 4, 1]);
        assert_eq!(rolls.roll_for(10), 10);
        assert_eq!(rolls.roll_for(10), 6);
        assert_eq!(rolls.roll_for(4), 4);
        assert_eq!(rolls.roll_for(10), 1);
        assert_eq!(rolls.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "roll script exhausted")]
    fn test_scripted_rolls_panic_when_dry() {
        let mut rolls = ScriptedRolls::new(&[5]);
        rolls.roll_for(10);
        rolls.roll_for(10);
    }
}
