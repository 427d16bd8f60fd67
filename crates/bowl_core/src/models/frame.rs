use serde::{Deserialize, Serialize};

use crate::engine::roll::RollSource;
use crate::engine::MAX_PINS;

/// One turn of bowling: up to two rolls, three in the tenth frame under bonus
/// conditions.
///
/// `score` is cumulative pinfall while the frame is being played and becomes
/// the final (post-bonus) score once the score calculator has run; `bonus`
/// keeps the raw value recoverable as `score - bonus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Pin counts in roll order.
    pub rolls: Vec<u8>,
    pub score: u16,
    /// Bonus assigned by the score calculator; zero until then.
    #[serde(default)]
    pub bonus: u16,
    pub is_strike: bool,
    pub is_spare: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one roll against `pins_standing` pins from the injected source
    /// and records it.
    ///
    /// Classifies the frame on the way: all ten pins on the first throw is a
    /// strike, a cumulative ten across the first two throws is a spare. The
    /// flags stay mutually exclusive, also for tenth-frame bonus throws.
    ///
    /// `pins_standing` is caller-guaranteed to be in `1..=10`.
    pub fn add_roll<R: RollSource>(&mut self, rolls: &mut R, pins_standing: u8) {
        let pins = rolls.roll_for(pins_standing);
        self.rolls.push(pins);
        self.score += u16::from(pins);
        if self.rolls.len() == 1 && pins == MAX_PINS {
            self.is_strike = true;
        }
        if !self.is_strike && self.score == u16::from(MAX_PINS) {
            self.is_spare = true;
        }
    }

    /// Pinfall before any bonus.
    pub fn raw_score(&self) -> u16 {
        self.score - self.bonus
    }

    pub fn is_open(&self) -> bool {
        !self.is_strike && !self.is_spare
    }

    /// Display text for score sheets.
    pub fn display_text(&self) -> &'static str {
        if self.is_strike {
            "strike"
        } else if self.is_spare {
            "spare"
        } else {
            "open"
        }
    }
}
