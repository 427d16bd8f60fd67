use thiserror::Error;

/// Invariant violations surfaced by the score calculator.
///
/// All inputs to the frame builder and the calculator are internally derived,
/// so none of these occur for games produced by the engine itself. They exist
/// to report a malformed frame sequence instead of reading out of bounds or
/// silently double-adding bonuses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game already scored")]
    AlreadyScored,

    #[error("incomplete game: expected {expected} frames, found {found}")]
    IncompleteGame { expected: usize, found: usize },

    #[error("frame {frame} holds {found} rolls, bonus lookahead needs {needed}")]
    MissingBonusRoll {
        frame: usize,
        found: usize,
        needed: usize,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
