//! Serializable move logs and deterministic replay.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ConfigError, Opening};
use crate::engine::BoardEngine;
use crate::rules::{Kalah, MoveError, RulesEngine};

/// Errors raised while decoding or replaying a [`MoveLog`].
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// The bytes are not a valid encoded log.
    #[display("failed to decode move log: {_0}")]
    #[from]
    Decode(bincode::Error),

    /// The log was recorded from an unplayable opening.
    #[display("invalid opening: {_0}")]
    #[from]
    Config(ConfigError),

    /// A recorded move was refused by the rules.
    #[display("move {index} (slot {slot}) was rejected: {error}")]
    IllegalMove {
        index: usize,
        slot: usize,
        #[error(source)]
        error: MoveError,
    },
}

/// The slots chosen in a game, with the opening they were played from.
///
/// Games started from a set position carry that position, so every log
/// replays into the game it was taken from.
///
/// ## Example
///
/// ```
/// use rust_mancala::{BoardEngine, MoveLog};
///
/// let mut engine = BoardEngine::default();
/// engine.apply_move(2);
/// engine.apply_move(5);
///
/// let bytes = engine.move_log().to_bytes().unwrap();
/// let restored = MoveLog::from_bytes(&bytes).unwrap().replay().unwrap();
///
/// assert_eq!(restored.slots(), engine.slots());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    /// Starting point of the game.
    pub opening: Opening,

    /// Chosen slots in play order.
    pub moves: Vec<usize>,
}

impl MoveLog {
    /// Create an empty log for an opening.
    #[must_use]
    pub fn new(opening: impl Into<Opening>) -> Self {
        Self {
            opening: opening.into(),
            moves: Vec::new(),
        }
    }

    /// Append a move.
    pub fn push(&mut self, slot: usize) {
        self.moves.push(slot);
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReplayError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from [`to_bytes`](Self::to_bytes) output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReplayError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Play the log from its opening with Kalah rules.
    pub fn replay(&self) -> Result<BoardEngine, ReplayError> {
        self.replay_with_rules(Kalah::new())
    }

    /// Play the log from its opening with custom rules.
    ///
    /// Stops at the first move the rules refuse.
    pub fn replay_with_rules<R: RulesEngine>(
        &self,
        rules: R,
    ) -> Result<BoardEngine<R>, ReplayError> {
        let mut engine = BoardEngine::with_opening(self.opening, rules)?;

        for (index, &slot) in self.moves.iter().enumerate() {
            let outcome = engine.apply_move(slot);
            if let Some(error) = outcome.rejection {
                return Err(ReplayError::IllegalMove { index, slot, error });
            }
        }

        debug!(moves = self.moves.len(), "move log replayed");
        Ok(engine)
    }
}

impl<R: RulesEngine> BoardEngine<R> {
    /// Build a replayable log of the moves played so far.
    #[must_use]
    pub fn move_log(&self) -> MoveLog {
        MoveLog {
            opening: *self.opening(),
            moves: self.move_history(),
        }
    }
}
