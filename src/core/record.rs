//! Recorded moves for history tracking.
//!
//! Rule logic never reads the history; it exists for audit, replay and
//! hosts that want to show a move list.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A move accepted by the engine, with its position in the game.
///
/// Used for:
/// - Move lists in the host UI
/// - Replay ([`crate::replay::MoveLog`])
/// - Debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who sowed.
    pub player: Player,

    /// The pit the seeds were taken from.
    pub slot: usize,

    /// Turn number when the move was made. A turn ends when play passes
    /// to the other side, so extra turns share a turn number.
    pub turn: u32,

    /// Position of the move within its turn (0 for the first sow, 1 for the
    /// first extra turn, ...).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, slot: usize, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            slot,
            turn,
            sequence,
        }
    }

    /// Check if this move was played as an extra turn.
    #[must_use]
    pub fn is_extra_turn(&self) -> bool {
        self.sequence > 0
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} {} sows {}", self.turn, self.sequence, self.player, self.slot)
    }
}
