//! Move outcomes and rejection reasons.
//!
//! Illegal moves are not faults: the rules report them through
//! [`MoveOutcome::rejection`] and leave the state untouched.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;

/// Slots that received a seed, in sowing order.
///
/// Sixteen inline entries cover every sow from a standard board without
/// touching the heap.
pub type SowPath = SmallVec<[usize; 16]>;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// Index outside 0-13.
    #[display("slot {_0} is not on the board")]
    IllegalSlot(#[error(not(source))] usize),

    /// The slot is a store or belongs to the other side.
    #[display("slot {slot} is not a pit of {player}")]
    NotYourPit { slot: usize, player: Player },

    /// The pit holds no seeds.
    #[display("pit {_0} is empty")]
    EmptyPit(#[error(not(source))] usize),

    /// No moves are accepted once the game is over.
    #[display("the game is already finished")]
    GameAlreadyFinished,
}

/// A capture made by the last seed of a sow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// Mover's pit where the last seed landed.
    pub slot: usize,
    /// Opponent pit that was emptied.
    pub opposite: usize,
    /// Seeds moved to the mover's store, including the landing seed.
    pub seeds: u32,
}

/// Everything a host needs to know about one `apply_move` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Side that attempted the move.
    pub player: Player,

    /// Requested slot.
    pub slot: usize,

    /// Set when the move was refused; the state is then unchanged.
    pub rejection: Option<MoveError>,

    /// The mover plays again.
    pub extra_turn: bool,

    /// Capture made by the last seed, if any.
    pub capture: Option<Capture>,

    /// Slots that received a seed, in order. Never contains the
    /// opponent's store.
    pub path: SowPath,

    /// This move ended the game.
    pub game_over: bool,
}

impl MoveOutcome {
    /// Outcome for a refused move.
    #[must_use]
    pub fn rejected(player: Player, slot: usize, error: MoveError) -> Self {
        Self {
            player,
            slot,
            rejection: Some(error),
            extra_turn: false,
            capture: None,
            path: SowPath::new(),
            game_over: false,
        }
    }

    /// Check if the move was played.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// Check if the rules refused the move.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// Last slot that received a seed.
    #[must_use]
    pub fn landing_slot(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Check if the move captured.
    #[must_use]
    pub fn captured(&self) -> bool {
        self.capture.is_some()
    }

    /// Seeds moved to the store by a capture (0 without one).
    #[must_use]
    pub fn captured_seeds(&self) -> u32 {
        self.capture.map_or(0, |c| c.seeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_outcome() {
        let outcome = MoveOutcome::rejected(Player::A, 3, MoveError::EmptyPit(3));

        assert!(!outcome.accepted());
        assert!(outcome.is_rejected());
        assert!(!outcome.extra_turn);
        assert!(!outcome.captured());
        assert_eq!(outcome.captured_seeds(), 0);
        assert_eq!(outcome.landing_slot(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoveError::IllegalSlot(14).to_string(),
            "slot 14 is not on the board"
        );
        assert_eq!(
            MoveError::NotYourPit { slot: 6, player: Player::A }.to_string(),
            "slot 6 is not a pit of Player A"
        );
        assert_eq!(MoveError::EmptyPit(2).to_string(), "pit 2 is empty");
        assert_eq!(
            MoveError::GameAlreadyFinished.to_string(),
            "the game is already finished"
        );
    }

    #[test]
    fn test_move_error_has_no_source() {
        use std::error::Error;

        assert!(MoveError::IllegalSlot(14).source().is_none());
        assert!(MoveError::EmptyPit(2).source().is_none());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = MoveOutcome {
            player: Player::B,
            slot: 8,
            rejection: None,
            extra_turn: false,
            capture: Some(Capture { slot: 12, opposite: 0, seeds: 5 }),
            path: SowPath::from_slice(&[9, 10, 11, 12]),
            game_over: false,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: MoveOutcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, deserialized);
        assert_eq!(deserialized.landing_slot(), Some(12));
        assert_eq!(deserialized.captured_seeds(), 5);
    }
}
