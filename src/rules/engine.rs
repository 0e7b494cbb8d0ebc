//! Rules engine trait for rule-set implementations.
//!
//! A rule set defines:
//! - Which moves are legal
//! - How a move changes the state
//! - When the game ends and who won

use serde::{Deserialize, Serialize};

use super::outcome::{MoveError, MoveOutcome};
use crate::core::{Board, GameState, Player};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One store holds strictly more seeds.
    Winner(Player),
    /// Both stores are equal.
    Draw,
}

impl GameResult {
    /// Decide the result from the store counts.
    #[must_use]
    pub fn from_stores(board: &Board) -> Self {
        let a = board.store(Player::A);
        let b = board.store(Player::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::A),
            std::cmp::Ordering::Less => GameResult::Winner(Player::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_move`: Must not mutate; the first failing check wins
/// - `apply_move`: Must be deterministic and leave the state untouched
///   when the move is rejected
/// - `finish_if_terminal`: Idempotent
/// - `is_terminal`: Return None while the game continues
pub trait RulesEngine {
    /// Validate a move for the side to move.
    fn check_move(&self, state: &GameState, slot: usize) -> Result<(), MoveError>;

    /// Play a move for the side to move.
    fn apply_move(&self, state: &mut GameState, slot: usize) -> MoveOutcome;

    /// End the game if the position is terminal.
    ///
    /// Returns true if the game is (now) finished.
    fn finish_if_terminal(&self, state: &mut GameState) -> bool;

    /// Get the result of a finished game.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check a move without the rejection reason.
    fn is_legal_move(&self, state: &GameState, slot: usize) -> bool {
        self.check_move(state, slot).is_ok()
    }

    /// All legal moves for the side to move, ascending.
    fn legal_moves(&self, state: &GameState) -> Vec<usize> {
        state
            .current_player
            .pits()
            .filter(|&slot| self.is_legal_move(state, slot))
            .collect()
    }
}
