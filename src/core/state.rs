//! Game state: board, turn and history.
//!
//! ## Phase
//!
//! `InProgress` while both sides still have seeds in their pits, `Finished`
//! once either side runs dry and the remaining seeds have been swept.
//!
//! ## GameState
//!
//! Everything the rules need to decide and apply a move:
//! - Seed counts for all fourteen slots
//! - Side to move and phase
//! - Turn counters and the append-only move history

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::{BoardConfig, Opening};
use super::player::Player;
use super::record::MoveRecord;

/// Coarse lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    InProgress,
    Finished,
}

/// Complete game state.
///
/// Uses an `im` persistent vector for history so that cloning a state (undo
/// stacks, search copies) is O(1) regardless of game length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed counts.
    pub board: Board,

    /// Side to move.
    pub current_player: Player,

    /// Whether moves are still accepted.
    pub phase: Phase,

    /// Turn number (starts at 1, advances on every hand-over).
    pub turn_number: u32,

    /// Moves already made within the current turn.
    turn_sequence: u32,

    /// Accepted moves in order.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the opening state for a configuration.
    ///
    /// ## Defaults
    ///
    /// - `current_player`: Player A
    /// - `phase`: InProgress
    /// - `turn_number`: 1
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self::from_board(Board::new(config.seeds_per_pit), Player::A)
    }

    /// Create the starting state of an opening.
    ///
    /// Like [`from_board`](Self::from_board), a set position is not checked
    /// for termination here.
    #[must_use]
    pub fn from_opening(opening: &Opening) -> Self {
        match opening {
            Opening::Standard(config) => Self::new(config),
            Opening::Position(position) => {
                Self::from_board(Board::from_slots(position.slots), position.to_move)
            }
        }
    }

    /// Create a state from an arbitrary board with `to_move` on turn.
    ///
    /// The phase is left `InProgress`; callers that accept arbitrary
    /// positions must run the rules' termination check themselves.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            current_player: to_move,
            phase: Phase::InProgress,
            turn_number: 1,
            turn_sequence: 0,
            history: Vector::new(),
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    // === Turn Advancement ===

    /// Hand the move to the other side.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
        self.turn_sequence = 0;
    }

    /// Keep the move with the current side for an extra sow.
    pub fn grant_extra_turn(&mut self) {
        self.turn_sequence += 1;
    }

    // === Move History ===

    /// Record a move by the current player.
    ///
    /// Must be called before the turn is passed so the record carries the
    /// mover's turn number.
    pub fn record_move(&mut self, slot: usize) {
        let record = MoveRecord::new(
            self.current_player,
            slot,
            self.turn_number,
            self.turn_sequence,
        );
        self.history.push_back(record);
    }

    /// All recorded moves.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Slot indices of all recorded moves, in order.
    pub fn move_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.history.iter().map(|record| record.slot)
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&BoardConfig::new(4));

        assert_eq!(state.current_player, Player::A);
        assert_eq!(state.phase, Phase::InProgress);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.board.total_seeds(), 48);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_pass_turn() {
        let mut state = GameState::default();

        state.pass_turn();
        assert_eq!(state.current_player, Player::B);
        assert_eq!(state.turn_number, 2);

        state.pass_turn();
        assert_eq!(state.current_player, Player::A);
        assert_eq!(state.turn_number, 3);
    }

    #[test]
    fn test_record_move_tracks_turn_and_sequence() {
        let mut state = GameState::default();

        state.record_move(2);
        state.grant_extra_turn();
        state.record_move(5);
        state.pass_turn();
        state.record_move(8);

        let records: Vec<_> = state.history().iter().copied().collect();
        assert_eq!(records[0], MoveRecord::new(Player::A, 2, 1, 0));
        assert_eq!(records[1], MoveRecord::new(Player::A, 5, 1, 1));
        assert_eq!(records[2], MoveRecord::new(Player::B, 8, 2, 0));
        assert_eq!(state.move_slots().collect::<Vec<_>>(), vec![2, 5, 8]);
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = GameState::default();
        state.record_move(0);

        let mut copy = state.clone();
        copy.record_move(3);

        assert_eq!(state.move_count(), 1);
        assert_eq!(copy.move_count(), 2);
    }

    #[test]
    fn test_from_opening() {
        use crate::core::StartPosition;

        let standard = GameState::from_opening(&Opening::Standard(BoardConfig::new(2)));
        assert_eq!(standard, GameState::new(&BoardConfig::new(2)));

        let slots = [1, 0, 0, 0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 5];
        let state = GameState::from_opening(&StartPosition::new(slots, Player::B).into());
        assert_eq!(state.board.slots(), &slots);
        assert_eq!(state.current_player, Player::B);
        assert_eq!(state.phase, Phase::InProgress);
    }

    #[test]
    fn test_from_board() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 1, 20, 4, 4, 4, 4, 4, 4, 3]);
        let state = GameState::from_board(board, Player::B);

        assert_eq!(state.current_player, Player::B);
        assert!(!state.is_finished());
        assert_eq!(state.board, board);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::default();
        state.record_move(2);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
