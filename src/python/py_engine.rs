//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::engine::BoardEngine;
use crate::rules::GameResult;

use super::py_core::{PyMoveOutcome, PyPlayer};

/// Python wrapper for BoardEngine.
///
/// A Kalah game with the standard rules.
#[pyclass(name = "BoardEngine")]
pub struct PyBoardEngine {
    engine: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seeds_per_pit: Seeds in each pit at setup (at least 1)
    #[new]
    #[pyo3(signature = (seeds_per_pit = 4))]
    fn new(seeds_per_pit: u32) -> PyResult<Self> {
        let engine = BoardEngine::with_seeds_per_pit(seeds_per_pit)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Get legal moves for the side to move.
    fn legal_moves(&self) -> Vec<usize> {
        self.engine.legal_moves()
    }

    /// Check if the side to move may sow from a slot.
    fn is_legal_move(&self, slot: usize) -> bool {
        self.engine.is_legal_move(slot)
    }

    /// Play a move. Illegal moves are reported, not raised.
    fn apply_move(&mut self, slot: usize) -> PyMoveOutcome {
        PyMoveOutcome(self.engine.apply_move(slot))
    }

    /// Restore the opening position.
    fn reset(&mut self) {
        self.engine.reset();
    }

    /// All fourteen slot counts.
    #[getter]
    fn slots(&self) -> Vec<u32> {
        self.engine.slots().to_vec()
    }

    /// Seeds in one slot, None for an off-board index.
    fn seed_count(&self, slot: usize) -> Option<u32> {
        self.engine.seed_count(slot)
    }

    /// Get the side to move.
    #[getter]
    fn current_player(&self) -> PyPlayer {
        PyPlayer(self.engine.current_player())
    }

    /// Seeds in a player's store.
    fn store(&self, player: &PyPlayer) -> u32 {
        self.engine.store(player.0)
    }

    /// Check if the game is over.
    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// The winner once the game is over; None while playing or on a draw.
    fn winner(&self) -> Option<PyPlayer> {
        match self.engine.winner() {
            Some(GameResult::Winner(p)) => Some(PyPlayer(p)),
            _ => None,
        }
    }

    /// Check if the game ended level.
    fn is_draw(&self) -> bool {
        matches!(self.engine.winner(), Some(GameResult::Draw))
    }

    /// Slots chosen so far, in order.
    fn move_history(&self) -> Vec<usize> {
        self.engine.move_history()
    }

    /// Copy the game for what-if exploration.
    fn copy(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match self.engine.winner() {
            Some(result) => result.to_string(),
            None => "ongoing".to_string(),
        };
        format!(
            "BoardEngine(to_move={}, moves={}, status={})",
            self.engine.current_player(),
            self.engine.move_history().len(),
            status
        )
    }
}
