//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Player;
use crate::rules::MoveOutcome;

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Player A (moves first, pits 0-5, store 6).
    #[staticmethod]
    #[allow(non_snake_case)]
    fn A() -> Self {
        Self(Player::A)
    }

    /// Player B (pits 7-12, store 13).
    #[staticmethod]
    #[allow(non_snake_case)]
    fn B() -> Self {
        Self(Player::B)
    }

    /// Get the side index (A = 0, B = 1).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Slot index of this player's store.
    #[getter]
    fn store(&self) -> usize {
        self.0.store()
    }

    /// Slot indices of this player's pits.
    #[getter]
    fn pits(&self) -> Vec<usize> {
        self.0.pits().collect()
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Player.{:?}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for MoveOutcome.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    /// Whether the move was played.
    #[getter]
    fn accepted(&self) -> bool {
        self.0.accepted()
    }

    /// Why the move was refused, if it was.
    #[getter]
    fn rejection(&self) -> Option<String> {
        self.0.rejection.map(|e| e.to_string())
    }

    #[getter]
    fn player(&self) -> PyPlayer {
        PyPlayer(self.0.player)
    }

    #[getter]
    fn slot(&self) -> usize {
        self.0.slot
    }

    #[getter]
    fn extra_turn(&self) -> bool {
        self.0.extra_turn
    }

    #[getter]
    fn captured(&self) -> bool {
        self.0.captured()
    }

    #[getter]
    fn captured_seeds(&self) -> u32 {
        self.0.captured_seeds()
    }

    /// Slots that received a seed, in order (for animation).
    #[getter]
    fn path(&self) -> Vec<usize> {
        self.0.path.to_vec()
    }

    #[getter]
    fn landing_slot(&self) -> Option<usize> {
        self.0.landing_slot()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    fn __repr__(&self) -> String {
        match self.0.rejection {
            Some(error) => format!("MoveOutcome(rejected: {error})"),
            None => format!(
                "MoveOutcome(slot={}, extra_turn={}, captured={}, game_over={})",
                self.0.slot,
                self.0.extra_turn,
                self.0.captured_seeds(),
                self.0.game_over
            ),
        }
    }
}
