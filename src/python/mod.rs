//! Python bindings for the rust-mancala engine.
//!
//! This module provides PyO3 bindings so Python hosts (notebooks, scripted
//! UIs, bots) can drive the same rules engine as native hosts.
//!
//! # Quick Start
//!
//! ```python
//! import rust_mancala as mancala
//!
//! game = mancala.BoardEngine(seeds_per_pit=4)
//! outcome = game.apply_move(2)
//! assert outcome.extra_turn
//!
//! while not game.is_game_over():
//!     game.apply_move(game.legal_moves()[0])
//! print(game.winner(), game.slots)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rust-mancala: a deterministic Kalah rules engine.
#[pymodule]
fn rust_mancala(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyMoveOutcome>()?;
    m.add_class::<PyBoardEngine>()?;

    Ok(())
}
