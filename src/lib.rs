//! # rust-mancala
//!
//! A deterministic Kalah (mancala) rules engine for game hosts.
//!
//! ## Design Principles
//!
//! 1. **Rules Behind a Trait**: Sowing, captures, extra turns and
//!    termination live in a `RulesEngine` implementation. The engine facade
//!    owns the state and delegates every rule decision.
//!
//! 2. **Never Panic on Input**: Illegal moves are reported in a
//!    `MoveOutcome` and leave the game untouched.
//!
//! 3. **Presentation Agnostic**: The engine exposes slot counts, legal moves
//!    and per-move outcomes. Hosts draw, animate and theme however they like.
//!
//! ## Board
//!
//! Fourteen slots: pits 0-5 and store 6 belong to Player A, pits 7-12 and
//! store 13 belong to Player B. Pit `i` faces pit `12 - i`.
//!
//! ## Modules
//!
//! - `core`: Players, board, configuration, move records, state
//! - `rules`: RulesEngine trait and the Kalah rule set
//! - `engine`: The `BoardEngine` facade and render snapshots
//! - `replay`: Binary move logs and deterministic replay
//! - `picking`: Cursor rays and slot hit-testing
//! - `python`: PyO3 bindings (behind the `python` feature)
//!
//! ## Example
//!
//! ```
//! use rust_mancala::{BoardEngine, GameResult, Player};
//!
//! let mut engine = BoardEngine::default();
//! while !engine.is_game_over() {
//!     let slot = engine.legal_moves()[0];
//!     engine.apply_move(slot);
//! }
//!
//! let scores = engine.scores();
//! match engine.winner() {
//!     Some(GameResult::Winner(p)) => assert!(scores[p] > scores[p.opponent()]),
//!     Some(GameResult::Draw) => assert_eq!(scores[Player::A], scores[Player::B]),
//!     None => unreachable!(),
//! }
//! ```

pub mod core;
pub mod rules;
pub mod engine;
pub mod replay;
pub mod picking;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Player, SideMap,
    Board, PITS_PER_SIDE, SLOT_COUNT, STORE_A, STORE_B,
    BoardConfig, ConfigError, Opening, StartPosition, DEFAULT_SEEDS_PER_PIT,
    MoveRecord, GameState, Phase,
};

pub use crate::rules::{
    RulesEngine, GameResult, Kalah,
    MoveOutcome, MoveError, Capture, SowPath,
};

pub use crate::engine::{BoardEngine, BoardSnapshot};

pub use crate::replay::{MoveLog, ReplayError};

pub use crate::picking::{pick_slot, Aabb, BoardLayout, Ray, SlotHit};
