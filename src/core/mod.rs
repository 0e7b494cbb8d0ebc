//! Core engine types: players, board, configuration, openings, move
//! records, state.
//!
//! This module contains the plain data the rules operate on. Nothing here
//! knows how a move is played; see [`crate::rules`] for that.

pub mod player;
pub mod board;
pub mod config;
pub mod record;
pub mod state;

pub use player::{Player, SideMap};
pub use board::{Board, PITS_PER_SIDE, SLOT_COUNT, STORE_A, STORE_B};
pub use config::{BoardConfig, ConfigError, Opening, StartPosition, DEFAULT_SEEDS_PER_PIT};
pub use record::MoveRecord;
pub use state::{GameState, Phase};
