//! Engine facade for interactive hosts.
//!
//! - `BoardEngine`: owns configuration, rules and state; the one object a
//!   host keeps for the session
//! - `BoardSnapshot`: the pull model a renderer reads once per frame

mod board_engine;
mod snapshot;

pub use board_engine::BoardEngine;
pub use snapshot::BoardSnapshot;
