//! Move logs for persistence and replay.
//!
//! The engine defines no wire format of its own; hosts that want to save a
//! game keep a [`MoveLog`] and rebuild the engine from it with
//! [`MoveLog::replay`]. Sowing is deterministic, so the slots alone
//! reproduce the game exactly.

mod log;

pub use log::{MoveLog, ReplayError};
