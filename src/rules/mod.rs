//! Rules engine trait and the Kalah rule set.
//!
//! Rule sets implement `RulesEngine` to define:
//! - Legal moves for a game state
//! - How a move modifies the state
//! - When the game ends and who won
//!
//! The engine facade calls into `RulesEngine` but never interprets
//! sowing, captures or extra turns directly.

pub mod engine;
pub mod kalah;
pub mod outcome;

pub use engine::{GameResult, RulesEngine};
pub use kalah::Kalah;
pub use outcome::{Capture, MoveError, MoveOutcome, SowPath};
