//! Board configuration and game openings.
//!
//! The only knob that affects rule logic is the number of seeds placed in
//! each pit at the start of a game. Hosts build a `BoardConfig` once and
//! hand it to the engine; `reset()` returns to the same configuration.
//!
//! Games that start from a set position (puzzles, restored sessions) carry
//! a [`StartPosition`] instead. [`Opening`] covers both.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

use super::board::{PITS_PER_SIDE, SLOT_COUNT};
use super::player::Player;

/// Seeds per pit in the standard game.
pub const DEFAULT_SEEDS_PER_PIT: u32 = 4;

/// Errors raised when validating a [`BoardConfig`] or a [`StartPosition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// A game with no seeds is over before it starts.
    #[display("seeds_per_pit must be at least 1")]
    NoSeeds,

    /// The total seed count would not fit in a slot counter.
    #[display("seeds_per_pit {_0} overflows the board's seed counter")]
    TooManySeeds(#[error(not(source))] u32),

    /// The position's seeds add up past what a slot counter can hold.
    #[display("position holds more seeds than the board's seed counter can track")]
    PositionOverflow,
}

/// Complete board configuration.
///
/// ```
/// use rust_mancala::core::BoardConfig;
///
/// let config = BoardConfig::default().with_seeds_per_pit(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_seeds(), 36);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Seeds placed in each of the twelve pits at setup.
    pub seeds_per_pit: u32,
}

impl BoardConfig {
    /// Create a configuration with the given seeds per pit.
    #[must_use]
    pub const fn new(seeds_per_pit: u32) -> Self {
        Self { seeds_per_pit }
    }

    /// Set the seeds per pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds_per_pit: u32) -> Self {
        self.seeds_per_pit = seeds_per_pit;
        self
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::NoSeeds);
        }
        self.seeds_per_pit
            .checked_mul(2 * PITS_PER_SIDE as u32)
            .ok_or(ConfigError::TooManySeeds(self.seeds_per_pit))?;
        Ok(())
    }

    /// Seeds on the board for the lifetime of a game.
    ///
    /// Only meaningful for a configuration that passed [`validate`](Self::validate).
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.seeds_per_pit * 2 * PITS_PER_SIDE as u32
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEEDS_PER_PIT)
    }
}

/// An arbitrary position to start a game from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartPosition {
    /// Seed counts for all fourteen slots.
    pub slots: [u32; SLOT_COUNT],
    /// Side on turn.
    pub to_move: Player,
}

impl StartPosition {
    #[must_use]
    pub const fn new(slots: [u32; SLOT_COUNT], to_move: Player) -> Self {
        Self { slots, to_move }
    }

    /// Check that the total seed count fits in a slot counter.
    ///
    /// Every slot can then absorb any sow or sweep without overflowing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.total_seeds()
            .map(|_| ())
            .ok_or(ConfigError::PositionOverflow)
    }

    /// Sum of all slots, or `None` if it overflows.
    #[must_use]
    pub fn total_seeds(&self) -> Option<u32> {
        self.slots
            .iter()
            .try_fold(0u32, |total, &seeds| total.checked_add(seeds))
    }
}

/// Where a game starts and where `reset()` returns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
pub enum Opening {
    /// The standard opening for a configuration; Player A moves first.
    Standard(BoardConfig),
    /// A set position.
    Position(StartPosition),
}

impl Opening {
    /// Validate whichever opening this is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Opening::Standard(config) => config.validate(),
            Opening::Position(position) => position.validate(),
        }
    }

    /// The configuration, for a standard opening.
    #[must_use]
    pub fn config(&self) -> Option<&BoardConfig> {
        match self {
            Opening::Standard(config) => Some(config),
            Opening::Position(_) => None,
        }
    }
}

impl Default for Opening {
    fn default() -> Self {
        Opening::Standard(BoardConfig::default())
    }
}
