//! The fourteen-slot seed-count model.
//!
//! ```text
//!      [13] [12][11][10][ 9][ 8][ 7]      <- Player B
//!           [ 0][ 1][ 2][ 3][ 4][ 5] [6]  <- Player A
//! ```
//!
//! Seeds travel counter-clockwise: 0 -> 5, A's store, 7 -> 12, B's store,
//! then back to 0. Pit `i` on one side faces pit `12 - i` on the other.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::player::Player;

/// Total number of slots (12 pits + 2 stores).
pub const SLOT_COUNT: usize = 14;

/// Number of sowing pits on each side.
pub const PITS_PER_SIDE: usize = 6;

/// Slot index of Player A's store.
pub const STORE_A: usize = 6;

/// Slot index of Player B's store.
pub const STORE_B: usize = 13;

/// Seed counts for every slot on the board.
///
/// `Board` is plain `Copy` data. It knows the geometry of the board (which
/// slot faces which, where the stores are) but nothing about turns; move
/// legality and sowing live in [`crate::rules`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [u32; SLOT_COUNT],
}

impl Board {
    /// Create the standard opening position: every pit holds
    /// `seeds_per_pit`, both stores are empty.
    #[must_use]
    pub fn new(seeds_per_pit: u32) -> Self {
        let mut slots = [seeds_per_pit; SLOT_COUNT];
        slots[STORE_A] = 0;
        slots[STORE_B] = 0;
        Self { slots }
    }

    /// Create a board from raw slot counts.
    #[must_use]
    pub const fn from_slots(slots: [u32; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// All fourteen counts in slot order.
    #[must_use]
    pub fn slots(&self) -> &[u32; SLOT_COUNT] {
        &self.slots
    }

    /// Seed count in a slot, or `None` if the index is off the board.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<u32> {
        self.slots.get(slot).copied()
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.slots[player.store()]
    }

    /// Seeds across a player's six pits (store excluded).
    ///
    /// Saturates at `u32::MAX` on an unvalidated board.
    #[must_use]
    pub fn pit_total(&self, player: Player) -> u32 {
        self.slots[player.pits()]
            .iter()
            .fold(0, |total: u32, &seeds| total.saturating_add(seeds))
    }

    /// Check if every pit on a player's side is empty.
    #[must_use]
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.slots[player.pits()].iter().all(|&s| s == 0)
    }

    /// Sum of all fourteen slots.
    ///
    /// Saturates at `u32::MAX` on an unvalidated board.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.slots
            .iter()
            .fold(0, |total: u32, &seeds| total.saturating_add(seeds))
    }

    /// The pit directly across the board from `slot`.
    ///
    /// Returns `None` for stores and off-board indices.
    ///
    /// ```
    /// use rust_mancala::core::Board;
    ///
    /// assert_eq!(Board::opposite(0), Some(12));
    /// assert_eq!(Board::opposite(11), Some(1));
    /// assert_eq!(Board::opposite(6), None);
    /// ```
    #[must_use]
    pub fn opposite(slot: usize) -> Option<usize> {
        match slot {
            STORE_A | STORE_B => None,
            s if s < STORE_B => Some(STORE_B - 1 - s),
            _ => None,
        }
    }

    /// Next slot in sowing order.
    #[must_use]
    pub const fn next_slot(slot: usize) -> usize {
        (slot + 1) % SLOT_COUNT
    }

    /// Empty a slot, returning what it held.
    pub(crate) fn take(&mut self, slot: usize) -> u32 {
        std::mem::take(&mut self.slots[slot])
    }

    /// Add seeds to a slot.
    pub(crate) fn add(&mut self, slot: usize, seeds: u32) {
        self.slots[slot] += seeds;
    }

    /// Move every seed on a player's pits into that player's store.
    ///
    /// Returns the number of seeds moved.
    pub(crate) fn sweep_side(&mut self, player: Player) -> u32 {
        let swept: u32 = player.pits().map(|slot| self.take(slot)).sum();
        self.add(player.store(), swept);
        swept
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_SEEDS_PER_PIT)
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.slots[slot]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:>2}]", self.slots[STORE_B])?;
        for slot in Player::B.pits().rev() {
            write!(f, " {:>2}", self.slots[slot])?;
        }
        writeln!(f)?;
        write!(f, "    ")?;
        for slot in Player::A.pits() {
            write!(f, " {:>2}", self.slots[slot])?;
        }
        write!(f, " [{:>2}]", self.slots[STORE_A])
    }
}
