//! Player identification and per-side data storage.
//!
//! ## Player
//!
//! The two sides of the board. Player A owns pits 0-5 and the store at
//! index 6; Player B owns pits 7-12 and the store at index 13.
//!
//! ## SideMap
//!
//! Fixed per-player storage backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::board::{PITS_PER_SIDE, STORE_A, STORE_B};

/// One of the two sides of the board.
///
/// Player A always moves first after construction or reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Get the 0-based side index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Slot index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::A => STORE_A,
            Player::B => STORE_B,
        }
    }

    /// Slot indices of this player's sowing pits.
    ///
    /// ```
    /// use rust_mancala::core::Player;
    ///
    /// assert_eq!(Player::A.pits(), 0..6);
    /// assert_eq!(Player::B.pits(), 7..13);
    /// ```
    #[must_use]
    pub const fn pits(self) -> Range<usize> {
        let start = match self {
            Player::A => 0,
            Player::B => STORE_A + 1,
        };
        start..start + PITS_PER_SIDE
    }

    /// Check if `slot` is one of this player's sowing pits.
    #[must_use]
    pub fn owns_pit(self, slot: usize) -> bool {
        self.pits().contains(&slot)
    }

    /// Find the side a slot belongs to, pits and store alike.
    ///
    /// Returns `None` for indices outside the board.
    #[must_use]
    pub fn owner_of(slot: usize) -> Option<Self> {
        match slot {
            s if s <= STORE_A => Some(Player::A),
            s if s <= STORE_B => Some(Player::B),
            _ => None,
        }
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::A, Player::B].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_mancala::core::{Player, SideMap};
///
/// let mut captures: SideMap<u32> = SideMap::with_value(0);
/// captures[Player::B] += 6;
///
/// assert_eq!(captures[Player::A], 0);
/// assert_eq!(captures[Player::B], 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::A), factory(Player::B)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::all().zip(self.data.iter())
    }
}

impl<T> Index<Player> for SideMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for SideMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
        assert_eq!(Player::A.index(), 0);
        assert_eq!(Player::B.index(), 1);
        assert_eq!(format!("{}", Player::A), "Player A");
    }

    #[test]
    fn test_player_stores() {
        assert_eq!(Player::A.store(), 6);
        assert_eq!(Player::B.store(), 13);
    }

    #[test]
    fn test_owns_pit_excludes_stores() {
        assert!(Player::A.owns_pit(0));
        assert!(Player::A.owns_pit(5));
        assert!(!Player::A.owns_pit(6));
        assert!(!Player::A.owns_pit(7));

        assert!(Player::B.owns_pit(7));
        assert!(Player::B.owns_pit(12));
        assert!(!Player::B.owns_pit(13));
        assert!(!Player::B.owns_pit(5));
    }

    #[test]
    fn test_owner_of() {
        assert_eq!(Player::owner_of(0), Some(Player::A));
        assert_eq!(Player::owner_of(6), Some(Player::A));
        assert_eq!(Player::owner_of(7), Some(Player::B));
        assert_eq!(Player::owner_of(13), Some(Player::B));
        assert_eq!(Player::owner_of(14), None);
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|p| p.store());

        assert_eq!(map[Player::A], 6);
        assert_eq!(map[Player::B], 13);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);

        map[Player::A] = 10;
        map[Player::B] = 20;

        assert_eq!(map[Player::A], 10);
        assert_eq!(map[Player::B], 20);
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<i32> = SideMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::A, &0), (Player::B, &1)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u32> = SideMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
