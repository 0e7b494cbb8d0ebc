//! World-space placement of the fourteen slots.
//!
//! ```text
//!            z = +1   [ 7][ 8][ 9][10][11][12]
//!  [ 6]                                          [13]
//!  x = -4.5  z = -1   [ 5][ 4][ 3][ 2][ 1][ 0]   x = +4.5
//! ```
//!
//! Seen from Player A's side (negative z), A's pits run right to left and
//! B's run left to right, so sowing travels counter-clockwise and pit `i`
//! lines up with pit `12 - i`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ray::Aabb;
use crate::core::{Player, SLOT_COUNT, STORE_A, STORE_B};

/// Board geometry used for picking and for placing pit meshes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Distance between neighbouring pit centres along x.
    pub pit_spacing: f32,
    /// Distance of each pit row from the board's long axis.
    pub row_offset: f32,
    /// Distance of each store from the board centre along x.
    pub store_offset: f32,
    /// Half size of a pit's bounding box.
    pub pit_half_extents: Vec3,
    /// Half size of a store's bounding box.
    pub store_half_extents: Vec3,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            pit_spacing: 1.2,
            row_offset: 1.0,
            store_offset: 4.5,
            pit_half_extents: Vec3::new(0.4, 0.15, 0.4),
            store_half_extents: Vec3::new(0.5, 0.25, 0.75),
        }
    }
}

impl BoardLayout {
    /// Centre of a slot, or `None` for an off-board index.
    #[must_use]
    pub fn slot_center(&self, slot: usize) -> Option<Vec3> {
        // Six pits span five gaps, centred on x = 0.
        let row_start = self.pit_spacing * 2.5;

        let center = match slot {
            STORE_A => Vec3::new(-self.store_offset, 0.0, 0.0),
            STORE_B => Vec3::new(self.store_offset, 0.0, 0.0),
            s if Player::A.owns_pit(s) => {
                let i = s as f32;
                Vec3::new(row_start - i * self.pit_spacing, 0.0, -self.row_offset)
            }
            s if Player::B.owns_pit(s) => {
                let i = (s - Player::B.pits().start) as f32;
                Vec3::new(-row_start + i * self.pit_spacing, 0.0, self.row_offset)
            }
            _ => return None,
        };
        Some(center)
    }

    /// Bounding box of a slot, or `None` for an off-board index.
    #[must_use]
    pub fn slot_bounds(&self, slot: usize) -> Option<Aabb> {
        let center = self.slot_center(slot)?;
        let half = if slot == STORE_A || slot == STORE_B {
            self.store_half_extents
        } else {
            self.pit_half_extents
        };
        Some(Aabb::from_center(center, half))
    }

    /// Bounding boxes for every slot, in slot order.
    pub fn all_bounds(&self) -> impl Iterator<Item = (usize, Aabb)> + '_ {
        (0..SLOT_COUNT).filter_map(move |slot| self.slot_bounds(slot).map(|b| (slot, b)))
    }
}
