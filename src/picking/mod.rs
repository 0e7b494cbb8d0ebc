//! Mouse picking: from a cursor position to a slot index.
//!
//! The picker only answers "which slot is under the cursor". It never asks
//! whether that slot is a legal move; hosts pass the result to
//! [`BoardEngine::is_legal_move`](crate::BoardEngine::is_legal_move) or
//! straight to `apply_move`, which validates it anyway.
//!
//! ## Example
//!
//! ```
//! use glam::Vec3;
//! use rust_mancala::picking::{pick_slot, BoardLayout, Ray};
//!
//! let layout = BoardLayout::default();
//! let above_pit_2 = layout.slot_center(2).unwrap() + Vec3::Y * 5.0;
//! let ray = Ray::new(above_pit_2, Vec3::NEG_Y).unwrap();
//!
//! assert_eq!(pick_slot(&ray, &layout).map(|hit| hit.slot), Some(2));
//! ```

mod layout;
mod ray;

pub use layout::BoardLayout;
pub use ray::{Aabb, Ray};

/// A slot hit by a picking ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotHit {
    /// Slot index 0-13.
    pub slot: usize,
    /// Distance from the ray origin to the hit.
    pub distance: f32,
}

/// Find the nearest slot whose bounds the ray hits.
#[must_use]
pub fn pick_slot(ray: &Ray, layout: &BoardLayout) -> Option<SlotHit> {
    layout
        .all_bounds()
        .filter_map(|(slot, bounds)| {
            ray.intersect_aabb(&bounds)
                .map(|distance| SlotHit { slot, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
