//! Per-frame board snapshot.
//!
//! Renderers pull one `BoardSnapshot` per frame instead of subscribing to
//! engine events. The snapshot is plain data: cheap to copy, serializable,
//! and detached from the engine that produced it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Phase, Player, SideMap, PITS_PER_SIDE, SLOT_COUNT};
use crate::rules::GameResult;

/// Observable game state at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Seed counts for all fourteen slots.
    pub slots: [u32; SLOT_COUNT],

    /// Side to move.
    pub current_player: Player,

    /// Current phase.
    pub phase: Phase,

    /// Store counts per side.
    pub stores: SideMap<u32>,

    /// Pits the side to move may select.
    pub legal_moves: SmallVec<[usize; PITS_PER_SIDE]>,

    /// Final result once the game is finished.
    pub result: Option<GameResult>,

    /// Moves played so far.
    pub move_count: usize,
}

impl BoardSnapshot {
    /// Seeds in a slot (0 for off-board indices).
    #[must_use]
    pub fn seeds(&self, slot: usize) -> u32 {
        self.slots.get(slot).copied().unwrap_or(0)
    }

    /// Check if a slot should be highlighted as selectable.
    #[must_use]
    pub fn is_selectable(&self, slot: usize) -> bool {
        self.legal_moves.contains(&slot)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
