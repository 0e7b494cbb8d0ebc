//! The engine facade hosts talk to.

use im::Vector;
use tracing::{debug, info};

use super::snapshot::BoardSnapshot;
use crate::core::{
    Board, BoardConfig, ConfigError, GameState, MoveRecord, Opening, Phase, Player, SideMap,
    StartPosition, SLOT_COUNT,
};
use crate::rules::{GameResult, Kalah, MoveError, MoveOutcome, RulesEngine};

/// A game in progress: opening, rules and state in one owner.
///
/// Generic over the rules engine type, defaulting to [`Kalah`]. All calls
/// are synchronous and complete within the caller's frame; the host is
/// expected to serialize access.
///
/// ## Example
///
/// ```
/// use rust_mancala::{BoardEngine, Player};
///
/// let mut engine = BoardEngine::default();
/// let outcome = engine.apply_move(2);
///
/// assert!(outcome.accepted());
/// assert!(outcome.extra_turn);
/// assert_eq!(engine.current_player(), Player::A);
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine<R: RulesEngine = Kalah> {
    opening: Opening,
    rules: R,
    state: GameState,
}

impl BoardEngine<Kalah> {
    /// Create a Kalah game from a configuration.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_rules(config, Kalah::new())
    }

    /// Create a Kalah game with `seeds_per_pit` seeds in every pit.
    pub fn with_seeds_per_pit(seeds_per_pit: u32) -> Result<Self, ConfigError> {
        Self::new(BoardConfig::new(seeds_per_pit))
    }

    /// Start a Kalah game from an arbitrary position.
    ///
    /// See [`from_position_with_rules`](Self::from_position_with_rules).
    pub fn from_position(slots: [u32; SLOT_COUNT], to_move: Player) -> Result<Self, ConfigError> {
        Self::from_position_with_rules(slots, to_move, Kalah::new())
    }
}

impl Default for BoardEngine<Kalah> {
    fn default() -> Self {
        let opening = Opening::default();
        Self {
            state: GameState::from_opening(&opening),
            opening,
            rules: Kalah::new(),
        }
    }
}

impl<R: RulesEngine> BoardEngine<R> {
    /// Create a game with custom rules.
    pub fn with_rules(config: BoardConfig, rules: R) -> Result<Self, ConfigError> {
        Self::with_opening(config, rules)
    }

    /// Start from an arbitrary position with `to_move` on turn.
    ///
    /// Fails with [`ConfigError::PositionOverflow`] when the seeds add up
    /// past `u32::MAX`. A position where one side's pits are already empty
    /// is settled immediately: both sides are swept and the game is
    /// finished. [`reset`](Self::reset) returns to this position.
    pub fn from_position_with_rules(
        slots: [u32; SLOT_COUNT],
        to_move: Player,
        rules: R,
    ) -> Result<Self, ConfigError> {
        Self::with_opening(StartPosition::new(slots, to_move), rules)
    }

    /// Create a game from any validated opening.
    pub fn with_opening(opening: impl Into<Opening>, rules: R) -> Result<Self, ConfigError> {
        let opening = opening.into();
        opening.validate()?;

        let mut state = GameState::from_opening(&opening);
        rules.finish_if_terminal(&mut state);
        debug!(opening = ?opening, "board engine created");

        Ok(Self {
            opening,
            rules,
            state,
        })
    }

    /// Return to the opening this game was created from.
    ///
    /// Clears the history.
    pub fn reset(&mut self) {
        self.state = GameState::from_opening(&self.opening);
        self.rules.finish_if_terminal(&mut self.state);
        info!(total_seeds = self.total_seeds(), "board reset");
    }

    // === Moves ===

    /// Check if the side to move may sow from `slot`.
    #[must_use]
    pub fn is_legal_move(&self, slot: usize) -> bool {
        self.rules.is_legal_move(&self.state, slot)
    }

    /// Validate a move, returning why it is refused.
    pub fn check_move(&self, slot: usize) -> Result<(), MoveError> {
        self.rules.check_move(&self.state, slot)
    }

    /// Play a move for the side to move.
    ///
    /// A refused move leaves the game untouched and reports the reason in
    /// [`MoveOutcome::rejection`].
    pub fn apply_move(&mut self, slot: usize) -> MoveOutcome {
        self.rules.apply_move(&mut self.state, slot)
    }

    /// Legal moves for the side to move, ascending. Empty once finished.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        self.rules.legal_moves(&self.state)
    }

    // === Queries ===

    /// The result, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    /// Side to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Seeds in a slot, or `None` for an off-board index.
    #[must_use]
    pub fn seed_count(&self, slot: usize) -> Option<u32> {
        self.state.board.get(slot)
    }

    /// All fourteen slot counts.
    #[must_use]
    pub fn slots(&self) -> &[u32; SLOT_COUNT] {
        self.state.board.slots()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.state.board.store(player)
    }

    /// Both store counts.
    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        SideMap::new(|p| self.store(p))
    }

    /// Seeds on the board (constant for the lifetime of a game).
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.state.board.total_seeds()
    }

    /// Slots chosen so far, in order.
    #[must_use]
    pub fn move_history(&self) -> Vec<usize> {
        self.state.move_slots().collect()
    }

    /// Full move records.
    #[must_use]
    pub fn records(&self) -> &Vector<MoveRecord> {
        self.state.history()
    }

    /// Turn number (advances when play passes to the other side).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    /// Opening used by [`reset`](Self::reset).
    #[must_use]
    pub fn opening(&self) -> &Opening {
        &self.opening
    }

    /// Board configuration, for games started from the standard opening.
    #[must_use]
    pub fn config(&self) -> Option<&BoardConfig> {
        self.opening.config()
    }

    /// The rules.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The raw game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Capture everything a renderer needs for one frame.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            slots: *self.slots(),
            current_player: self.current_player(),
            phase: self.phase(),
            stores: self.scores(),
            legal_moves: self.legal_moves().into_iter().collect(),
            result: self.winner(),
            move_count: self.state.move_count(),
        }
    }
}
