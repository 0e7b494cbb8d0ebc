//! Kalah rules: six pits a side, capture on an empty own pit.
//!
//! A move lifts every seed from one of the mover's pits and sows them one
//! at a time counter-clockwise, skipping the opponent's store. Then:
//!
//! 1. Last seed in the mover's store: the mover plays again.
//! 2. Last seed in an empty pit of the mover's, opposite pit non-empty: both
//!    pits are emptied into the mover's store.
//! 3. Either side's pits all empty: each side sweeps its own pits into its
//!    store and the game ends.
//! 4. Otherwise play passes to the opponent.

use tracing::{debug, trace};

use super::engine::{GameResult, RulesEngine};
use super::outcome::{Capture, MoveError, MoveOutcome, SowPath};
use crate::core::{Board, GameState, Phase, Player, SLOT_COUNT};

/// The standard Kalah rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kalah;

impl Kalah {
    /// Create the rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Lift the seeds in `from` and sow them for `player`.
///
/// Returns the slots that received a seed, in order. The opponent's store is
/// passed over without consuming a seed. `from` may be passed and refilled
/// when it held enough seeds to lap the board.
///
/// `from` must already have passed [`RulesEngine::check_move`].
pub(crate) fn sow(board: &mut Board, from: usize, player: Player) -> SowPath {
    let mut seeds = board.take(from);
    let skip = player.opponent().store();
    let mut path = SowPath::new();
    let mut slot = from;

    while seeds > 0 {
        slot = Board::next_slot(slot);
        if slot == skip {
            continue;
        }
        board.add(slot, 1);
        path.push(slot);
        seeds -= 1;
        trace!(slot, remaining = seeds, "seed sown");
    }

    path
}

/// Capture through the landing pit if the last seed made it hold exactly one.
///
/// A count of one after the final placement means the pit was empty just
/// before it, which covers multi-lap sows: any pit the sow already passed
/// holds at least one seed from that earlier lap, so only an originally
/// empty pit (or the emptied source pit) can end at one.
fn try_capture(board: &mut Board, player: Player, landing: usize) -> Option<Capture> {
    if !player.owns_pit(landing) || board[landing] != 1 {
        return None;
    }

    let opposite = Board::opposite(landing)?;
    if board[opposite] == 0 {
        return None;
    }

    let seeds = board.take(opposite) + board.take(landing);
    board.add(player.store(), seeds);

    Some(Capture {
        slot: landing,
        opposite,
        seeds,
    })
}

impl RulesEngine for Kalah {
    fn check_move(&self, state: &GameState, slot: usize) -> Result<(), MoveError> {
        let player = state.current_player;

        if state.is_finished() {
            return Err(MoveError::GameAlreadyFinished);
        }
        if slot >= SLOT_COUNT {
            return Err(MoveError::IllegalSlot(slot));
        }
        if !player.owns_pit(slot) {
            return Err(MoveError::NotYourPit { slot, player });
        }
        if state.board[slot] == 0 {
            return Err(MoveError::EmptyPit(slot));
        }

        Ok(())
    }

    fn apply_move(&self, state: &mut GameState, slot: usize) -> MoveOutcome {
        let player = state.current_player;

        if let Err(error) = self.check_move(state, slot) {
            debug!(slot, player = %player, %error, "move rejected");
            return MoveOutcome::rejected(player, slot, error);
        }

        let before = state.board;
        let path = sow(&mut state.board, slot, player);
        let landing = path.last().copied();

        let extra_turn = landing == Some(player.store());
        let capture = match landing {
            Some(landing) if !extra_turn => {
                debug_assert!(
                    state.board[landing] != 1 || before[landing] == 0 || landing == slot,
                    "landing pit {landing} ends at one seed but was not empty before the sow"
                );
                try_capture(&mut state.board, player, landing)
            }
            _ => None,
        };

        let game_over = self.finish_if_terminal(state);

        state.record_move(slot);
        if !game_over {
            if extra_turn {
                state.grant_extra_turn();
            } else {
                state.pass_turn();
            }
        }

        debug!(
            slot,
            player = %player,
            landing = ?landing,
            extra_turn,
            captured = capture.map_or(0, |c| c.seeds),
            game_over,
            "move applied"
        );

        MoveOutcome {
            player,
            slot,
            rejection: None,
            extra_turn,
            capture,
            path,
            game_over,
        }
    }

    fn finish_if_terminal(&self, state: &mut GameState) -> bool {
        if state.is_finished() {
            return true;
        }
        if !Player::all().any(|p| state.board.side_is_empty(p)) {
            return false;
        }

        for player in Player::all() {
            state.board.sweep_side(player);
        }
        state.phase = Phase::Finished;

        debug!(
            store_a = state.board.store(Player::A),
            store_b = state.board.store(Player::B),
            result = %GameResult::from_stores(&state.board),
            "game finished"
        );
        true
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state
            .is_finished()
            .then(|| GameResult::from_stores(&state.board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;

    fn position(slots: [u32; SLOT_COUNT], to_move: Player) -> GameState {
        GameState::from_board(Board::from_slots(slots), to_move)
    }

    #[test]
    fn test_sow_simple() {
        let mut board = Board::new(4);
        let path = sow(&mut board, 2, Player::A);

        assert_eq!(path.as_slice(), &[3, 4, 5, 6]);
        assert_eq!(board[2], 0);
        assert_eq!(board[6], 1);
    }

    #[test]
    fn test_sow_skips_opponent_store() {
        // A sows 10 from pit 5: 6..=12 then skips 13, wraps to 0..=2.
        let mut board = Board::from_slots([0, 0, 0, 0, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0]);
        let path = sow(&mut board, 5, Player::A);

        assert_eq!(path.as_slice(), &[6, 7, 8, 9, 10, 11, 12, 0, 1, 2]);
        assert_eq!(board[13], 0);
        assert_eq!(board.total_seeds(), 10);
    }

    #[test]
    fn test_sow_b_skips_a_store() {
        let mut board = Board::from_slots([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0]);
        let path = sow(&mut board, 12, Player::B);

        assert_eq!(path.as_slice(), &[13, 0, 1]);

        let mut board = Board::from_slots([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 0]);
        let path = sow(&mut board, 12, Player::B);
        assert_eq!(path.as_slice(), &[13, 0, 1, 2, 3, 4, 5, 7, 8]);
        assert_eq!(board[6], 0);
    }

    #[test]
    fn test_sow_full_lap_refills_source() {
        let mut board = Board::from_slots([0, 0, 13, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let path = sow(&mut board, 2, Player::A);

        assert_eq!(path.len(), 13);
        assert_eq!(path.last(), Some(&2));
        assert_eq!(board[2], 1);
        assert_eq!(board[13], 0);
    }

    #[test]
    fn test_check_move_order() {
        let rules = Kalah::new();
        let mut state = GameState::new(&BoardConfig::default());

        assert_eq!(rules.check_move(&state, 14), Err(MoveError::IllegalSlot(14)));
        assert_eq!(
            rules.check_move(&state, 6),
            Err(MoveError::NotYourPit { slot: 6, player: Player::A })
        );
        assert_eq!(
            rules.check_move(&state, 9),
            Err(MoveError::NotYourPit { slot: 9, player: Player::A })
        );
        assert_eq!(rules.check_move(&state, 0), Ok(()));

        state.phase = Phase::Finished;
        assert_eq!(rules.check_move(&state, 0), Err(MoveError::GameAlreadyFinished));
        assert_eq!(rules.check_move(&state, 99), Err(MoveError::GameAlreadyFinished));
    }

    #[test]
    fn test_empty_pit_rejected() {
        let rules = Kalah::new();
        let state = position([0, 3, 0, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4, 0], Player::A);

        assert_eq!(rules.check_move(&state, 0), Err(MoveError::EmptyPit(0)));
        assert_eq!(rules.legal_moves(&state), vec![1]);
    }

    #[test]
    fn test_extra_turn_keeps_player() {
        let rules = Kalah::new();
        let mut state = GameState::new(&BoardConfig::default());

        let outcome = rules.apply_move(&mut state, 2);

        assert!(outcome.extra_turn);
        assert_eq!(state.current_player, Player::A);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.history().back().map(|r| r.sequence), Some(0));
    }

    #[test]
    fn test_normal_move_passes_turn() {
        let rules = Kalah::new();
        let mut state = GameState::new(&BoardConfig::default());

        let outcome = rules.apply_move(&mut state, 0);

        assert!(outcome.accepted());
        assert!(!outcome.extra_turn);
        assert_eq!(outcome.path.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(state.current_player, Player::B);
        assert_eq!(state.turn_number, 2);
    }

    #[test]
    fn test_capture() {
        let rules = Kalah::new();
        // A sows 2 from pit 3 into 4 and the empty pit 5, facing pit 7.
        let mut state = position([1, 0, 0, 2, 1, 0, 0, 3, 6, 0, 0, 0, 0, 0], Player::A);

        let outcome = rules.apply_move(&mut state, 3);

        assert_eq!(outcome.landing_slot(), Some(5));
        assert_eq!(
            outcome.capture,
            Some(Capture { slot: 5, opposite: 7, seeds: 4 })
        );
        assert_eq!(state.board[5], 0);
        assert_eq!(state.board[7], 0);
        assert_eq!(state.board.store(Player::A), 4);
        assert_eq!(state.current_player, Player::B);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let rules = Kalah::new();
        let mut state = position([1, 0, 0, 2, 1, 0, 0, 0, 6, 0, 0, 0, 0, 0], Player::A);

        let outcome = rules.apply_move(&mut state, 3);

        assert!(!outcome.captured());
        assert_eq!(state.board[5], 1);
        assert_eq!(state.board.store(Player::A), 0);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        let rules = Kalah::new();
        // A's last seed lands in B's empty pit 8; nothing is captured.
        let mut state = position([1, 0, 0, 0, 0, 3, 0, 1, 0, 2, 2, 2, 2, 0], Player::A);

        let outcome = rules.apply_move(&mut state, 5);

        assert_eq!(outcome.landing_slot(), Some(8));
        assert!(!outcome.captured());
        assert_eq!(state.board[8], 1);
    }

    #[test]
    fn test_capture_after_full_lap() {
        let rules = Kalah::new();
        // 13 seeds from pit 2 lap the board and land back in the emptied pit.
        let mut state = position([1, 0, 13, 0, 0, 0, 0, 1, 1, 1, 1, 5, 1, 0], Player::A);

        let outcome = rules.apply_move(&mut state, 2);

        assert_eq!(outcome.landing_slot(), Some(2));
        // Pit 10 faces pit 2 and held 1 + 1 from the lap.
        assert_eq!(
            outcome.capture,
            Some(Capture { slot: 2, opposite: 10, seeds: 3 })
        );
        assert_eq!(state.board[2], 0);
        assert_eq!(state.board[10], 0);
        assert_eq!(state.board.total_seeds(), 24);
    }

    #[test]
    fn test_finish_sweeps_both_sides() {
        let rules = Kalah::new();
        // A's only seed goes into the store: side A empty, game over.
        let mut state = position([0, 0, 0, 0, 0, 1, 10, 2, 0, 3, 0, 0, 1, 5], Player::A);

        let outcome = rules.apply_move(&mut state, 5);

        assert!(outcome.extra_turn);
        assert!(outcome.game_over);
        assert!(state.is_finished());
        assert_eq!(state.board.store(Player::A), 11);
        assert_eq!(state.board.store(Player::B), 11);
        assert_eq!(rules.is_terminal(&state), Some(GameResult::Draw));
        assert!(rules.legal_moves(&state).is_empty());
    }

    #[test]
    fn test_finished_player_not_switched() {
        let rules = Kalah::new();
        let mut state = position([0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 1, 27], Player::B);

        let outcome = rules.apply_move(&mut state, 12);

        assert!(outcome.game_over);
        assert_eq!(state.current_player, Player::B);
        assert_eq!(rules.is_terminal(&state), Some(GameResult::Winner(Player::B)));
    }

    #[test]
    fn test_finish_if_terminal_idempotent() {
        let rules = Kalah::new();
        let mut state = position([0, 0, 0, 0, 0, 0, 20, 1, 0, 0, 0, 0, 0, 27], Player::A);

        assert!(rules.finish_if_terminal(&mut state));
        let settled = state.board;
        assert!(rules.finish_if_terminal(&mut state));

        assert_eq!(state.board, settled);
        assert_eq!(state.board.store(Player::B), 28);
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let rules = Kalah::new();
        let mut state = GameState::new(&BoardConfig::default());
        let before = state.clone();

        let outcome = rules.apply_move(&mut state, 7);

        assert!(!outcome.accepted());
        assert_eq!(state, before);
    }
}
