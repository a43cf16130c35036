//! Move and play legality.
//!
//! Legality is always judged against the state before the turn: moves of a
//! play are simultaneous, so an earlier move never makes room for a later
//! one.

use crate::game::index::CellMap;
use crate::game::{Direction, Move, PlayerSlot, State};

/// Check if the move is legal in the state.
///
/// A move is legal iff the piece is a live piece of the current player, the
/// destination is on the board, and the destination isn't held by another of
/// the current player's pieces. Moving onto an enemy piece is an attack and
/// is legal.
#[must_use]
pub fn is_legal_move(state: &State, m: &Move) -> bool {
    let mover = state.current_player();
    let id = m.piece().id();
    if mover == PlayerSlot::NoPlayer || state.player_for_id(id) != mover {
        return false;
    }
    let Some(from) = state.locations.get(id) else {
        return false;
    };
    let to = from.step(m.direction());
    if !to.on_board(state.rules().board_size()) {
        return false;
    }
    state
        .occupancy
        .get(to)
        .is_none_or(|occupant| state.player_for_id(occupant) != mover)
}

/// Every legal move of the current player, grouped by piece in id order.
#[must_use]
pub fn legal_moves(state: &State) -> Vec<Move> {
    state
        .current_player_pieces()
        .into_iter()
        .flat_map(|piece| Direction::ALL.map(|direction| Move::new(piece, direction)))
        .filter(|m| is_legal_move(state, m))
        .collect()
}

/// Check if the play is legal in the state.
///
/// A play is legal iff every move is legal on its own, no piece moves more
/// than once, and no two moves share a destination.
#[must_use]
pub fn is_legal_play(state: &State, play: &[Move]) -> bool {
    let mut used = vec![false; state.rules().piece_count() as usize * 2];
    let mut claimed = CellMap::new(state.rules().board_size());

    for m in play {
        if !is_legal_move(state, m) {
            return false;
        }
        let id = m.piece().id();
        // Legal moves only carry ids in 1..=2 * piece_count.
        let slot = &mut used[(id - 1) as usize];
        if *slot {
            return false;
        }
        *slot = true;

        let Some(to) = state.locations.get(id).map(|from| from.step(m.direction())) else {
            return false;
        };
        if claimed.get(to).is_some() {
            return false;
        }
        claimed.set(to, id);
    }

    true
}
