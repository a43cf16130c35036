//! State invariants - consistency checks that detect bugs.
//!
//! These should NEVER trigger on a state built through the public API. If
//! they do, a transition has corrupted the indices.

use std::fmt;

use crate::game::{Cell, PlayerSlot, State};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all state invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &State) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut violation = |message: String| violations.push(InvariantViolation { message });
    let size = state.rules.board_size();

    for slot in [PlayerSlot::Player1, PlayerSlot::Player2] {
        let mut alive = 0;
        for id in state.ids_of(slot) {
            let piece = state.pieces.get(id);
            let cell = state.locations.get(id);
            match (piece, cell) {
                (Some(piece), Some(cell)) => {
                    if piece.id() != id {
                        violation(format!("slot {id} holds piece {}", piece.id()));
                    }
                    if piece.is_destroyed() {
                        violation(format!("piece {id} has life {} but is on {cell}", piece.life()));
                    }
                    if !cell.on_board(size) {
                        violation(format!("piece {id} is off the board at {cell}"));
                    }
                    if state.occupancy.get(cell) != Some(id) {
                        violation(format!(
                            "piece {id} is at {cell} but the cell holds {:?}",
                            state.occupancy.get(cell)
                        ));
                    }
                    alive += 1;
                }
                (None, None) => {}
                (Some(_), None) => violation(format!("live piece {id} has no cell")),
                (None, Some(cell)) => violation(format!("destroyed piece {id} is still at {cell}")),
            }
        }
        if state.remaining(slot) != alive {
            violation(format!(
                "{slot} has {alive} live pieces but counts {}",
                state.remaining(slot)
            ));
        }
    }

    for (cell, id) in state.occupancy.iter() {
        if state.locations.get(id) != Some(cell) {
            violation(format!(
                "{cell} holds piece {id} which is at {}",
                state.locations.get(id).unwrap_or(Cell::NONE)
            ));
        }
    }

    violations
}
