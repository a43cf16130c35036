//! Moves and plays.

use std::fmt;

use crate::game::{Direction, Piece};

/// A piece moving one step in a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    direction: Direction,
}

impl Move {
    /// Create a move of the piece in the direction.
    #[must_use]
    pub const fn new(piece: Piece, direction: Direction) -> Self {
        Self { piece, direction }
    }

    /// Piece making the move.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// Direction of the move.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece {} {}", self.piece.id(), self.direction)
    }
}

/// One side's whole turn: at most one move per piece, applied simultaneously.
pub type Play = Vec<Move>;

/// Canonical form of a play for order-insensitive comparison.
///
/// Moves in a play are simultaneous, so two plays holding the same moves in
/// different orders describe the same turn.
#[must_use]
pub fn canonical(play: &[Move]) -> Play {
    let mut sorted = play.to_vec();
    sorted.sort_by_key(|m| (m.piece().id(), m.direction()));
    sorted
}
