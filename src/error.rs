//! Error types for game construction and play enumeration.

use std::fmt;
use std::io;

use crate::game::{Cell, PieceId};

/// Reasons a set of rules is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// A game needs at least one piece per side.
    NoPieces,
    /// Starting life must be positive.
    NonPositiveLife(i32),
    /// Starting damage must be positive.
    NonPositiveDamage(i32),
    /// Life gained per kill can't be negative.
    NegativeLifeGrowth(i32),
    /// Damage gained per kill can't be negative.
    NegativeDamageGrowth(i32),
    /// The board would not fit in a signed cell coordinate.
    TooManyPieces(u32),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::NoPieces => write!(f, "piece count must be at least 1"),
            RulesError::NonPositiveLife(life) => write!(f, "life must be positive, got {life}"),
            RulesError::NonPositiveDamage(damage) => {
                write!(f, "damage must be positive, got {damage}")
            }
            RulesError::NegativeLifeGrowth(growth) => {
                write!(f, "life growth can't be negative, got {growth}")
            }
            RulesError::NegativeDamageGrowth(growth) => {
                write!(f, "damage growth can't be negative, got {growth}")
            }
            RulesError::TooManyPieces(count) => write!(f, "piece count {count} is too large"),
        }
    }
}

impl std::error::Error for RulesError {}

/// Reasons a persisted piece placement can't be turned into a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The piece id is the sentinel or outside the rules' id range.
    UnknownPiece(PieceId),
    /// The same piece id was placed twice.
    DuplicatePiece(PieceId),
    /// The cell lies outside the board.
    OffBoard(Cell),
    /// Two pieces were placed on the same cell.
    Occupied(Cell),
    /// Destroyed pieces can't be placed.
    Destroyed(PieceId),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::UnknownPiece(id) => write!(f, "piece id {id} is not valid for the rules"),
            PlacementError::DuplicatePiece(id) => write!(f, "piece {id} placed more than once"),
            PlacementError::OffBoard(cell) => write!(f, "cell {cell} is off the board"),
            PlacementError::Occupied(cell) => write!(f, "cell {cell} holds more than one piece"),
            PlacementError::Destroyed(id) => write!(f, "piece {id} has no life left"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Failure to start the streaming play enumeration.
#[derive(Debug)]
pub struct PipelineError {
    source: io::Error,
}

impl PipelineError {
    pub(crate) fn spawn(source: io::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to spawn enumeration thread: {}", self.source)
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
