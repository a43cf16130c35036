// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Landgrab: a deterministic, simultaneous-turn grid combat game engine.
//!
//! Two players each own a row of pieces on a square board. Every turn the
//! side to move commits a play, one optional step per piece, and the moves
//! resolve into relocations and attacks. A piece whose life runs out is
//! destroyed and its attackers grow. The game ends when a side has no pieces
//! left.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Driver (CLI, external players)    │
//! ├─────────────────────────────────────┤
//! │   Strategies (random, greedy, ...)  │
//! ├─────────────────────────────────────┤
//! │   Game engine (state, legality,     │
//! │   enumeration, combat)              │
//! └─────────────────────────────────────┘
//! ```
//!
//! The engine performs no I/O. States are immutable values: transitions
//! return a new [`State`] and leave the old one untouched.

pub mod error;
pub mod game;
pub mod strategy;

pub use error::{PipelineError, PlacementError, RulesError};

// Re-export key game types at crate root for convenience
pub use game::{Cell, Direction, Move, Piece, PieceId, Play, Player, PlayerSlot, Rules, State};
