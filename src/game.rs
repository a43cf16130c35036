//! Game layer for Landgrab.
//!
//! Implements the rules engine:
//! - Rules, cells, pieces, directions, moves and plays
//! - Array-backed indices behind the immutable [`State`]
//! - Move and play legality
//! - Enumeration of every legal play (sequential, parallel and streaming)
//! - Transitions with combat resolution

mod cell;
mod combat;
mod direction;
mod index;
mod invariants;
mod legal;
mod moves;
mod piece;
mod pipeline;
mod player;
mod plays;
mod rules;
mod state;

pub use cell::Cell;
pub use direction::Direction;
pub use invariants::{InvariantViolation, check_invariants};
pub use legal::{is_legal_move, is_legal_play, legal_moves};
pub use moves::{Move, Play, canonical};
pub use piece::{NO_PIECE_ID, Piece, PieceId};
pub use pipeline::{PipelineConfig, PlayStream, legal_plays_stream};
pub use player::{Player, PlayerSlot};
pub use plays::{candidate_count, legal_plays, legal_plays_par};
pub use rules::Rules;
pub use state::State;
