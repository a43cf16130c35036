//! Output formatting utilities for CLI.

use landgrab::{Cell, Piece, PlayerSlot, State};
use serde::Serialize;

/// How a game run by the CLI went.
#[derive(Debug)]
pub(super) struct GameSummary {
    /// Random seed used.
    pub(super) seed: u64,
    /// Strategy names, player 1 first.
    pub(super) strategies: [String; 2],
    /// Final state.
    pub(super) state: State,
    /// Turns where the strategy overran the turn timeout.
    pub(super) slow_turns: u32,
    /// Turns where the strategy returned an illegal play.
    pub(super) illegal_plays: u32,
}

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Winning side (1 or 2, null if the game was called).
    pub(super) winner: Option<u8>,
    /// Total turns played.
    pub(super) turns_played: u32,
    /// Per-player results.
    pub(super) players: Vec<JsonPlayerResult>,
    /// Turns over the time limit.
    pub(super) slow_turns: u32,
    /// Illegal plays submitted.
    pub(super) illegal_plays: u32,
}

/// JSON-serializable player result.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerResult {
    /// Side (1 or 2).
    pub(super) id: u8,
    /// Strategy name.
    pub(super) strategy: String,
    /// Pieces still on the board.
    pub(super) remaining: u32,
    /// Surviving pieces.
    pub(super) pieces: Vec<JsonPiece>,
}

/// JSON-serializable piece.
#[derive(Debug, Serialize)]
pub(super) struct JsonPiece {
    /// Piece id.
    pub(super) id: u32,
    /// Life left.
    pub(super) life: i32,
    /// Damage dealt per attack.
    pub(super) damage: i32,
    /// Row and column.
    pub(super) cell: (i32, i32),
}

const fn side_number(slot: PlayerSlot) -> Option<u8> {
    match slot {
        PlayerSlot::Player1 => Some(1),
        PlayerSlot::Player2 => Some(2),
        PlayerSlot::NoPlayer => None,
    }
}

const SIDES: [PlayerSlot; 2] = [PlayerSlot::Player1, PlayerSlot::Player2];

impl JsonGameResult {
    /// Create from a game summary.
    pub(super) fn from_summary(summary: &GameSummary) -> Self {
        let state = &summary.state;
        Self {
            seed: summary.seed,
            winner: side_number(state.winner()),
            turns_played: state.turn(),
            players: SIDES
                .iter()
                .zip(&summary.strategies)
                .map(|(&slot, strategy)| JsonPlayerResult {
                    id: side_number(slot).unwrap_or_default(),
                    strategy: strategy.clone(),
                    remaining: state.remaining(slot),
                    pieces: state
                        .pieces_of(slot)
                        .into_iter()
                        .filter_map(|piece| {
                            let cell = state.cell_for_piece(piece)?;
                            Some(JsonPiece {
                                id: piece.id(),
                                life: piece.life(),
                                damage: piece.damage(),
                                cell: (cell.row(), cell.column()),
                            })
                        })
                        .collect(),
                })
                .collect(),
            slow_turns: summary.slow_turns,
            illegal_plays: summary.illegal_plays,
        }
    }
}

/// Draw the board, one character per cell: `.` for empty, `A`..`Z` for
/// player 1 pieces and `a`..`z` for player 2 pieces (cycling past 26).
pub(super) fn render_board(state: &State) -> String {
    let size = state.rules().board_size();
    let mut output = String::new();
    for row in 0..size {
        for column in 0..size {
            let glyph = state
                .piece_for_cell(Cell::new(row, column))
                .map_or('.', |piece| piece_glyph(state, piece));
            output.push(glyph);
        }
        output.push('\n');
    }
    output
}

fn piece_glyph(state: &State, piece: Piece) -> char {
    let count = state.rules().piece_count();
    let (base, index) = match state.player_for_piece(piece) {
        PlayerSlot::Player1 => (b'A', piece.id() - 1),
        PlayerSlot::Player2 => (b'a', piece.id() - count - 1),
        PlayerSlot::NoPlayer => return '?',
    };
    // index % 26 always fits in a u8
    char::from(base + u8::try_from(index % 26).unwrap_or(0))
}

/// Format a game summary as human-readable text.
pub(super) fn format_text(summary: &GameSummary) -> String {
    let state = &summary.state;
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {})\n", summary.seed));
    match side_number(state.winner()) {
        Some(winner) => {
            let name = &summary.strategies[usize::from(winner) - 1];
            output.push_str(&format!("  Winner: Player {winner} ({name})\n"));
        }
        None => output.push_str("  Winner: none (turn limit reached)\n"),
    }
    output.push_str(&format!("  Turns: {}\n", state.turn()));
    if summary.slow_turns > 0 {
        output.push_str(&format!("  Slow turns: {}\n", summary.slow_turns));
    }
    if summary.illegal_plays > 0 {
        output.push_str(&format!("  Illegal plays: {}\n", summary.illegal_plays));
    }
    output.push('\n');

    for (&slot, name) in SIDES.iter().zip(&summary.strategies) {
        output.push_str(&format!(
            "  Player {}: {} pieces left ({name})\n",
            side_number(slot).unwrap_or_default(),
            state.remaining(slot)
        ));
        for piece in state.pieces_of(slot) {
            if let Some(cell) = state.cell_for_piece(piece) {
                output.push_str(&format!(
                    "    piece {} at {cell}: life {}, damage {}\n",
                    piece.id(),
                    piece.life(),
                    piece.damage()
                ));
            }
        }
    }

    output.push('\n');
    output.push_str(&render_board(state));
    output
}
