//! Game state management.
//!
//! A [`State`] behaves as an immutable value. Every transition clones the
//! state first and only ever writes to the clone, so a state handed out to a
//! caller never changes underneath it.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use tracing::debug;

use crate::error::PlacementError;
use crate::game::index::{CellMap, PieceMap};
use crate::game::{Cell, Move, Piece, PieceId, Play, Player, PlayerSlot, Rules};

/// Complete game state.
#[derive(Clone)]
pub struct State {
    pub(super) rules: Rules,
    pub(super) current_player: PlayerSlot,
    pub(super) turn: u32,
    pub(super) players: [Arc<dyn Player>; 2],
    /// Piece id to piece; absent once destroyed.
    pub(super) pieces: PieceMap<Piece>,
    /// Piece id to the cell it's on.
    pub(super) locations: PieceMap<Cell>,
    /// Cell to the id of the piece on it.
    pub(super) occupancy: CellMap,
    pub(super) player1_remaining: u32,
    pub(super) player2_remaining: u32,
}

impl State {
    /// Create the opening state of a game between the two players.
    ///
    /// Player 1's pieces start on row 0 and player 2's on the last row, both
    /// on the odd columns, with piece `i` facing piece `piece_count + i`.
    /// Player 1 moves first.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(rules: Rules, player1: Arc<dyn Player>, player2: Arc<dyn Player>) -> Self {
        let count = rules.piece_count();
        let last_row = rules.board_size() - 1;
        let mut state = Self::empty(rules, PlayerSlot::Player1, player1, player2);

        for i in 0..count {
            // Bounded by the rules' maximum piece count.
            let column = i as i32 * 2 + 1;
            state.place(Piece::new(i + 1, rules.life(), rules.damage()), Cell::new(0, column));
            state.place(
                Piece::new(count + i + 1, rules.life(), rules.damage()),
                Cell::new(last_row, column),
            );
        }
        state.player1_remaining = count;
        state.player2_remaining = count;
        state
    }

    /// Rebuild a state from the pieces on each cell.
    ///
    /// Pieces that aren't listed are treated as destroyed.
    ///
    /// # Errors
    ///
    /// Returns a [`PlacementError`] if a piece id doesn't belong to the rules,
    /// a piece is listed twice or has no life, a cell is off the board, or two
    /// pieces share a cell.
    pub fn from_info(
        rules: Rules,
        current_player: PlayerSlot,
        player1: Arc<dyn Player>,
        player2: Arc<dyn Player>,
        pieces: impl IntoIterator<Item = (Cell, Piece)>,
    ) -> Result<Self, PlacementError> {
        let mut state = Self::empty(rules, current_player, player1, player2);

        for (cell, piece) in pieces {
            let id = piece.id();
            match state.player_for_id(id) {
                PlayerSlot::Player1 => state.player1_remaining += 1,
                PlayerSlot::Player2 => state.player2_remaining += 1,
                PlayerSlot::NoPlayer => return Err(PlacementError::UnknownPiece(id)),
            }
            if state.pieces.get(id).is_some() {
                return Err(PlacementError::DuplicatePiece(id));
            }
            if piece.is_destroyed() {
                return Err(PlacementError::Destroyed(id));
            }
            if !cell.on_board(rules.board_size()) {
                return Err(PlacementError::OffBoard(cell));
            }
            if state.occupancy.get(cell).is_some() {
                return Err(PlacementError::Occupied(cell));
            }
            state.place(piece, cell);
        }

        Ok(state)
    }

    fn empty(
        rules: Rules,
        current_player: PlayerSlot,
        player1: Arc<dyn Player>,
        player2: Arc<dyn Player>,
    ) -> Self {
        let slots = rules.piece_count() as usize * 2;
        Self {
            rules,
            current_player,
            turn: 0,
            players: [player1, player2],
            pieces: PieceMap::new(slots),
            locations: PieceMap::new(slots),
            occupancy: CellMap::new(rules.board_size()),
            player1_remaining: 0,
            player2_remaining: 0,
        }
    }

    fn place(&mut self, piece: Piece, cell: Cell) {
        self.pieces.set(piece.id(), piece);
        self.locations.set(piece.id(), cell);
        self.occupancy.set(cell, piece.id());
    }

    /// Ask the current player for a play and return the state after it.
    ///
    /// A finished game is returned unchanged without asking anyone.
    #[must_use]
    pub fn next_state(&self) -> State {
        if self.winner() != PlayerSlot::NoPlayer {
            return self.clone();
        }
        let play = match self.player(self.current_player) {
            Some(player) => player.play(self),
            None => Play::new(),
        };
        self.next_state_with_play(&play)
    }

    /// Return the state after the current player makes the play.
    ///
    /// The play isn't validated: moves of pieces that aren't the current
    /// player's, repeated pieces, moves off the board and moves onto friendly
    /// pieces are skipped. Check [`is_legal_play`](crate::game::is_legal_play)
    /// first when strict legality matters. A finished game is returned
    /// unchanged.
    #[must_use]
    pub fn next_state_with_play(&self, play: &[Move]) -> State {
        if self.winner() != PlayerSlot::NoPlayer {
            return self.clone();
        }

        let mut next = self.clone();
        let hits = next.apply_play(play);
        let destroyed = next.remove_destroyed(&hits);
        next.current_player = next.current_player.opponent();
        next.turn = next.turn.saturating_add(1);

        debug!(
            turn = next.turn,
            mover = %self.current_player,
            moves = play.len(),
            hits = hits.len(),
            destroyed,
            winner = %next.winner(),
            "applied play"
        );
        next
    }

    /// Rules the game is played with.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Side to move in this state.
    #[must_use]
    pub const fn current_player(&self) -> PlayerSlot {
        self.current_player
    }

    /// Side that moves after this state.
    #[must_use]
    pub const fn next_player(&self) -> PlayerSlot {
        self.current_player.opponent()
    }

    /// Number of plays applied since the game was created.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Strategy playing as player 1.
    #[must_use]
    pub fn player1(&self) -> &Arc<dyn Player> {
        &self.players[0]
    }

    /// Strategy playing as player 2.
    #[must_use]
    pub fn player2(&self) -> &Arc<dyn Player> {
        &self.players[1]
    }

    /// Strategy playing the side, if it's a real side.
    #[must_use]
    pub fn player(&self, slot: PlayerSlot) -> Option<&Arc<dyn Player>> {
        match slot {
            PlayerSlot::Player1 => Some(self.player1()),
            PlayerSlot::Player2 => Some(self.player2()),
            PlayerSlot::NoPlayer => None,
        }
    }

    /// Cell the piece is on, or `None` if it isn't on the board.
    #[must_use]
    pub fn cell_for_piece(&self, piece: Piece) -> Option<Cell> {
        self.locations.get(piece.id())
    }

    /// Piece on the cell, or `None` if the cell is empty or off the board.
    #[must_use]
    pub fn piece_for_cell(&self, cell: Cell) -> Option<Piece> {
        self.occupancy.get(cell).and_then(|id| self.pieces.get(id))
    }

    /// Side owning the piece, derived from its id.
    #[must_use]
    pub fn player_for_piece(&self, piece: Piece) -> PlayerSlot {
        self.player_for_id(piece.id())
    }

    pub(crate) fn player_for_id(&self, id: PieceId) -> PlayerSlot {
        let count = self.rules.piece_count();
        if id == 0 {
            PlayerSlot::NoPlayer
        } else if id <= count {
            PlayerSlot::Player1
        } else if id <= count * 2 {
            PlayerSlot::Player2
        } else {
            PlayerSlot::NoPlayer
        }
    }

    /// Ids that can belong to the side.
    pub(crate) fn ids_of(&self, slot: PlayerSlot) -> RangeInclusive<PieceId> {
        let count = self.rules.piece_count();
        match slot {
            PlayerSlot::Player1 => 1..=count,
            PlayerSlot::Player2 => count + 1..=count * 2,
            #[allow(clippy::reversed_empty_ranges)]
            PlayerSlot::NoPlayer => 1..=0,
        }
    }

    /// Live pieces of the side, in id order.
    #[must_use]
    pub fn pieces_of(&self, slot: PlayerSlot) -> Vec<Piece> {
        self.ids_of(slot)
            .filter_map(|id| self.pieces.get(id))
            .filter(|piece| !piece.is_destroyed())
            .collect()
    }

    /// Live pieces of player 1.
    #[must_use]
    pub fn player1_pieces(&self) -> Vec<Piece> {
        self.pieces_of(PlayerSlot::Player1)
    }

    /// Live pieces of player 2.
    #[must_use]
    pub fn player2_pieces(&self) -> Vec<Piece> {
        self.pieces_of(PlayerSlot::Player2)
    }

    /// Live pieces of the side to move.
    #[must_use]
    pub fn current_player_pieces(&self) -> Vec<Piece> {
        self.pieces_of(self.current_player)
    }

    /// Live pieces of the side moving next.
    #[must_use]
    pub fn next_player_pieces(&self) -> Vec<Piece> {
        self.pieces_of(self.next_player())
    }

    /// All live pieces, player 1's first.
    #[must_use]
    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = self.player1_pieces();
        pieces.extend(self.player2_pieces());
        pieces
    }

    /// Number of live pieces the side has.
    #[must_use]
    pub const fn remaining(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::Player1 => self.player1_remaining,
            PlayerSlot::Player2 => self.player2_remaining,
            PlayerSlot::NoPlayer => 0,
        }
    }

    /// Winner of the game, or `NoPlayer` while it's undecided.
    #[must_use]
    pub const fn winner(&self) -> PlayerSlot {
        if self.player1_remaining == 0 {
            PlayerSlot::Player2
        } else if self.player2_remaining == 0 {
            PlayerSlot::Player1
        } else {
            PlayerSlot::NoPlayer
        }
    }
}

/// States are equal when the boards, pieces, turn and side to move match.
/// The strategies aren't compared.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
            && self.current_player == other.current_player
            && self.turn == other.turn
            && self.player1_remaining == other.player1_remaining
            && self.player2_remaining == other.player2_remaining
            && self.pieces == other.pieces
            && self.locations == other.locations
            && self.occupancy == other.occupancy
    }
}

impl Eq for State {}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("rules", &self.rules)
            .field("current_player", &self.current_player)
            .field("turn", &self.turn)
            .field("player1", &self.players[0].name())
            .field("player2", &self.players[1].name())
            .field("player1_remaining", &self.player1_remaining)
            .field("player2_remaining", &self.player2_remaining)
            .field("board", &self.occupancy.iter().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
