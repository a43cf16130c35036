//! Pieces and their identifiers.

/// Identifies a piece within a game.
///
/// Ids are dense and 1-based: `1..=piece_count` belong to player 1 and
/// `piece_count + 1..=2 * piece_count` to player 2.
pub type PieceId = u32;

/// Id of no piece.
pub const NO_PIECE_ID: PieceId = 0;

/// A piece with its current life and damage.
///
/// A piece with no life left is destroyed and is never on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    id: PieceId,
    life: i32,
    damage: i32,
}

impl Piece {
    /// The absence of a piece.
    pub const NONE: Piece = Piece {
        id: NO_PIECE_ID,
        life: 0,
        damage: 0,
    };

    /// Create a piece with the id, life and damage.
    #[must_use]
    pub const fn new(id: PieceId, life: i32, damage: i32) -> Self {
        Self { id, life, damage }
    }

    /// Id of the piece.
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Life remaining.
    #[must_use]
    pub const fn life(&self) -> i32 {
        self.life
    }

    /// Damage dealt to an enemy piece on attack.
    #[must_use]
    pub const fn damage(&self) -> i32 {
        self.damage
    }

    /// Check if the piece has been destroyed or is the sentinel.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.life <= 0
    }

    pub(crate) fn take_damage(&mut self, damage: i32) {
        self.life = self.life.saturating_sub(damage);
    }

    pub(crate) fn grow(&mut self, life: i32, damage: i32) {
        self.life = self.life.saturating_add(life);
        self.damage = self.damage.saturating_add(damage);
    }
}
