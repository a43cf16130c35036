//! Per-game constants.

use std::time::Duration;

use crate::error::RulesError;

/// Largest piece count allowed. Every state owns a `board_size` squared
/// cell index, so this keeps one state at about 16 MiB.
const MAX_PIECE_COUNT: u32 = 1 << 10;

/// The variable parts of a game: how many pieces each side has, how strong
/// they start, and how much they grow for each kill.
///
/// The board is always square with side `2 * piece_count + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    turn_timeout: Duration,
    piece_count: u32,
    life: i32,
    damage: i32,
    life_growth: i32,
    damage_growth: i32,
}

impl Rules {
    /// Create rules from their parts.
    ///
    /// # Errors
    ///
    /// Returns a [`RulesError`] if there are no pieces, if starting life or
    /// damage isn't positive, or if a growth value is negative.
    pub const fn new(
        turn_timeout: Duration,
        piece_count: u32,
        life: i32,
        damage: i32,
        life_growth: i32,
        damage_growth: i32,
    ) -> Result<Self, RulesError> {
        if piece_count == 0 {
            return Err(RulesError::NoPieces);
        }
        if piece_count > MAX_PIECE_COUNT {
            return Err(RulesError::TooManyPieces(piece_count));
        }
        if life <= 0 {
            return Err(RulesError::NonPositiveLife(life));
        }
        if damage <= 0 {
            return Err(RulesError::NonPositiveDamage(damage));
        }
        if life_growth < 0 {
            return Err(RulesError::NegativeLifeGrowth(life_growth));
        }
        if damage_growth < 0 {
            return Err(RulesError::NegativeDamageGrowth(damage_growth));
        }
        Ok(Self {
            turn_timeout,
            piece_count,
            life,
            damage,
            life_growth,
            damage_growth,
        })
    }

    /// The stock rules: five pieces a side with three life and one damage,
    /// growing by one of each per kill, and a 30 second turn timer.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            turn_timeout: Duration::from_secs(30),
            piece_count: 5,
            life: 3,
            damage: 1,
            life_growth: 1,
            damage_growth: 1,
        }
    }

    /// Time an external driver should allow a player to choose a play.
    ///
    /// The engine never enforces it.
    #[must_use]
    pub const fn turn_timeout(&self) -> Duration {
        self.turn_timeout
    }

    /// Pieces per side.
    #[must_use]
    pub const fn piece_count(&self) -> u32 {
        self.piece_count
    }

    /// Side length of the square board.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn board_size(&self) -> i32 {
        // Bounded by MAX_PIECE_COUNT.
        self.piece_count as i32 * 2 + 1
    }

    /// Starting life of every piece.
    #[must_use]
    pub const fn life(&self) -> i32 {
        self.life
    }

    /// Starting damage of every piece.
    #[must_use]
    pub const fn damage(&self) -> i32 {
        self.damage
    }

    /// Life a piece gains for each enemy it destroys.
    #[must_use]
    pub const fn life_growth(&self) -> i32 {
        self.life_growth
    }

    /// Damage a piece gains for each enemy it destroys.
    #[must_use]
    pub const fn damage_growth(&self) -> i32 {
        self.damage_growth
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
