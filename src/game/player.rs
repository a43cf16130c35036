//! Player slots and the strategy interface.

use std::fmt;

use crate::game::{Play, State};

/// Which side of the game something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerSlot {
    /// Neither side.
    #[default]
    NoPlayer,
    /// The side starting on row 0 and moving first.
    Player1,
    /// The side starting on the last row.
    Player2,
}

impl PlayerSlot {
    /// The other side, or `NoPlayer` for `NoPlayer`.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
            PlayerSlot::NoPlayer => PlayerSlot::NoPlayer,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerSlot::NoPlayer => "no player",
            PlayerSlot::Player1 => "player 1",
            PlayerSlot::Player2 => "player 2",
        })
    }
}

/// Something that picks a play for the side to move.
///
/// Asked exactly once per turn by [`State::next_state`].
pub trait Player: Send + Sync {
    /// Choose the play to make from the state.
    fn play(&self, state: &State) -> Play;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "player"
    }
}

impl<F> Player for F
where
    F: Fn(&State) -> Play + Send + Sync,
{
    fn play(&self, state: &State) -> Play {
        self(state)
    }
}
