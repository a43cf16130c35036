//! Strategy driven from outside the engine.

use std::sync::{Mutex, PoisonError};

use crate::game::{Play, Player, State};

/// Makes whatever play it was last told to make.
///
/// Until told otherwise it stays put.
#[derive(Debug, Default)]
pub struct Human {
    play: Mutex<Play>,
}

impl Human {
    /// Create the strategy with the empty play.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the play to make from now on.
    pub fn set_play(&self, play: Play) {
        *self.play.lock().unwrap_or_else(PoisonError::into_inner) = play;
    }
}

impl Player for Human {
    fn play(&self, _state: &State) -> Play {
        self.play
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn name(&self) -> &str {
        "human"
    }
}
