//! Uniformly random strategy.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Play, Player, State, legal_plays};

/// Chooses uniformly among every legal play.
#[derive(Debug)]
pub struct Random {
    rng: Mutex<StdRng>,
}

impl Random {
    /// Create the strategy with its random source seeded.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Player for Random {
    fn play(&self, state: &State) -> Play {
        let mut plays = legal_plays(state);
        if plays.is_empty() {
            return Play::new();
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let index = rng.random_range(0..plays.len());
        plays.swap_remove(index)
    }

    fn name(&self) -> &str {
        "random"
    }
}
