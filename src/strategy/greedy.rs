//! One-ply greedy strategy.
//!
//! A position is worth the total life and damage of the side to move minus
//! that of its opponent. The strategy picks the play whose resulting position
//! is worth least to the opponent, preferring plays that bring the two sides
//! closer together on ties.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::game::{Piece, Play, Player, PlayerSlot, State, legal_plays_par};

/// Chooses the play leaving the best position one turn ahead.
#[derive(Debug)]
pub struct Greedy {
    name: &'static str,
    rng: Mutex<StdRng>,
}

impl Greedy {
    /// Create the strategy with its tie-breaking random source seeded.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::named("greedy", seed)
    }

    /// The same strategy under the name `search`.
    #[must_use]
    pub fn search(seed: u64) -> Self {
        Self::named("search", seed)
    }

    fn named(name: &'static str, seed: u64) -> Self {
        Self {
            name,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Player for Greedy {
    fn play(&self, state: &State) -> Play {
        let plays = legal_plays_par(state);
        let scored: Vec<(i64, i64)> = plays
            .par_iter()
            .map(|play| {
                let next = state.next_state_with_play(play);
                (value(&next), total_distance(&next))
            })
            .collect();

        let Some(best) = scored.iter().min().copied() else {
            return Play::new();
        };
        let mut ties: Vec<Play> = plays
            .into_iter()
            .zip(scored)
            .filter(|(_, score)| *score == best)
            .map(|(play, _)| play)
            .collect();

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let index = rng.random_range(0..ties.len());
        ties.swap_remove(index)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Worth of the state to the side to move.
pub(crate) fn value(state: &State) -> i64 {
    let winner = state.winner();
    if winner != PlayerSlot::NoPlayer {
        return if winner == state.current_player() {
            i64::MAX
        } else {
            i64::MIN
        };
    }
    let strength = |slot: PlayerSlot| -> i64 {
        state
            .pieces_of(slot)
            .iter()
            .map(|p| i64::from(p.life()) + i64::from(p.damage()))
            .sum()
    };
    strength(state.current_player()) - strength(state.next_player())
}

/// Sum of Manhattan distances between every pair of opposing pieces.
pub(crate) fn total_distance(state: &State) -> i64 {
    let cells = |pieces: Vec<Piece>| -> Vec<_> {
        pieces
            .into_iter()
            .filter_map(|p| state.cell_for_piece(p))
            .collect()
    };
    let ours = cells(state.current_player_pieces());
    let theirs = cells(state.next_player_pieces());
    ours.iter()
        .flat_map(|a| theirs.iter().map(move |b| i64::from(a.manhattan_distance(*b))))
        .sum()
}
