//! Enumeration of every legal play.
//!
//! Legal moves are bucketed by piece and each bucket gets an extra "stay
//! put" option. Every combination taking one option from each bucket is a
//! candidate play. Candidates are walked with a mixed-radix counter, where
//! digit `i` counts through bucket `i`, so the number of candidates is known
//! up front and any candidate can be built straight from its index.

use std::iter::FusedIterator;

use rayon::prelude::*;
use tracing::{trace, warn};

use crate::game::{Move, Play, State, is_legal_play, legal_moves};

/// Options for one piece: each of its legal moves, then `None` to stay put.
pub(crate) type Bucket = Vec<Option<Move>>;

/// Bucket the current player's legal moves by piece.
///
/// Pieces without a legal move get no bucket.
pub(crate) fn buckets(state: &State) -> Vec<Bucket> {
    legal_moves(state)
        .chunk_by(|a, b| a.piece().id() == b.piece().id())
        .map(|moves| moves.iter().copied().map(Some).chain([None]).collect())
        .collect()
}

/// Number of combinations of the buckets, or `None` if it overflows `usize`.
fn combination_count(buckets: &[Bucket]) -> Option<usize> {
    buckets
        .iter()
        .try_fold(1usize, |count, bucket| count.checked_mul(bucket.len()))
}

/// Build the play for a combination, dropping the stay-put placeholders.
fn play_for(buckets: &[Bucket], digits: &[usize]) -> Play {
    buckets
        .iter()
        .zip(digits)
        .filter_map(|(bucket, &digit)| bucket[digit])
        .collect()
}

/// Build the play for the combination at `index` in counting order.
fn play_at(buckets: &[Bucket], mut index: usize) -> Play {
    let mut play = Play::with_capacity(buckets.len());
    for bucket in buckets {
        if let Some(m) = bucket[index % bucket.len()] {
            play.push(m);
        }
        index /= bucket.len();
    }
    play
}

/// Every combination of the buckets as a candidate play, in counting order.
///
/// Candidates aren't checked for legality. The iterator ends when the
/// counter wraps, so it doesn't depend on the count fitting in `usize`.
#[derive(Debug, Clone)]
pub(crate) struct Combinations {
    buckets: Vec<Bucket>,
    digits: Vec<usize>,
    /// Candidates left, when that fits in `usize`.
    remaining: Option<usize>,
    done: bool,
}

impl Combinations {
    pub(crate) fn new(buckets: Vec<Bucket>) -> Self {
        let remaining = combination_count(&buckets);
        Self {
            digits: vec![0; buckets.len()],
            buckets,
            remaining,
            done: false,
        }
    }

    /// Total candidates, or `None` if there are more than `usize::MAX`.
    pub(crate) fn count_hint(&self) -> Option<usize> {
        combination_count(&self.buckets)
    }

    /// Add one to the digits with carry. Returns false once every digit
    /// has wrapped back to zero.
    fn increment(&mut self) -> bool {
        for (digit, bucket) in self.digits.iter_mut().zip(&self.buckets) {
            *digit += 1;
            if *digit < bucket.len() {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Play;

    fn next(&mut self) -> Option<Play> {
        if self.done {
            return None;
        }
        let play = play_for(&self.buckets, &self.digits);
        self.done = !self.increment();
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
        Some(play)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.done, self.remaining) {
            (true, _) => (0, Some(0)),
            (false, Some(remaining)) => (remaining, Some(remaining)),
            (false, None) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations {}

/// Number of candidate plays the enumeration checks for the state.
///
/// This is the product over the current player's movable pieces of one more
/// than their legal move count, and bounds the number of legal plays.
/// Returns `None` if the product doesn't fit in `usize`.
#[must_use]
pub fn candidate_count(state: &State) -> Option<usize> {
    combination_count(&buckets(state))
}

/// Every legal play of the current player.
///
/// Includes the empty play. Plays come in counting order, which is fixed
/// for a given state.
#[must_use]
pub fn legal_plays(state: &State) -> Vec<Play> {
    let candidates = Combinations::new(buckets(state));
    trace!(candidates = ?candidates.count_hint(), "enumerating plays");
    candidates
        .filter(|play| is_legal_play(state, play))
        .collect()
}

/// Every legal play of the current player, checked in parallel.
///
/// Returns exactly what [`legal_plays`] does, in the same order. Candidates
/// are split by index, so a count past `usize::MAX` falls back to
/// [`legal_plays`].
#[must_use]
pub fn legal_plays_par(state: &State) -> Vec<Play> {
    let buckets = buckets(state);
    let Some(count) = combination_count(&buckets) else {
        warn!("too many candidate plays to index, enumerating sequentially");
        return legal_plays(state);
    };
    trace!(candidates = count, "enumerating plays in parallel");
    (0..count)
        .into_par_iter()
        .filter_map(|index| {
            let play = play_at(&buckets, index);
            is_legal_play(state, &play).then_some(play)
        })
        .collect()
}
