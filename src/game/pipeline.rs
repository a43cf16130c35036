//! Streaming play enumeration.
//!
//! ```text
//! generator ──candidates──▶ worker × N ──legal plays──▶ PlayStream
//!           (bounded)                    (bounded)
//! ```
//!
//! One thread walks the candidate combinations and a fixed pool of workers
//! checks them against a frozen copy of the state. Both queues are bounded,
//! so memory stays flat however many candidates there are. The output queue
//! disconnects once every worker has dropped its sender, which ends the
//! stream.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, bounded};
use tracing::trace;

use crate::error::PipelineError;
use crate::game::plays::{Combinations, buckets};
use crate::game::{Play, State, is_legal_play};

/// Sizing of the enumeration pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Capacity of each queue.
    pub buffer: usize,
    /// Number of worker threads checking candidates.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            buffer: 100,
            workers: thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

/// Legal plays arriving from the pipeline.
///
/// Single pass and in no particular order. Dropping the stream early
/// disconnects the queues, and the generator and workers stop at their next
/// send.
#[derive(Debug)]
pub struct PlayStream {
    plays: Receiver<Play>,
}

impl Iterator for PlayStream {
    type Item = Play;

    fn next(&mut self) -> Option<Play> {
        self.plays.recv().ok()
    }
}

impl FusedIterator for PlayStream {}

/// Stream every legal play of the current player.
///
/// Yields the same set of plays as [`legal_plays`](crate::game::legal_plays)
/// but in an unspecified order. A zero buffer or worker count is treated as
/// one.
///
/// # Errors
///
/// Returns a [`PipelineError`] if a thread can't be spawned.
pub fn legal_plays_stream(
    state: &State,
    config: PipelineConfig,
) -> Result<PlayStream, PipelineError> {
    let state = Arc::new(state.clone());
    let buffer = config.buffer.max(1);
    let workers = config.workers.max(1);

    let candidates = Combinations::new(buckets(&state));
    trace!(
        candidates = ?candidates.count_hint(),
        buffer,
        workers,
        "starting play pipeline"
    );

    let (candidate_tx, candidate_rx) = bounded::<Play>(buffer);
    let (play_tx, play_rx) = bounded::<Play>(buffer);

    thread::Builder::new()
        .name("landgrab-generate".to_string())
        .spawn(move || {
            for candidate in candidates {
                if candidate_tx.send(candidate).is_err() {
                    break;
                }
            }
        })
        .map_err(PipelineError::spawn)?;

    for worker in 0..workers {
        let candidates = candidate_rx.clone();
        let plays = play_tx.clone();
        let state = Arc::clone(&state);
        thread::Builder::new()
            .name(format!("landgrab-filter-{worker}"))
            .spawn(move || {
                for candidate in candidates {
                    if is_legal_play(&state, &candidate) && plays.send(candidate).is_err() {
                        break;
                    }
                }
                trace!(worker, "play pipeline worker done");
            })
            .map_err(PipelineError::spawn)?;
    }

    Ok(PlayStream { plays: play_rx })
}
