//! Count command implementation.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use landgrab::game::{
    PipelineConfig, candidate_count, legal_plays, legal_plays_par, legal_plays_stream,
};
use landgrab::{Play, Player, State};

use super::config::load_rules;
use super::{CliError, CountMode};

/// Execute the count command.
///
/// # Errors
///
/// Returns an error if the rules can't be loaded or the pipeline can't start.
pub(crate) fn execute(
    rules: Option<&Path>,
    mode: CountMode,
    buffer: Option<usize>,
    workers: Option<usize>,
) -> Result<(), CliError> {
    let rules = load_rules(rules)?;
    let idle: Arc<dyn Player> = Arc::new(|_: &State| -> Play { Play::new() });
    let state = State::new(rules, Arc::clone(&idle), idle);

    let defaults = PipelineConfig::default();
    let config = PipelineConfig {
        buffer: buffer.unwrap_or(defaults.buffer),
        workers: workers.unwrap_or(defaults.workers),
    };

    let started = Instant::now();
    let plays = count_plays(&state, mode, config)?;
    let elapsed = started.elapsed();

    println!(
        "Board {size}x{size}, {pieces} pieces per side",
        size = rules.board_size(),
        pieces = rules.piece_count()
    );
    match candidate_count(&state) {
        Some(candidates) => println!("  Candidates:  {candidates}"),
        None => println!("  Candidates:  more than {}", usize::MAX),
    }
    println!("  Legal plays: {plays}");
    println!("  Mode: {mode:?} ({:.3}s)", elapsed.as_secs_f64());

    Ok(())
}

/// Count the current player's legal plays the requested way.
///
/// # Errors
///
/// Returns an error if the streaming pipeline can't start.
pub(super) fn count_plays(
    state: &State,
    mode: CountMode,
    config: PipelineConfig,
) -> Result<usize, CliError> {
    Ok(match mode {
        CountMode::Sequential => legal_plays(state).len(),
        CountMode::Parallel => legal_plays_par(state).len(),
        CountMode::Stream => legal_plays_stream(state, config)?.count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use landgrab::Rules;
    use std::time::Duration;

    #[test]
    fn test_modes_agree() {
        let rules = Rules::new(Duration::from_secs(1), 3, 1, 1, 1, 1).unwrap();
        let idle: Arc<dyn Player> = Arc::new(|_: &State| -> Play { Play::new() });
        let state = State::new(rules, Arc::clone(&idle), idle);
        let config = PipelineConfig {
            buffer: 4,
            workers: 2,
        };

        let sequential = count_plays(&state, CountMode::Sequential, config).unwrap();
        assert_eq!(count_plays(&state, CountMode::Parallel, config).unwrap(), sequential);
        assert_eq!(count_plays(&state, CountMode::Stream, config).unwrap(), sequential);
    }

    #[test]
    fn test_single_piece_opening() {
        // A lone piece on row 0 can step W, SW, S, SE, E or stay: 6 plays
        let rules = Rules::new(Duration::from_secs(1), 1, 1, 1, 1, 1).unwrap();
        let idle: Arc<dyn Player> = Arc::new(|_: &State| -> Play { Play::new() });
        let state = State::new(rules, Arc::clone(&idle), idle);
        let plays = count_plays(&state, CountMode::Sequential, PipelineConfig::default());
        assert_eq!(plays.unwrap(), 6);
    }
}
