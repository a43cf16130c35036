//! Play command implementation.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use landgrab::game::is_legal_play;
use landgrab::strategy::Registry;
use landgrab::{PlayerSlot, State};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::config::load_rules;
use super::output::{GameSummary, JsonGameResult, format_text};
use super::{CliError, OutputFormat};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if a strategy is unknown or the rules can't be loaded.
pub(crate) fn execute(
    player1: &str,
    player2: &str,
    rules: Option<&Path>,
    seed: Option<u64>,
    max_turns: u32,
    format: OutputFormat,
) -> Result<(), CliError> {
    let rules = load_rules(rules)?;
    let seed = seed.unwrap_or_else(rand::random);

    // Each strategy gets its own stream derived from the game seed
    let mut seeds = StdRng::seed_from_u64(seed);
    let registry = Registry::standard();
    let build = |name: &str, seed: u64| {
        registry.create(name, seed).ok_or_else(|| {
            let known: Vec<_> = registry.entries().iter().map(|e| e.name).collect();
            CliError::new(format!(
                "Unknown strategy '{name}' (available: {})",
                known.join(", ")
            ))
        })
    };
    let first = build(player1, seeds.random())?;
    let second = build(player2, seeds.random())?;

    let summary = run_game(
        State::new(rules, first, second),
        seed,
        max_turns,
        [player1.to_string(), player2.to_string()],
    );

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&summary));
        }
        OutputFormat::Json => {
            let json_result = JsonGameResult::from_summary(&summary);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Drive a game until someone wins or the turn limit is reached.
///
/// Each strategy is timed against the rules' turn timeout. Overruns and
/// illegal plays are logged and counted, but the play is still applied.
pub(super) fn run_game(
    mut state: State,
    seed: u64,
    max_turns: u32,
    strategies: [String; 2],
) -> GameSummary {
    let timeout = state.rules().turn_timeout();
    let mut slow_turns = 0;
    let mut illegal_plays = 0;

    info!(seed, player1 = %strategies[0], player2 = %strategies[1], "starting game");

    while state.winner() == PlayerSlot::NoPlayer && state.turn() < max_turns {
        let mover = state.current_player();
        let Some(player) = state.player(mover).map(Arc::clone) else {
            break;
        };

        let started = Instant::now();
        let play = player.play(&state);
        let elapsed = started.elapsed();

        if elapsed > timeout {
            slow_turns += 1;
            warn!(
                turn = state.turn(),
                player = %mover,
                strategy = player.name(),
                ?elapsed,
                ?timeout,
                "strategy exceeded the turn timeout"
            );
        }
        if !is_legal_play(&state, &play) {
            illegal_plays += 1;
            warn!(
                turn = state.turn(),
                player = %mover,
                strategy = player.name(),
                moves = play.len(),
                "strategy returned an illegal play"
            );
        }

        debug!(turn = state.turn(), player = %mover, ?elapsed, "play chosen");
        state = state.next_state_with_play(&play);
    }

    info!(turns = state.turn(), winner = %state.winner(), "game over");

    GameSummary {
        seed,
        strategies,
        state,
        slow_turns,
        illegal_plays,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landgrab::strategy::{Greedy, Random};
    use landgrab::{Direction, Move, Play, Player, Rules};
    use std::time::Duration;

    fn names() -> [String; 2] {
        ["a".to_string(), "b".to_string()]
    }

    #[test]
    fn test_greedy_beats_idle() {
        let idle: Arc<dyn Player> = Arc::new(|_: &State| -> Play { Play::new() });
        let rules = Rules::new(Duration::from_secs(30), 2, 1, 1, 1, 1).unwrap();
        let state = State::new(rules, Arc::new(Greedy::new(3)), idle);
        let summary = run_game(state, 3, 100, names());
        assert_eq!(summary.state.winner(), PlayerSlot::Player1);
        assert_eq!(summary.illegal_plays, 0);
        assert!(summary.state.turn() < 100);
    }

    #[test]
    fn test_stops_at_turn_limit() {
        let idle: Arc<dyn Player> = Arc::new(|_: &State| -> Play { Play::new() });
        let state = State::new(Rules::standard(), Arc::clone(&idle), idle);
        let summary = run_game(state, 0, 6, names());
        assert_eq!(summary.state.turn(), 6);
        assert_eq!(summary.state.winner(), PlayerSlot::NoPlayer);
    }

    #[test]
    fn test_counts_illegal_and_slow_plays() {
        let cheat: Arc<dyn Player> = Arc::new(|state: &State| -> Play {
            // Move an opponent piece, which is never legal
            let piece = state.next_player_pieces()[0];
            vec![Move::new(piece, Direction::North)]
        });
        let slow: Arc<dyn Player> = Arc::new(|_: &State| -> Play {
            std::thread::sleep(Duration::from_millis(50));
            Play::new()
        });
        let rules = Rules::new(Duration::from_millis(20), 2, 1, 1, 1, 1).unwrap();
        let state = State::new(rules, cheat, slow);
        let summary = run_game(state, 0, 4, names());
        assert_eq!(summary.illegal_plays, 2);
        assert_eq!(summary.slow_turns, 2);
    }

    #[test]
    fn test_same_seed_same_game() {
        let rules = Rules::new(Duration::from_secs(30), 3, 2, 1, 1, 1).unwrap();
        let play = |seed: u64| {
            let state = State::new(
                rules,
                Arc::new(Random::new(seed)),
                Arc::new(Random::new(seed + 1)),
            );
            run_game(state, seed, 40, names()).state
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn test_unknown_strategy() {
        let err = execute("greedy", "oracle", None, Some(1), 1, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Unknown strategy 'oracle'"));
    }
}
