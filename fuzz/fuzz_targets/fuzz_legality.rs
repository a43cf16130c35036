#![no_main]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use arbitrary::Arbitrary;
use landgrab::game::{is_legal_play, legal_plays};
use landgrab::{Direction, Move, Piece, Play, Player, Rules, State};
use libfuzzer_sys::fuzz_target;

/// Structured input for legality fuzzing.
#[derive(Arbitrary, Debug)]
struct LegalityInput {
    /// Pieces per side (capped to keep enumeration small).
    piece_count: u8,
    /// Indices of legal plays to make before checking.
    history: Vec<u16>,
    /// Candidate play: piece id and direction index.
    candidate: Vec<(u8, u8)>,
}

/// Order-insensitive identity of a play, ignoring the stats carried by moves.
fn key(play: &[Move]) -> Vec<(u32, Direction)> {
    let mut key: Vec<_> = play.iter().map(|m| (m.piece().id(), m.direction())).collect();
    key.sort();
    key
}

fuzz_target!(|input: LegalityInput| {
    let Ok(rules) = Rules::new(
        Duration::from_secs(30),
        u32::from(input.piece_count % 3) + 1,
        2,
        1,
        1,
        1,
    ) else {
        return;
    };
    let idle: Arc<dyn Player> = Arc::new(|_: &State| -> Play { Play::new() });
    let mut state = State::new(rules, Arc::clone(&idle), idle);

    for &choice in input.history.iter().take(16) {
        let plays = legal_plays(&state);
        state = state.next_state_with_play(&plays[usize::from(choice) % plays.len()]);
    }

    let candidate: Play = input
        .candidate
        .iter()
        .take(8)
        .map(|&(id, direction)| {
            let direction = Direction::ALL[usize::from(direction) % Direction::ALL.len()];
            Move::new(Piece::new(u32::from(id), 1, 1), direction)
        })
        .collect();

    // A play is legal exactly when enumeration produces it
    let legal: HashSet<_> = legal_plays(&state).iter().map(|p| key(p)).collect();
    assert_eq!(
        is_legal_play(&state, &candidate),
        legal.contains(&key(&candidate)),
        "legality and enumeration disagree on {candidate:?}"
    );
});
