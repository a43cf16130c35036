#![no_main]

use std::sync::Arc;
use std::time::Duration;

use arbitrary::Arbitrary;
use landgrab::game::check_invariants;
use landgrab::{Direction, Move, Piece, Play, Player, PlayerSlot, Rules, State};
use libfuzzer_sys::fuzz_target;

/// Structured input for transition fuzzing.
#[derive(Arbitrary, Debug)]
struct TransitionInput {
    /// Pieces per side (capped).
    piece_count: u8,
    /// Starting life (capped).
    life: u8,
    /// Starting damage (capped).
    damage: u8,
    /// Life gained per kill.
    life_growth: u8,
    /// Damage gained per kill.
    damage_growth: u8,
    /// Raw moves per turn: piece id and direction index.
    turns: Vec<Vec<(u8, u8)>>,
}

fuzz_target!(|input: TransitionInput| {
    let rules = match Rules::new(
        Duration::from_secs(30),
        u32::from(input.piece_count % 6) + 1,
        i32::from(input.life % 8) + 1,
        i32::from(input.damage % 4) + 1,
        i32::from(input.life_growth % 4),
        i32::from(input.damage_growth % 4),
    ) {
        Ok(rules) => rules,
        Err(e) => panic!("capped rules rejected: {e}"),
    };
    let idle: Arc<dyn Player> = Arc::new(|_: &State| -> Play { Play::new() });
    let mut state = State::new(rules, Arc::clone(&idle), idle);

    for moves in input.turns.iter().take(64) {
        // Ids outside the game and repeated pieces are deliberately allowed
        let play: Play = moves
            .iter()
            .take(16)
            .map(|&(id, direction)| {
                let direction = Direction::ALL[usize::from(direction) % Direction::ALL.len()];
                Move::new(Piece::new(u32::from(id), 1, 1), direction)
            })
            .collect();

        let before = state.clone();
        let next = state.next_state_with_play(&play);

        // Source state must be untouched
        assert_eq!(state, before, "transition mutated its source");

        let violations = check_invariants(&next);
        assert!(violations.is_empty(), "Invariants violated: {violations:?}");

        // Live pieces never increase and the mover never loses any
        assert!(next.pieces().len() <= state.pieces().len());
        let mover = state.current_player();
        assert_eq!(next.remaining(mover), state.remaining(mover));

        if state.winner() != PlayerSlot::NoPlayer {
            assert_eq!(next, state, "finished game changed");
        }
        state = next;
    }
});
