//! Property-based tests for game mechanics.
//!
//! These tests verify properties of play enumeration and combat over random
//! rules and random games.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;

use landgrab::game::{
    PipelineConfig, candidate_count, canonical, check_invariants, is_legal_play, legal_plays,
    legal_plays_par, legal_plays_stream,
};
use landgrab::{Cell, Direction, Move, Piece, Play, Player, PlayerSlot, Rules, State};

fn idle() -> Arc<dyn Player> {
    Arc::new(|_: &State| -> Play { Play::new() })
}

prop_compose! {
    fn arb_rules()(
        piece_count in 1u32..=3,
        life in 1i32..=3,
        damage in 1i32..=2,
        life_growth in 0i32..=2,
        damage_growth in 0i32..=2,
    ) -> Rules {
        Rules::new(
            Duration::from_secs(30),
            piece_count,
            life,
            damage,
            life_growth,
            damage_growth,
        )
        .unwrap()
    }
}

/// Play a game by picking the legal play at each chosen index.
fn play_game(rules: Rules, choices: &[usize]) -> Vec<State> {
    let mut states = vec![State::new(rules, idle(), idle())];
    for &choice in choices {
        let state = states.last().unwrap();
        if state.winner() != PlayerSlot::NoPlayer {
            break;
        }
        let plays = legal_plays(state);
        let next = state.next_state_with_play(&plays[choice % plays.len()]);
        states.push(next);
    }
    states
}

/// Every legal play, built piece by piece from the move rules alone.
fn brute_force_plays(state: &State) -> HashSet<Play> {
    let size = state.rules().board_size();
    let mover = state.current_player();
    let mut plays: Vec<Vec<(Move, Cell)>> = vec![Vec::new()];
    for piece in state.current_player_pieces() {
        let from = state.cell_for_piece(piece).unwrap();
        let mut extended = Vec::new();
        for partial in &plays {
            extended.push(partial.clone());
            for direction in Direction::ALL {
                let to = from.step(direction);
                let friendly = state
                    .piece_for_cell(to)
                    .is_some_and(|p| state.player_for_piece(p) == mover);
                let claimed = partial.iter().any(|(_, cell)| *cell == to);
                if to.on_board(size) && !friendly && !claimed {
                    let mut play = partial.clone();
                    play.push((Move::new(piece, direction), to));
                    extended.push(play);
                }
            }
        }
        plays = extended;
    }
    plays
        .into_iter()
        .map(|p| canonical(&p.into_iter().map(|(m, _)| m).collect::<Play>()))
        .collect()
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every enumerated play is legal, uses each piece once and is distinct.
    #[test]
    fn prop_enumeration_sound(
        rules in arb_rules(),
        choices in prop::collection::vec(any::<usize>(), 0..12)
    ) {
        let states = play_game(rules, &choices);
        let state = states.last().unwrap();
        let plays = legal_plays(state);

        prop_assert!(!plays.is_empty());
        prop_assert!(plays.len() <= candidate_count(state).unwrap());

        let mut seen = HashSet::new();
        for play in &plays {
            prop_assert!(is_legal_play(state, play));
            let ids: HashSet<_> = play.iter().map(|m| m.piece().id()).collect();
            prop_assert_eq!(ids.len(), play.len());
            prop_assert!(seen.insert(canonical(play)));
        }
    }

    /// Enumeration finds every legal play of any reachable state.
    #[test]
    fn prop_enumeration_complete(
        rules in arb_rules(),
        choices in prop::collection::vec(any::<usize>(), 0..12)
    ) {
        let states = play_game(rules, &choices);
        let state = states.last().unwrap();
        let plays: HashSet<_> = legal_plays(state).iter().map(|p| canonical(p)).collect();
        prop_assert_eq!(plays, brute_force_plays(state));
    }

    /// A transition never changes the state it was made from.
    #[test]
    fn prop_transition_leaves_source_unchanged(
        rules in arb_rules(),
        choices in prop::collection::vec(any::<usize>(), 1..12)
    ) {
        let states = play_game(rules, &choices);
        let state = states.last().unwrap();
        let before = state.clone();
        let pieces = state.pieces();
        let cells: Vec<_> = pieces.iter().map(|&p| state.cell_for_piece(p)).collect();

        for play in legal_plays(state).iter().take(16) {
            let _ = state.next_state_with_play(play);
        }

        prop_assert_eq!(state, &before);
        prop_assert_eq!(state.pieces(), pieces.clone());
        let after: Vec<_> = pieces.iter().map(|&p| state.cell_for_piece(p)).collect();
        prop_assert_eq!(after, cells);
    }

    /// Remaining counts follow the live pieces and only the defender loses any.
    #[test]
    fn prop_pieces_conserved(
        rules in arb_rules(),
        choices in prop::collection::vec(any::<usize>(), 1..30)
    ) {
        let states = play_game(rules, &choices);
        for pair in states.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let mover = before.current_player();
            let defender = before.next_player();

            prop_assert_eq!(after.remaining(mover), before.remaining(mover));
            prop_assert!(after.remaining(defender) <= before.remaining(defender));
            for slot in [PlayerSlot::Player1, PlayerSlot::Player2] {
                let live = u32::try_from(after.pieces_of(slot).len()).unwrap();
                prop_assert_eq!(after.remaining(slot), live);
            }
            prop_assert!(after.pieces().len() <= before.pieces().len());
            prop_assert!(check_invariants(after).is_empty());
        }
    }

    /// A finished game stays finished whatever is played.
    #[test]
    fn prop_terminal_absorbing(
        rules in arb_rules(),
        choices in prop::collection::vec(any::<usize>(), 0..12),
        extra in prop::collection::vec((1u32..=6, arb_direction()), 0..4)
    ) {
        let states = play_game(rules, &choices);
        let state = states.last().unwrap();

        // Keep only the side to move so the game is decided
        let survivors: Vec<_> = state
            .current_player_pieces()
            .into_iter()
            .map(|p| (state.cell_for_piece(p).unwrap(), p))
            .collect();
        let finished =
            State::from_info(rules, state.current_player(), idle(), idle(), survivors).unwrap();
        prop_assert_ne!(finished.winner(), PlayerSlot::NoPlayer);

        let play: Play = extra
            .into_iter()
            .map(|(id, direction)| Move::new(Piece::new(id, 1, 1), direction))
            .collect();
        let next = finished.next_state_with_play(&play);
        prop_assert_eq!(&next, &finished);
        prop_assert_eq!(next.next_state().winner(), finished.winner());
    }

    /// Arbitrary plays, legal or not, keep the state consistent.
    #[test]
    fn prop_arbitrary_plays_total(
        rules in arb_rules(),
        turns in prop::collection::vec(
            prop::collection::vec((0u32..=7, arb_direction()), 0..5),
            1..20
        )
    ) {
        let mut state = State::new(rules, idle(), idle());
        for moves in turns {
            let play: Play = moves
                .into_iter()
                .map(|(id, direction)| Move::new(Piece::new(id, 1, 1), direction))
                .collect();
            let next = state.next_state_with_play(&play);
            prop_assert!(check_invariants(&next).is_empty());
            if state.winner() == PlayerSlot::NoPlayer {
                prop_assert_eq!(next.turn(), state.turn() + 1);
                prop_assert_eq!(next.current_player(), state.next_player());
            }
            state = next;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Sequential, parallel and streamed enumeration find the same plays.
    #[test]
    fn prop_enumerations_agree(
        rules in arb_rules(),
        choices in prop::collection::vec(any::<usize>(), 0..8),
        buffer in 1usize..16,
        workers in 1usize..4
    ) {
        let states = play_game(rules, &choices);
        let state = states.last().unwrap();

        let sequential = legal_plays(state);
        prop_assert_eq!(&legal_plays_par(state), &sequential);

        let config = PipelineConfig { buffer, workers };
        let streamed: Vec<_> = legal_plays_stream(state, config).unwrap().collect();
        prop_assert_eq!(streamed.len(), sequential.len());
        let streamed: HashSet<_> = streamed.iter().map(|p| canonical(p)).collect();
        let sequential: HashSet<_> = sequential.iter().map(|p| canonical(p)).collect();
        prop_assert_eq!(streamed, sequential);
    }
}
