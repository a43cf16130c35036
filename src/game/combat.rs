//! Combat resolution.
//!
//! Moves of a play are applied in order to a private clone of the state.
//! A move onto an empty cell relocates the piece. A move onto an enemy piece
//! is an attack: the enemy loses life equal to the attacker's damage and the
//! attacker stays where it is. Once every move is applied, enemies with no
//! life left are removed and each piece that attacked their cell grows.

use crate::game::{Cell, Move, PieceId, PlayerSlot, State};

/// An attack made during a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Hit {
    /// Attacking piece.
    pub(super) attacker: PieceId,
    /// Cell that was attacked.
    pub(super) target: Cell,
}

impl State {
    /// Apply each move of the play in order and return the attacks made.
    ///
    /// Only a piece's first move counts. Moves that aren't the current
    /// player's, leave the board, or land on a friendly piece do nothing.
    pub(super) fn apply_play(&mut self, play: &[Move]) -> Vec<Hit> {
        let mover = self.current_player;
        let size = self.rules.board_size();
        let mut used = vec![false; self.rules.piece_count() as usize * 2];
        let mut hits = Vec::new();

        for m in play {
            let id = m.piece().id();
            if self.player_for_id(id) != mover {
                continue;
            }
            // Ids owned by a side are always in 1..=2 * piece_count.
            let slot = &mut used[(id - 1) as usize];
            if *slot {
                continue;
            }
            *slot = true;

            let Some(attacker) = self.pieces.get(id) else {
                continue;
            };
            let Some(from) = self.locations.get(id) else {
                continue;
            };
            let to = from.step(m.direction());
            if !to.on_board(size) {
                continue;
            }

            match self.occupancy.get(to) {
                Some(occupant) if self.player_for_id(occupant) == mover => {}
                Some(occupant) => {
                    if let Some(mut defender) = self.pieces.get(occupant) {
                        defender.take_damage(attacker.damage());
                        self.pieces.set(occupant, defender);
                    }
                    hits.push(Hit {
                        attacker: id,
                        target: to,
                    });
                }
                None => {
                    self.occupancy.remove(from);
                    self.occupancy.set(to, id);
                    self.locations.set(id, to);
                }
            }
        }

        hits
    }

    /// Remove the opponent's destroyed pieces and grow their attackers.
    ///
    /// Returns how many pieces were destroyed.
    pub(super) fn remove_destroyed(&mut self, hits: &[Hit]) -> u32 {
        let defender = self.current_player.opponent();
        let life_growth = self.rules.life_growth();
        let damage_growth = self.rules.damage_growth();
        let mut destroyed = 0;

        for id in self.ids_of(defender) {
            let Some(piece) = self.pieces.get(id) else {
                continue;
            };
            if !piece.is_destroyed() {
                continue;
            }

            if let Some(cell) = self.locations.get(id) {
                for hit in hits.iter().filter(|hit| hit.target == cell) {
                    if let Some(mut attacker) = self.pieces.get(hit.attacker) {
                        attacker.grow(life_growth, damage_growth);
                        self.pieces.set(hit.attacker, attacker);
                    }
                }
                self.occupancy.remove(cell);
            }
            self.pieces.remove(id);
            self.locations.remove(id);
            destroyed += 1;
        }

        match defender {
            PlayerSlot::Player1 => {
                self.player1_remaining = self.player1_remaining.saturating_sub(destroyed);
            }
            PlayerSlot::Player2 => {
                self.player2_remaining = self.player2_remaining.saturating_sub(destroyed);
            }
            PlayerSlot::NoPlayer => {}
        }

        destroyed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::game::{Direction, Piece, Play, Player, Rules};

    fn idle() -> Arc<dyn Player> {
        Arc::new(|_: &State| -> Play { Play::new() })
    }

    fn rules(piece_count: u32, life: i32) -> Rules {
        Rules::new(Duration::from_secs(30), piece_count, life, 1, 1, 1).unwrap()
    }

    fn state(
        rules: Rules,
        current: PlayerSlot,
        pieces: impl IntoIterator<Item = (Cell, Piece)>,
    ) -> State {
        State::from_info(rules, current, idle(), idle(), pieces).unwrap()
    }

    #[test]
    fn test_kill_grows_attacker_and_ends_game() {
        let before = state(
            rules(1, 1),
            PlayerSlot::Player1,
            [
                (Cell::new(1, 1), Piece::new(1, 1, 1)),
                (Cell::new(2, 1), Piece::new(2, 1, 1)),
            ],
        );
        let after = before.next_state_with_play(&[Move::new(Piece::new(1, 1, 1), Direction::South)]);

        assert_eq!(after.piece_for_cell(Cell::new(1, 1)), Some(Piece::new(1, 2, 2)));
        assert_eq!(after.piece_for_cell(Cell::new(2, 1)), None);
        assert_eq!(after.cell_for_piece(Piece::new(2, 1, 1)), None);
        assert_eq!(after.remaining(PlayerSlot::Player2), 0);
        assert_eq!(after.winner(), PlayerSlot::Player1);
    }

    #[test]
    fn test_attacker_stays_when_defender_survives() {
        let before = state(
            rules(1, 2),
            PlayerSlot::Player2,
            [
                (Cell::new(1, 1), Piece::new(1, 2, 1)),
                (Cell::new(2, 2), Piece::new(2, 2, 1)),
            ],
        );
        let after =
            before.next_state_with_play(&[Move::new(Piece::new(2, 2, 1), Direction::NorthWest)]);

        assert_eq!(after.piece_for_cell(Cell::new(1, 1)), Some(Piece::new(1, 1, 1)));
        assert_eq!(after.piece_for_cell(Cell::new(2, 2)), Some(Piece::new(2, 2, 1)));
        assert_eq!(after.winner(), PlayerSlot::NoPlayer);
        assert_eq!(after.current_player(), PlayerSlot::Player1);
    }

    #[test]
    fn test_repeated_piece_only_moves_once() {
        let before = state(
            rules(1, 1),
            PlayerSlot::Player1,
            [
                (Cell::new(0, 1), Piece::new(1, 1, 1)),
                (Cell::new(2, 1), Piece::new(2, 1, 1)),
            ],
        );
        let piece = Piece::new(1, 1, 1);
        let after = before.next_state_with_play(&[
            Move::new(piece, Direction::East),
            Move::new(piece, Direction::South),
        ]);
        assert_eq!(after.cell_for_piece(piece), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_invalid_moves_are_skipped() {
        let before = state(
            rules(2, 1),
            PlayerSlot::Player1,
            [
                (Cell::new(0, 0), Piece::new(1, 1, 1)),
                (Cell::new(0, 1), Piece::new(2, 1, 1)),
                (Cell::new(4, 4), Piece::new(3, 1, 1)),
            ],
        );
        let after = before.next_state_with_play(&[
            // Off the board.
            Move::new(Piece::new(1, 1, 1), Direction::North),
            // Onto a friendly piece.
            Move::new(Piece::new(2, 1, 1), Direction::West),
            // Not the mover's piece.
            Move::new(Piece::new(3, 1, 1), Direction::North),
            // Destroyed piece.
            Move::new(Piece::new(4, 1, 1), Direction::North),
            Move::new(Piece::NONE, Direction::North),
        ]);

        assert_eq!(after.pieces(), before.pieces());
        for piece in before.pieces() {
            assert_eq!(after.cell_for_piece(piece), before.cell_for_piece(piece));
        }
        assert_eq!(after.current_player(), PlayerSlot::Player2);
    }

    #[test]
    fn test_move_vacates_previous_cell() {
        let before = state(
            rules(2, 1),
            PlayerSlot::Player1,
            [
                (Cell::new(0, 1), Piece::new(1, 1, 1)),
                (Cell::new(4, 1), Piece::new(3, 1, 1)),
            ],
        );
        let after = before.next_state_with_play(&[Move::new(Piece::new(1, 1, 1), Direction::SouthEast)]);
        assert_eq!(after.piece_for_cell(Cell::new(0, 1)), None);
        assert_eq!(after.piece_for_cell(Cell::new(1, 2)), Some(Piece::new(1, 1, 1)));
    }

    #[test]
    fn test_double_attack_grows_both_attackers() {
        // Not a legal play, but application stays total.
        let before = state(
            rules(2, 1),
            PlayerSlot::Player1,
            [
                (Cell::new(1, 0), Piece::new(1, 1, 1)),
                (Cell::new(1, 2), Piece::new(2, 1, 1)),
                (Cell::new(2, 1), Piece::new(3, 2, 1)),
                (Cell::new(4, 4), Piece::new(4, 1, 1)),
            ],
        );
        let after = before.next_state_with_play(&[
            Move::new(Piece::new(1, 1, 1), Direction::SouthEast),
            Move::new(Piece::new(2, 1, 1), Direction::SouthWest),
        ]);

        assert_eq!(after.piece_for_cell(Cell::new(2, 1)), None);
        assert_eq!(after.piece_for_cell(Cell::new(1, 0)), Some(Piece::new(1, 2, 2)));
        assert_eq!(after.piece_for_cell(Cell::new(1, 2)), Some(Piece::new(2, 2, 2)));
        assert_eq!(after.remaining(PlayerSlot::Player2), 1);
    }

    #[test]
    fn test_finished_game_is_absorbing() {
        let before = state(
            rules(1, 1),
            PlayerSlot::Player2,
            [(Cell::new(1, 1), Piece::new(1, 1, 1))],
        );
        assert_eq!(before.winner(), PlayerSlot::Player1);
        let after = before.next_state_with_play(&[Move::new(Piece::new(1, 1, 1), Direction::South)]);
        assert_eq!(after, before);
        assert_eq!(after.next_state(), before);
    }
}
