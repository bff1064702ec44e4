use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::moves::Move;
use crate::piece::Color;
use crate::square::Square;
use crate::zobrist;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> Self {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// Copy with both of `color`'s rights revoked.
    pub fn without_color(self, color: Color) -> Self {
        match color {
            Color::White => CastlingRights {
                white_kingside: false,
                white_queenside: false,
                ..self
            },
            Color::Black => CastlingRights {
                black_kingside: false,
                black_queenside: false,
                ..self
            },
        }
    }

    /// Copy with the right tied to the rook corner at `sq` revoked. Squares
    /// other than the four corners leave the rights unchanged.
    pub fn without_corner(self, sq: Square) -> Self {
        match (sq.row, sq.file) {
            (7, 7) => CastlingRights {
                white_kingside: false,
                ..self
            },
            (7, 0) => CastlingRights {
                white_queenside: false,
                ..self
            },
            (0, 7) => CastlingRights {
                black_kingside: false,
                ..self
            },
            (0, 0) => CastlingRights {
                black_queenside: false,
                ..self
            },
            _ => self,
        }
    }
}

/// An immutable snapshot of a game. New states come only from
/// [`crate::apply::apply_move`]; nothing edits a state in place.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub last_move: Option<Move>,
    pub move_history: Vec<String>,
    pub position_counts: HashMap<u64, u32>,
    pub threefold_available: bool,
}

impl Default for GameState {
    fn default() -> Self {
        create_initial_state()
    }
}

impl GameState {
    /// Wrap an arbitrary placement in a fresh state: clocks reset, empty
    /// history, and one repetition entry for the position itself.
    pub fn from_position(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        let mut state = GameState {
            board,
            turn,
            castling,
            en_passant_target,
            halfmove_clock: 0,
            fullmove_number: 1,
            last_move: None,
            move_history: Vec::new(),
            position_counts: HashMap::new(),
            threefold_available: false,
        };
        state.position_counts.insert(state.position_hash(), 1);
        state
    }

    pub fn position_hash(&self) -> u64 {
        zobrist::keys().hash(
            &self.board,
            self.turn,
            &self.castling,
            self.en_passant_target,
        )
    }

    /// How many times the current position has occurred in this game.
    pub fn repetition_count(&self) -> u32 {
        self.position_counts
            .get(&self.position_hash())
            .copied()
            .unwrap_or(0)
    }
}

/// The standard starting position with white to move.
pub fn create_initial_state() -> GameState {
    GameState::from_position(Board::standard(), Color::White, CastlingRights::all(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_the_standard_setup() {
        let state = create_initial_state();
        assert_eq!(state.board, Board::standard());
        assert_eq!(state.turn, Color::White);
        assert_eq!(state.castling, CastlingRights::all());
        assert_eq!(state.en_passant_target, None);
        assert_eq!(state.halfmove_clock, 0);
        assert_eq!(state.fullmove_number, 1);
        assert!(state.move_history.is_empty());
        assert_eq!(state.position_counts.len(), 1);
        assert_eq!(state.repetition_count(), 1);
        assert!(!state.threefold_available);
    }

    #[test]
    fn corner_revocation_only_touches_its_own_flag() {
        let rights = CastlingRights::all().without_corner(Square::new(0, 7));
        assert!(!rights.black_kingside);
        assert!(rights.black_queenside);
        assert!(rights.white_kingside);
        assert_eq!(
            CastlingRights::all().without_corner(Square::new(4, 4)),
            CastlingRights::all()
        );
    }

    #[test]
    fn revoking_a_color_clears_both_sides() {
        let rights = CastlingRights::all().without_color(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(!rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));
    }

    #[test]
    fn state_survives_a_json_round_trip() {
        let state = create_initial_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
