use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::movegen::get_all_legal_moves;
use crate::piece::{Color, PieceType};
use crate::state::GameState;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawFiftyMoves,
}

impl GameStatus {
    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::DrawFiftyMoves
        )
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub status: GameStatus,
    pub winner: Option<Color>,
}

/// Classify the position for the side to move. Mate and stalemate win over
/// the fifty-move draw, which wins over a plain check.
pub fn get_game_status(state: &GameState) -> StatusReport {
    let side = state.turn;
    let in_check = state.board.is_in_check(side);
    let has_moves = !get_all_legal_moves(state, side).is_empty();

    let (status, winner) = match (in_check, has_moves) {
        (true, false) => (GameStatus::Checkmate, Some(side.opposite())),
        (false, false) => (GameStatus::Stalemate, None),
        _ if state.halfmove_clock >= 100 => (GameStatus::DrawFiftyMoves, None),
        (true, true) => (GameStatus::Check, None),
        (false, true) => (GameStatus::Ongoing, None),
    };
    StatusReport { status, winner }
}

/// King vs king, or king and a single minor piece vs a bare king.
pub fn has_insufficient_material(board: &Board) -> bool {
    let mut white = Vec::new();
    let mut black = Vec::new();
    for (_, p) in board.pieces() {
        if p.piece_type == PieceType::King {
            continue;
        }
        match p.color {
            Color::White => white.push(p.piece_type),
            Color::Black => black.push(p.piece_type),
        }
    }
    let is_minor = |pt: &PieceType| matches!(pt, PieceType::Bishop | PieceType::Knight);
    match (white.as_slice(), black.as_slice()) {
        ([], []) => true,
        ([pt], []) | ([], [pt]) => is_minor(pt),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::state::{create_initial_state, CastlingRights};

    fn setup(pieces: &[(&str, char)], turn: Color) -> GameState {
        let mut board = Board::empty();
        for &(at, c) in pieces {
            board.put(Square::from_algebraic(at).unwrap(), Piece::from_char(c));
        }
        GameState::from_position(board, turn, CastlingRights::none(), None)
    }

    #[test]
    fn fresh_game_is_ongoing() {
        let report = get_game_status(&create_initial_state());
        assert_eq!(report.status, GameStatus::Ongoing);
        assert_eq!(report.winner, None);
        assert!(!report.status.is_game_over());
    }

    #[test]
    fn back_rank_mate_names_the_winner() {
        let state = setup(
            &[("g8", 'k'), ("f7", 'p'), ("g7", 'p'), ("h7", 'p'), ("e8", 'R'), ("g1", 'K')],
            Color::Black,
        );
        let report = get_game_status(&state);
        assert_eq!(report.status, GameStatus::Checkmate);
        assert_eq!(report.winner, Some(Color::White));
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let state = setup(&[("h8", 'k'), ("f7", 'Q'), ("g6", 'K')], Color::Black);
        let report = get_game_status(&state);
        assert_eq!(report.status, GameStatus::Stalemate);
        assert_eq!(report.winner, None);
    }

    #[test]
    fn check_with_an_escape_is_just_check() {
        let state = setup(&[("e8", 'k'), ("e1", 'R'), ("a1", 'K')], Color::Black);
        assert_eq!(get_game_status(&state).status, GameStatus::Check);
    }

    #[test]
    fn fifty_move_draw_yields_to_mate_but_beats_check() {
        let mut state = setup(&[("e8", 'k'), ("e1", 'R'), ("a1", 'K')], Color::Black);
        state.halfmove_clock = 100;
        assert_eq!(get_game_status(&state).status, GameStatus::DrawFiftyMoves);

        let mut mated = setup(
            &[("g8", 'k'), ("f7", 'p'), ("g7", 'p'), ("h7", 'p'), ("e8", 'R'), ("g1", 'K')],
            Color::Black,
        );
        mated.halfmove_clock = 120;
        assert_eq!(get_game_status(&mated).status, GameStatus::Checkmate);

        let mut quiet = create_initial_state();
        quiet.halfmove_clock = 99;
        assert_eq!(get_game_status(&quiet).status, GameStatus::Ongoing);
    }

    #[test]
    fn status_serializes_in_snake_case() {
        let json = serde_json::to_string(&GameStatus::DrawFiftyMoves).unwrap();
        assert_eq!(json, "\"draw_fifty_moves\"");
    }

    #[test]
    fn bare_kings_and_lone_minors_cannot_mate() {
        let kk = setup(&[("e8", 'k'), ("e1", 'K')], Color::White);
        assert!(has_insufficient_material(&kk.board));
        let kbk = setup(&[("e8", 'k'), ("e1", 'K'), ("c1", 'B')], Color::White);
        assert!(has_insufficient_material(&kbk.board));
        let knk = setup(&[("e8", 'k'), ("g8", 'n'), ("e1", 'K')], Color::White);
        assert!(has_insufficient_material(&knk.board));
        let kpk = setup(&[("e8", 'k'), ("e1", 'K'), ("e2", 'P')], Color::White);
        assert!(!has_insufficient_material(&kpk.board));
        assert!(!has_insufficient_material(&Board::standard()));
    }
}
