#![allow(dead_code)]

use chess_rules::{Board, CastlingRights, Color, GameState, Move, Piece, Square};

pub fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap_or_else(|| panic!("bad square {s}"))
}

pub fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

/// Build a board from a placement diagram: ranks 8 down to 1 separated by
/// '/', digits for runs of empty squares, letters for pieces.
pub fn board(placement: &str) -> Board {
    let mut board = Board::empty();
    for (row, rank) in placement.split('/').enumerate() {
        let mut file = 0;
        for c in rank.chars() {
            if let Some(n) = c.to_digit(10) {
                file += n as usize;
            } else {
                let piece = Piece::from_char(c).unwrap_or_else(|| panic!("bad piece {c}"));
                board.put(Square::new(row, file), Some(piece));
                file += 1;
            }
        }
        assert_eq!(file, 8, "rank {rank} does not cover 8 files");
    }
    board
}

/// A state from a placement diagram, side to move ('w'/'b'), castling flags
/// ("KQkq" subset or "-") and an optional en-passant square.
pub fn position(placement: &str, turn: char, castling: &str, ep: Option<&str>) -> GameState {
    let turn = if turn == 'w' { Color::White } else { Color::Black };
    let rights = CastlingRights {
        white_kingside: castling.contains('K'),
        white_queenside: castling.contains('Q'),
        black_kingside: castling.contains('k'),
        black_queenside: castling.contains('q'),
    };
    GameState::from_position(board(placement), turn, rights, ep.map(sq))
}
