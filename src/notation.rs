use crate::movegen::{get_all_legal_moves, get_legal_moves};
use crate::moves::Move;
use crate::piece::PieceType;
use crate::state::GameState;

/// SAN-style text for a move, given the states on either side of it.
///
/// `before` decides the piece letter, capture marker and disambiguation;
/// `after` decides the `+` / `#` suffix.
pub fn move_notation(before: &GameState, m: &Move, after: &GameState) -> String {
    let piece = match before.board.get(m.from) {
        Some(p) => p,
        None => return m.to_uci(),
    };

    let mut san = if m.is_castling {
        if m.to.file > m.from.file {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        }
    } else {
        let is_capture = m.is_en_passant || before.board.get(m.to).is_some();
        let mut s = String::new();
        if piece.piece_type == PieceType::Pawn {
            if is_capture {
                s.push(m.from.file_char());
            }
        } else {
            s.push(piece.piece_type.letter());
            s.push_str(&disambiguation(before, m));
        }
        if is_capture {
            s.push('x');
        }
        s.push_str(&m.to.to_algebraic());
        if let Some(pt) = m.promotion {
            s.push('=');
            s.push(pt.letter());
        }
        s
    };

    if after.board.is_in_check(after.turn) {
        if get_all_legal_moves(after, after.turn).is_empty() {
            san.push('#');
        } else {
            san.push('+');
        }
    }
    san
}

/// File, rank, or both, whichever separates `m.from` from every other like
/// piece that could also legally reach `m.to`.
fn disambiguation(before: &GameState, m: &Move) -> String {
    let piece = match before.board.get(m.from) {
        Some(p) => p,
        None => return String::new(),
    };
    let rivals: Vec<_> = before
        .board
        .pieces()
        .filter(|&(sq, p)| sq != m.from && p == piece)
        .filter(|&(sq, _)| get_legal_moves(before, sq).iter().any(|r| r.to == m.to))
        .map(|(sq, _)| sq)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| sq.file != m.from.file) {
        m.from.file_char().to_string()
    } else if rivals.iter().all(|sq| sq.row != m.from.row) {
        m.from.rank_char().to_string()
    } else {
        m.from.to_algebraic()
    }
}
