use crate::apply::relocate;
use crate::attacks::{DIAGONAL_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, STRAIGHT_DIRS};
use crate::board::Board;
use crate::moves::Move;
use crate::piece::{Color, PieceType};
use crate::square::Square;
use crate::state::GameState;

const ALL_DIRS: [(i32, i32); 8] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Row a pawn of `color` starts on and may double-step from.
fn pawn_start_row(color: Color) -> usize {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which `color`'s en-passant captures land.
fn en_passant_row(color: Color) -> usize {
    match color {
        Color::White => 2,
        Color::Black => 5,
    }
}

/// Geometrically valid moves for the piece on `from`, ignoring self-check.
/// An empty square yields no moves.
pub fn get_pseudo_legal_moves(state: &GameState, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    let piece = match state.board.get(from) {
        Some(p) => p,
        None => return moves,
    };
    let color = piece.color;
    match piece.piece_type {
        PieceType::Pawn => generate_pawn_moves(state, from, color, &mut moves),
        PieceType::Knight => generate_step_moves(&state.board, from, color, &KNIGHT_OFFSETS, &mut moves),
        PieceType::Bishop => generate_sliding_moves(&state.board, from, color, &DIAGONAL_DIRS, &mut moves),
        PieceType::Rook => generate_sliding_moves(&state.board, from, color, &STRAIGHT_DIRS, &mut moves),
        PieceType::Queen => generate_sliding_moves(&state.board, from, color, &ALL_DIRS, &mut moves),
        PieceType::King => {
            generate_step_moves(&state.board, from, color, &KING_OFFSETS, &mut moves);
            generate_castling_moves(state, from, color, &mut moves);
        }
    }
    moves
}

fn push_pawn_move(from: Square, to: Square, color: Color, moves: &mut Vec<Move>) {
    if to.row == color.opposite().home_row() {
        for &pt in &PieceType::PROMOTIONS {
            moves.push(Move::promoting(from, to, pt));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

fn generate_pawn_moves(state: &GameState, from: Square, color: Color, moves: &mut Vec<Move>) {
    let board = &state.board;
    let dir = color.pawn_direction();

    // Single push, then double push from the start row
    if let Some(ahead) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
        push_pawn_move(from, ahead, color, moves);
        if from.row == pawn_start_row(color) {
            if let Some(two) = ahead.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
                moves.push(Move::new(from, two));
            }
        }
    }

    // Captures
    for dc in [-1i32, 1] {
        let target = match from.offset(dir, dc) {
            Some(sq) => sq,
            None => continue,
        };
        if board.is_color(target, color.opposite()) {
            push_pawn_move(from, target, color, moves);
        } else if state.en_passant_target == Some(target) && target.row == en_passant_row(color) {
            moves.push(Move::en_passant(from, target));
        }
    }
}

fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i32, i32)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if !board.is_color(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i32, i32)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut next = from.offset(dr, dc);
        while let Some(to) = next {
            if let Some(p) = board.get(to) {
                if p.color != color {
                    moves.push(Move::new(from, to));
                }
                break;
            }
            moves.push(Move::new(from, to));
            next = to.offset(dr, dc);
        }
    }
}

/// Castling candidates: rights intact, path empty, rook on its corner.
/// Safety (check, attacked transit squares) is left to [`get_legal_moves`].
fn generate_castling_moves(state: &GameState, from: Square, color: Color, moves: &mut Vec<Move>) {
    let board = &state.board;
    let row = color.home_row();
    if from != Square::new(row, 4) {
        return;
    }
    let rook_on = |file: usize| {
        board
            .get(Square::new(row, file))
            .map(|p| p.piece_type == PieceType::Rook && p.color == color)
            .unwrap_or(false)
    };
    let clear = |files: &[usize]| files.iter().all(|&f| board.is_empty(Square::new(row, f)));

    if state.castling.kingside(color) && clear(&[5, 6]) && rook_on(7) {
        moves.push(Move::castling(from, Square::new(row, 6)));
    }
    if state.castling.queenside(color) && clear(&[1, 2, 3]) && rook_on(0) {
        moves.push(Move::castling(from, Square::new(row, 2)));
    }
}

/// The king may not castle out of, through, or into check.
fn castling_is_safe(board: &Board, m: &Move, color: Color) -> bool {
    let enemy = color.opposite();
    let transit = Square::new(m.from.row, (m.from.file + m.to.file) / 2);
    !board.is_in_check(color)
        && !board.is_square_attacked_by(transit, enemy)
        && !board.is_square_attacked_by(m.to, enemy)
}

/// Play the move on a scratch board and see whether the mover's king survives.
fn leaves_king_safe(state: &GameState, m: &Move, color: Color) -> bool {
    relocate(&state.board, m, state.en_passant_target)
        .map(|r| !r.board.is_in_check(color))
        .unwrap_or(false)
}

/// Legal moves for the piece on `from`. An empty square yields no moves.
pub fn get_legal_moves(state: &GameState, from: Square) -> Vec<Move> {
    let color = match state.board.get(from) {
        Some(p) => p.color,
        None => return Vec::new(),
    };
    get_pseudo_legal_moves(state, from)
        .into_iter()
        .filter(|m| !m.is_castling || castling_is_safe(&state.board, m, color))
        .filter(|m| leaves_king_safe(state, m, color))
        .collect()
}

/// Every legal move for `color`, scanning the board row by row, then file by file.
pub fn get_all_legal_moves(state: &GameState, color: Color) -> Vec<Move> {
    state
        .board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .flat_map(|(sq, _)| get_legal_moves(state, sq))
        .collect()
}
