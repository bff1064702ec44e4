use crate::board::Board;
use crate::error::EngineError;
use crate::moves::Move;
use crate::notation::move_notation;
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;
use crate::state::GameState;

/// Result of playing a move on a board copy.
pub(crate) struct Relocation {
    pub board: Board,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// The move with castling / en-passant / promotion flags resolved.
    pub played: Move,
}

/// Play `m` on a copy of `board`: captures (including en passant), the
/// castling rook hop, and promotion. The input board is left untouched.
pub(crate) fn relocate(
    board: &Board,
    m: &Move,
    en_passant_target: Option<Square>,
) -> Result<Relocation, EngineError> {
    let (from, to) = (m.from, m.to);
    for sq in [from, to] {
        if !sq.is_on_board() {
            return Err(EngineError::OffBoard {
                row: sq.row,
                file: sq.file,
            });
        }
    }
    let piece = board.get(from).ok_or(EngineError::EmptySquare(from))?;
    if let Some(pt) = m.promotion {
        if !pt.is_promotion_choice() {
            return Err(EngineError::InvalidPromotion(pt));
        }
    }

    let is_pawn = piece.piece_type == PieceType::Pawn;
    let is_castling = piece.piece_type == PieceType::King
        && (m.is_castling || (from.row == to.row && from.file.abs_diff(to.file) == 2));
    let is_en_passant = is_pawn
        && (m.is_en_passant
            || (from.file != to.file && Some(to) == en_passant_target && board.is_empty(to)));
    let promotion = if is_pawn && to.row == piece.color.opposite().home_row() {
        Some(m.promotion.unwrap_or(PieceType::Queen))
    } else {
        None
    };

    let mut next = *board;

    // The en-passant victim sits beside the mover, on the mover's own row.
    let captured = if is_en_passant {
        let victim = Square::new(from.row, to.file);
        let taken = next.get(victim);
        next.put(victim, None);
        taken
    } else {
        next.get(to)
    };

    // Move the rook
    if is_castling {
        let (rook_from, rook_to) = if to.file > from.file {
            (Square::new(from.row, 7), Square::new(from.row, to.file - 1))
        } else {
            (Square::new(from.row, 0), Square::new(from.row, to.file + 1))
        };
        next.put(rook_to, next.get(rook_from));
        next.put(rook_from, None);
    }

    let placed = match promotion {
        Some(pt) => Piece::new(pt, piece.color),
        None => piece,
    };
    next.put(from, None);
    next.put(to, Some(placed));

    Ok(Relocation {
        board: next,
        piece,
        captured,
        played: Move {
            from,
            to,
            promotion,
            is_en_passant,
            is_castling,
        },
    })
}

/// The rules half of a transition: board, rights, en-passant target, clocks,
/// turn and last move. History and repetition bookkeeping are left as they were.
pub(crate) fn advance(state: &GameState, m: &Move) -> Result<GameState, EngineError> {
    let Relocation {
        board,
        piece,
        captured,
        played,
    } = relocate(&state.board, m, state.en_passant_target)?;
    let (from, to) = (played.from, played.to);
    let is_pawn = piece.piece_type == PieceType::Pawn;

    // Update castling rights
    let mut castling = state.castling;
    if piece.piece_type == PieceType::King {
        castling = castling.without_color(piece.color);
    }
    if piece.piece_type == PieceType::Rook {
        castling = castling.without_corner(from);
    }
    // A rook captured on its corner takes its right with it.
    castling = castling.without_corner(to);

    let en_passant_target = if is_pawn && from.row.abs_diff(to.row) == 2 {
        Some(Square::new((from.row + to.row) / 2, from.file))
    } else {
        None
    };

    let halfmove_clock = if is_pawn || captured.is_some() {
        0
    } else {
        state.halfmove_clock + 1
    };

    let fullmove_number = if state.turn == Color::Black {
        state.fullmove_number + 1
    } else {
        state.fullmove_number
    };

    Ok(GameState {
        board,
        turn: state.turn.opposite(),
        castling,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
        last_move: Some(played),
        move_history: state.move_history.clone(),
        position_counts: state.position_counts.clone(),
        threefold_available: false,
    })
}

/// Apply a move and return the resulting state. The input state is not
/// modified. Legality is the caller's job (see
/// [`crate::movegen::get_legal_moves`]); an empty `from` square is rejected.
pub fn apply_move(state: &GameState, m: &Move) -> Result<GameState, EngineError> {
    let mut next = advance(state, m)?;
    let played = next.last_move.unwrap_or(*m);

    let san = move_notation(state, &played, &next);
    next.move_history.push(san);

    let hash = next.position_hash();
    let seen = next.position_counts.entry(hash).or_insert(0);
    *seen += 1;
    next.threefold_available = *seen >= 3;

    Ok(next)
}
