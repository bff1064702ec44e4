use crate::board::Board;
use crate::piece::{Color, PieceType};
use crate::square::Square;
use crate::state::GameState;

pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

pub(crate) const STRAIGHT_DIRS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const DIAGONAL_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    fn has_piece(&self, sq: Square, color: Color, piece_type: PieceType) -> bool {
        self.get(sq)
            .map(|p| p.color == color && p.piece_type == piece_type)
            .unwrap_or(false)
    }

    /// First occupied square along a ray from `from` (exclusive).
    fn first_blocker(&self, from: Square, dr: i32, dc: i32) -> Option<Square> {
        let mut sq = from.offset(dr, dc)?;
        loop {
            if !self.is_empty(sq) {
                return Some(sq);
            }
            sq = sq.offset(dr, dc)?;
        }
    }

    pub fn is_square_attacked_by(&self, target: Square, attacker: Color) -> bool {
        if !target.is_on_board() {
            return false;
        }

        // Check knight attacks
        let by_knight = KNIGHT_OFFSETS.iter().any(|&(dr, dc)| {
            target
                .offset(dr, dc)
                .map(|sq| self.has_piece(sq, attacker, PieceType::Knight))
                .unwrap_or(false)
        });
        if by_knight {
            return true;
        }

        // Check king attacks
        let by_king = KING_OFFSETS.iter().any(|&(dr, dc)| {
            target
                .offset(dr, dc)
                .map(|sq| self.has_piece(sq, attacker, PieceType::King))
                .unwrap_or(false)
        });
        if by_king {
            return true;
        }

        // A pawn on (row - dir, col ± 1) attacks (row, col)
        let pawn_dir = attacker.pawn_direction();
        let by_pawn = [-1i32, 1].iter().any(|&dc| {
            target
                .offset(-pawn_dir, dc)
                .map(|sq| self.has_piece(sq, attacker, PieceType::Pawn))
                .unwrap_or(false)
        });
        if by_pawn {
            return true;
        }

        // Sliding pieces: only the first piece on each ray can attack
        let slides = |dirs: &[(i32, i32)], kind: PieceType| {
            dirs.iter().any(|&(dr, dc)| {
                self.first_blocker(target, dr, dc)
                    .and_then(|sq| self.get(sq))
                    .map(|p| {
                        p.color == attacker
                            && (p.piece_type == kind || p.piece_type == PieceType::Queen)
                    })
                    .unwrap_or(false)
            })
        };
        slides(&STRAIGHT_DIRS, PieceType::Rook) || slides(&DIAGONAL_DIRS, PieceType::Bishop)
    }

    /// Whether `color`'s king is attacked. A board without that king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked_by(king, color.opposite()),
            None => false,
        }
    }
}

pub fn is_square_attacked(state: &GameState, square: Square, by_color: Color) -> bool {
    state.board.is_square_attacked_by(square, by_color)
}

pub fn is_in_check(state: &GameState, color: Color) -> bool {
    state.board.is_in_check(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    fn board_with(pieces: &[(usize, usize, PieceType, Color)]) -> Board {
        let mut board = Board::empty();
        for &(r, c, pt, color) in pieces {
            board.put(Square::new(r, c), Some(Piece::new(pt, color)));
        }
        board
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        // White pawn on e4 attacks d5 and f5, not d3.
        let board = board_with(&[(4, 4, PieceType::Pawn, Color::White)]);
        assert!(board.is_square_attacked_by(Square::new(3, 3), Color::White));
        assert!(board.is_square_attacked_by(Square::new(3, 5), Color::White));
        assert!(!board.is_square_attacked_by(Square::new(5, 3), Color::White));
        assert!(!board.is_square_attacked_by(Square::new(3, 4), Color::White));

        // Black pawn on e5 attacks d4 and f4.
        let board = board_with(&[(3, 4, PieceType::Pawn, Color::Black)]);
        assert!(board.is_square_attacked_by(Square::new(4, 3), Color::Black));
        assert!(!board.is_square_attacked_by(Square::new(2, 3), Color::Black));
    }

    #[test]
    fn off_board_targets_are_never_attacked() {
        let board = board_with(&[(7, 0, PieceType::Rook, Color::White)]);
        assert!(!board.is_square_attacked_by(Square { row: 8, file: 0 }, Color::White));
        assert!(!board.is_square_attacked_by(Square { row: 7, file: 8 }, Color::White));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_piece() {
        let board = board_with(&[
            (7, 0, PieceType::Rook, Color::Black),
            (4, 0, PieceType::Pawn, Color::White),
        ]);
        assert!(board.is_square_attacked_by(Square::new(5, 0), Color::Black));
        assert!(board.is_square_attacked_by(Square::new(4, 0), Color::Black));
        assert!(!board.is_square_attacked_by(Square::new(3, 0), Color::Black));
        assert!(board.is_square_attacked_by(Square::new(7, 7), Color::Black));
    }

    #[test]
    fn ray_geometry_must_match_the_piece() {
        // A rook on a diagonal and a bishop on a file attack nothing along them.
        let board = board_with(&[
            (0, 0, PieceType::Rook, Color::Black),
            (0, 7, PieceType::Bishop, Color::Black),
        ]);
        assert!(!board.is_square_attacked_by(Square::new(3, 3), Color::Black));
        assert!(!board.is_square_attacked_by(Square::new(4, 7), Color::Black));
        assert!(board.is_square_attacked_by(Square::new(3, 4), Color::Black));
    }

    #[test]
    fn knights_and_kings_attack_their_offsets() {
        let board = board_with(&[
            (4, 4, PieceType::Knight, Color::White),
            (0, 0, PieceType::King, Color::Black),
        ]);
        assert!(board.is_square_attacked_by(Square::new(2, 3), Color::White));
        assert!(board.is_square_attacked_by(Square::new(6, 5), Color::White));
        assert!(!board.is_square_attacked_by(Square::new(3, 4), Color::White));
        assert!(board.is_square_attacked_by(Square::new(1, 1), Color::Black));
        assert!(!board.is_square_attacked_by(Square::new(2, 2), Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = board_with(&[(0, 0, PieceType::Queen, Color::Black)]);
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn queen_gives_check_along_a_diagonal() {
        let board = board_with(&[
            (7, 4, PieceType::King, Color::White),
            (4, 1, PieceType::Queen, Color::Black),
        ]);
        assert!(board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }
}
