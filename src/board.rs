use serde::{Deserialize, Serialize};

use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8x8 piece grid. It is a plain `Copy` array, so every state owns its own
/// cells and a transition always starts from a fresh copy.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub squares: [[Option<Piece>; 8]; 8],
}

/// Material totals per side, using [`PieceType::value`].
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct Material {
    pub white: u32,
    pub black: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting placement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(piece_type, Color::Black));
            board.squares[1][file] = Some(Piece::new(PieceType::Pawn, Color::Black));
            board.squares[6][file] = Some(Piece::new(PieceType::Pawn, Color::White));
            board.squares[7][file] = Some(Piece::new(piece_type, Color::White));
        }
        board
    }

    /// The piece on `sq`; off-board squares read as empty.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares
            .get(sq.row)
            .and_then(|row| row.get(sq.file))
            .copied()
            .flatten()
    }

    /// Place (or clear) a square. Only used while assembling a board that no
    /// state owns yet. Off-board squares are ignored.
    pub fn put(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(cell) = self.squares.get_mut(sq.row).and_then(|row| row.get_mut(sq.file)) {
            *cell = piece;
        }
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Whether `sq` holds a piece of `color`.
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        self.get(sq).map(|p| p.color == color).unwrap_or(false)
    }

    /// All occupied squares in row-major, then file order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |file| {
                self.squares[row][file].map(|p| (Square::new(row, file), p))
            })
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.piece_type == PieceType::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    pub fn calculate_material(&self) -> Material {
        self.pieces()
            .fold(Material::default(), |mut acc, (_, p)| {
                match p.color {
                    Color::White => acc.white += p.piece_type.value(),
                    Color::Black => acc.black += p.piece_type.value(),
                }
                acc
            })
    }
}

/// Material totals for both sides (pawn 1, knight 3, bishop 3, rook 5, queen 9).
pub fn calculate_material(board: &Board) -> Material {
    board.calculate_material()
}
