use serde::{Deserialize, Serialize};

use crate::piece::PieceType;
use crate::square::Square;

/// A move request. The optional flags are only set when they carry meaning:
/// `promotion` on far-rank pawn moves, `is_en_passant` / `is_castling` on the
/// corresponding special moves.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceType>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_en_passant: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_castling: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_en_passant: false,
            is_castling: false,
        }
    }

    pub fn promoting(from: Square, to: Square, piece_type: PieceType) -> Self {
        Move {
            promotion: Some(piece_type),
            ..Move::new(from, to)
        }
    }

    pub fn en_passant(from: Square, to: Square) -> Self {
        Move {
            is_en_passant: true,
            ..Move::new(from, to)
        }
    }

    pub fn castling(from: Square, to: Square) -> Self {
        Move {
            is_castling: true,
            ..Move::new(from, to)
        }
    }

    /// Convert to UCI notation, e.g. "e2e4", "a7a8q"
    pub fn to_uci(&self) -> String {
        let promo = match self.promotion {
            Some(PieceType::Queen) => "q",
            Some(PieceType::Rook) => "r",
            Some(PieceType::Bishop) => "b",
            Some(PieceType::Knight) => "n",
            _ => "",
        };
        format!("{}{}{promo}", self.from, self.to)
    }

    /// Parse from UCI notation. Special-move flags are left unset; the move
    /// applier infers them from the position.
    pub fn from_uci(s: &str) -> Option<Move> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promotion = match s.as_bytes().get(4) {
            Some(b'q') => Some(PieceType::Queen),
            Some(b'r') => Some(PieceType::Rook),
            Some(b'b') => Some(PieceType::Bishop),
            Some(b'n') => Some(PieceType::Knight),
            Some(_) => return None,
            None => None,
        };
        Some(Move {
            promotion,
            ..Move::new(from, to)
        })
    }
}
