//! Zobrist keys for repetition counting.
//!
//! The table is drawn once from a fixed seed, so hashes are reproducible
//! across runs and processes. It is read-only after construction.

use std::sync::OnceLock;

use crate::board::Board;
use crate::piece::Color;
use crate::square::Square;
use crate::state::CastlingRights;

const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone)]
pub struct ZobristKeys {
    pieces: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    /// White kingside, white queenside, black kingside, black queenside.
    castling: [u64; 4],
    en_passant_file: [u64; 8],
}

static KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// The process-wide table used by [`crate::state::GameState::position_hash`].
pub fn keys() -> &'static ZobristKeys {
    KEYS.get_or_init(|| ZobristKeys::generate(DEFAULT_SEED))
}

// splitmix64
fn next_random(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl ZobristKeys {
    pub fn generate(seed: u64) -> Self {
        let mut state = seed;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        for color in &mut pieces {
            for piece in color {
                for key in piece {
                    *key = next_random(&mut state);
                }
            }
        }

        let black_to_move = next_random(&mut state);

        let mut castling = [0u64; 4];
        for key in &mut castling {
            *key = next_random(&mut state);
        }

        let mut en_passant_file = [0u64; 8];
        for key in &mut en_passant_file {
            *key = next_random(&mut state);
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant_file,
        }
    }

    /// XOR of the keys for every feature of the position.
    pub fn hash(
        &self,
        board: &Board,
        turn: Color,
        castling: &CastlingRights,
        en_passant_target: Option<Square>,
    ) -> u64 {
        let mut hash = 0u64;
        for (sq, p) in board.pieces() {
            hash ^= self.pieces[p.color.index()][p.piece_type.index()][sq.index()];
        }
        if turn == Color::Black {
            hash ^= self.black_to_move;
        }
        let flags = [
            castling.white_kingside,
            castling.white_queenside,
            castling.black_kingside,
            castling.black_queenside,
        ];
        for (key, &set) in self.castling.iter().zip(flags.iter()) {
            if set {
                hash ^= key;
            }
        }
        if let Some(key) = en_passant_target.and_then(|t| self.en_passant_file.get(t.file)) {
            hash ^= key;
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Piece, PieceType};

    #[test]
    fn same_seed_gives_same_table() {
        let a = ZobristKeys::generate(7);
        let b = ZobristKeys::generate(7);
        let board = Board::standard();
        let rights = CastlingRights::all();
        assert_eq!(
            a.hash(&board, Color::White, &rights, None),
            b.hash(&board, Color::White, &rights, None)
        );
    }

    #[test]
    fn every_feature_changes_the_hash() {
        let k = keys();
        let board = Board::standard();
        let rights = CastlingRights::all();
        let base = k.hash(&board, Color::White, &rights, None);

        assert_ne!(base, k.hash(&board, Color::Black, &rights, None));

        let mut fewer = rights;
        fewer.black_queenside = false;
        assert_ne!(base, k.hash(&board, Color::White, &fewer, None));

        let ep = Some(Square::new(5, 4));
        assert_ne!(base, k.hash(&board, Color::White, &rights, ep));

        let mut moved = board;
        moved.put(Square::new(6, 4), None);
        moved.put(Square::new(4, 4), Some(Piece::new(PieceType::Pawn, Color::White)));
        assert_ne!(base, k.hash(&moved, Color::White, &rights, None));
    }

    #[test]
    fn off_board_en_passant_file_is_ignored() {
        let k = keys();
        let board = Board::standard();
        let rights = CastlingRights::all();
        let outside = Some(Square { row: 2, file: 9 });
        assert_eq!(
            k.hash(&board, Color::White, &rights, outside),
            k.hash(&board, Color::White, &rights, None)
        );
    }

    #[test]
    fn en_passant_is_keyed_by_file_only() {
        let k = keys();
        let board = Board::standard();
        let rights = CastlingRights::none();
        assert_eq!(
            k.hash(&board, Color::White, &rights, Some(Square::new(2, 3))),
            k.hash(&board, Color::White, &rights, Some(Square::new(5, 3)))
        );
    }
}
