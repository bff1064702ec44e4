use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A board coordinate. Row 0 is black's back rank (rank 8), file 0 is the a-file.
///
/// Deserialization rejects coordinates off the board. Values built directly
/// through the public fields are not checked; every query treats an off-board
/// square as empty and unattacked.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    pub row: usize,
    pub file: usize,
}

#[derive(Deserialize)]
struct RawSquare {
    row: usize,
    file: usize,
}

impl TryFrom<RawSquare> for Square {
    type Error = EngineError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::checked(raw.row, raw.file).ok_or(EngineError::OffBoard {
            row: raw.row,
            file: raw.file,
        })
    }
}

impl Square {
    pub fn new(row: usize, file: usize) -> Self {
        Square { row, file }
    }

    /// `Some` only for coordinates on the board.
    pub fn checked(row: usize, file: usize) -> Option<Square> {
        if row < 8 && file < 8 {
            Some(Square { row, file })
        } else {
            None
        }
    }

    pub fn is_on_board(self) -> bool {
        self.row < 8 && self.file < 8
    }

    fn in_bounds(row: i32, file: i32) -> bool {
        (0..8).contains(&row) && (0..8).contains(&file)
    }

    /// Step by a (row, file) delta, or `None` when that leaves the board.
    pub fn offset(self, dr: i32, df: i32) -> Option<Square> {
        if !self.is_on_board() {
            return None;
        }
        let r = self.row as i32 + dr;
        let f = self.file as i32 + df;
        if Self::in_bounds(r, f) {
            Some(Square::new(r as usize, f as usize))
        } else {
            None
        }
    }

    pub fn file_char(self) -> char {
        if self.file < 8 {
            (b'a' + self.file as u8) as char
        } else {
            '?'
        }
    }

    pub fn rank_char(self) -> char {
        if self.row < 8 {
            (b'8' - self.row as u8) as char
        } else {
            '?'
        }
    }

    /// Convert to algebraic form, e.g. `{row: 6, file: 4}` -> "e2".
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Parse algebraic form ("e2"). Returns `None` for anything off the board.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (f, r) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square::new((b'8' - r) as usize, (f - b'a') as usize))
    }

    /// Index 0..64 in row-major order, used for hashing tables.
    pub fn index(self) -> usize {
        self.row * 8 + self.file
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
