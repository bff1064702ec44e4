use crate::piece::PieceType;
use crate::square::Square;

/// Contract violations raised by the move applier. Ordinary outcomes such as
/// "no legal moves" are reported through [`crate::status::StatusReport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no piece on {0} to move")]
    EmptySquare(Square),

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceType),

    #[error("square (row {row}, file {file}) is off the board")]
    OffBoard { row: usize, file: usize },
}
