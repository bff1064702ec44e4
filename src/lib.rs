pub mod apply;
pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod piece;
pub mod square;
pub mod state;
pub mod status;
pub mod zobrist;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use apply::apply_move;
pub use attacks::{is_in_check, is_square_attacked};
pub use board::{calculate_material, Board, Material};
pub use error::EngineError;
pub use movegen::{get_all_legal_moves, get_legal_moves, get_pseudo_legal_moves};
pub use moves::Move;
pub use notation::move_notation;
pub use perft::{divide, perft};
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
pub use state::{create_initial_state, CastlingRights, GameState};
pub use status::{get_game_status, has_insufficient_material, GameStatus, StatusReport};
