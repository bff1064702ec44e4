use crate::apply::apply_move;
use crate::board::Material;
use crate::movegen::get_legal_moves;
use crate::moves::Move;
use crate::piece::{Color, PieceType};
use crate::square::Square;
use crate::state::{create_initial_state, GameState};
use crate::status::{get_game_status, has_insufficient_material, GameStatus};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SquarePiece {
    piece_type: PieceType,
    color: Color,
}

#[derive(Serialize)]
struct BoardView {
    squares: Vec<Vec<Option<SquarePiece>>>,
    turn: Color,
    status: GameStatus,
    winner: Option<Color>,
    is_in_check: bool,
    material: Material,
    move_history: Vec<String>,
    last_move: Option<[[usize; 2]; 2]>,
    threefold_available: bool,
    insufficient_material: bool,
    halfmove_clock: u32,
    fullmove_number: u32,
}

#[derive(Serialize)]
struct MoveError {
    error: String,
}

#[derive(Serialize)]
struct SquareMoveJson {
    to: [usize; 2],
    promotion: Option<PieceType>,
    is_castling: bool,
    is_en_passant: bool,
}

fn string_to_piece_type(s: &str) -> Option<PieceType> {
    match s.to_ascii_lowercase().as_str() {
        "queen" | "q" => Some(PieceType::Queen),
        "rook" | "r" => Some(PieceType::Rook),
        "bishop" | "b" => Some(PieceType::Bishop),
        "knight" | "n" => Some(PieceType::Knight),
        _ => None,
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_value(message: impl Into<String>) -> JsValue {
    to_js(&MoveError {
        error: message.into(),
    })
}

fn build_board_view(state: &GameState) -> BoardView {
    let squares = state
        .board
        .squares
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.map(|p| SquarePiece {
                        piece_type: p.piece_type,
                        color: p.color,
                    })
                })
                .collect()
        })
        .collect();
    let report = get_game_status(state);

    BoardView {
        squares,
        turn: state.turn,
        status: report.status,
        winner: report.winner,
        is_in_check: state.board.is_in_check(state.turn),
        material: state.board.calculate_material(),
        move_history: state.move_history.clone(),
        last_move: state
            .last_move
            .map(|m| [[m.from.row, m.from.file], [m.to.row, m.to.file]]),
        threefold_available: state.threefold_available,
        insufficient_material: has_insufficient_material(&state.board),
        halfmove_clock: state.halfmove_clock,
        fullmove_number: state.fullmove_number,
    }
}

/// Browser-side handle on a game. The UI keeps one of these and re-renders
/// from `get_state()` after every call.
#[wasm_bindgen]
pub struct Game {
    state: GameState,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            state: create_initial_state(),
        }
    }

    pub fn reset(&mut self) {
        self.state = create_initial_state();
    }

    pub fn get_state(&self) -> JsValue {
        to_js(&build_board_view(&self.state))
    }

    pub fn get_legal_moves_for_square(&self, row: usize, file: usize) -> JsValue {
        let Some(from) = Square::checked(row, file) else {
            return to_js(&Vec::<SquareMoveJson>::new());
        };
        let square_moves: Vec<SquareMoveJson> = get_legal_moves(&self.state, from)
            .iter()
            .map(|m| SquareMoveJson {
                to: [m.to.row, m.to.file],
                promotion: m.promotion,
                is_castling: m.is_castling,
                is_en_passant: m.is_en_passant,
            })
            .collect();
        to_js(&square_moves)
    }

    pub fn make_move(
        &mut self,
        from_row: usize,
        from_file: usize,
        to_row: usize,
        to_file: usize,
        promotion: Option<String>,
    ) -> JsValue {
        if get_game_status(&self.state).status.is_game_over() {
            return error_value("Game is already over");
        }
        let (Some(from), Some(to)) = (
            Square::checked(from_row, from_file),
            Square::checked(to_row, to_file),
        ) else {
            return error_value("Square off the board");
        };
        let promo_pt = promotion.as_deref().and_then(string_to_piece_type);

        // Only moves of the side to move, matched against the legal list.
        let mover = self.state.board.get(from).map(|p| p.color);
        if mover != Some(self.state.turn) {
            return error_value("Illegal move");
        }
        let chosen: Option<Move> = get_legal_moves(&self.state, from)
            .into_iter()
            .find(|m| {
                m.to == to
                    && (m.promotion.is_none() || m.promotion == promo_pt.or(Some(PieceType::Queen)))
            });

        match chosen {
            Some(m) => match apply_move(&self.state, &m) {
                Ok(next) => {
                    self.state = next;
                    to_js(&build_board_view(&self.state))
                }
                Err(e) => error_value(e.to_string()),
            },
            None => error_value("Illegal move"),
        }
    }

    /// The full state as JSON text, for saving to local storage. Hash keys
    /// exceed JS number precision, so this goes through serde_json rather
    /// than a JS object.
    pub fn export_state(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the current game with a previously exported state.
    pub fn import_state(&mut self, json: &str) -> Result<(), JsValue> {
        let state: GameState =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.state = state;
        Ok(())
    }

    pub fn build_info(&self) -> String {
        env!("BUILD_TIMESTAMP").to_string()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
