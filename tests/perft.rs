//! Move generator validation against the published perft reference counts.

mod common;

use chess_rules::{create_initial_state, perft};
use common::position;

#[test]
fn perft_startpos() {
    let state = create_initial_state();
    assert_eq!(perft(&state, 1), 20);
    assert_eq!(perft(&state, 2), 400);
    assert_eq!(perft(&state, 3), 8_902);
}

#[test]
fn perft_kiwipete() {
    let state = position(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        'w',
        "KQkq",
        None,
    );
    assert_eq!(perft(&state, 1), 48);
    assert_eq!(perft(&state, 2), 2_039);
}

#[test]
fn perft_position_3() {
    // Rook and pawn endgame full of en-passant pins.
    let state = position("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", 'w', "-", None);
    assert_eq!(perft(&state, 1), 14);
    assert_eq!(perft(&state, 2), 191);
    assert_eq!(perft(&state, 3), 2_812);
}

#[test]
fn perft_position_4() {
    // Promotions, underpromotions and castling out of a cramped king.
    let state = position(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
        'w',
        "kq",
        None,
    );
    assert_eq!(perft(&state, 1), 6);
    assert_eq!(perft(&state, 2), 264);
    assert_eq!(perft(&state, 3), 9_467);
}

#[test]
fn perft_position_5() {
    let state = position(
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
        'w',
        "KQ",
        None,
    );
    assert_eq!(perft(&state, 1), 44);
    assert_eq!(perft(&state, 2), 1_486);
}
