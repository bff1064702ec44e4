use chess_rules::{apply_move, create_initial_state, get_all_legal_moves, get_game_status, GameStatus};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

const DEFAULT_GAMES: usize = 10;
const DEFAULT_SEED: u64 = 1;
const DEFAULT_MAX_PLIES: usize = 400;

/// Knobs for a batch of random playouts. Positional arguments override the
/// defaults: `selfplay [games] [seed] [max_plies]`.
#[derive(Clone, Debug)]
struct PlayoutConfig {
    games: usize,
    seed: u64,
    max_plies: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            games: DEFAULT_GAMES,
            seed: DEFAULT_SEED,
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl PlayoutConfig {
    fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = PlayoutConfig::default();
        if let Some(a) = args.first() {
            config.games = a.parse().map_err(|_| format!("bad game count: {a}"))?;
        }
        if let Some(a) = args.get(1) {
            config.seed = a.parse().map_err(|_| format!("bad seed: {a}"))?;
        }
        if let Some(a) = args.get(2) {
            config.max_plies = a.parse().map_err(|_| format!("bad ply limit: {a}"))?;
        }
        Ok(config)
    }
}

#[derive(Serialize, Default)]
struct Summary {
    games: usize,
    white_wins: u32,
    black_wins: u32,
    stalemates: u32,
    fifty_move_draws: u32,
    threefold_claimable: u32,
    unfinished: u32,
    total_plies: usize,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match PlayoutConfig::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: selfplay [games] [seed] [max_plies]");
            std::process::exit(2);
        }
    };

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut summary = Summary {
        games: config.games,
        ..Summary::default()
    };

    for game in 0..config.games {
        let mut state = create_initial_state();
        let mut plies = 0;
        let mut claimable = false;

        let status = loop {
            let report = get_game_status(&state);
            if report.status.is_game_over() || plies >= config.max_plies {
                break report;
            }
            let moves = get_all_legal_moves(&state, state.turn);
            let Some(m) = moves.choose(&mut rng) else {
                break report;
            };
            state = match apply_move(&state, m) {
                Ok(next) => next,
                Err(e) => {
                    eprintln!("game {game}: engine rejected its own move {}: {e}", m.to_uci());
                    std::process::exit(1);
                }
            };
            claimable |= state.threefold_available;
            plies += 1;
        };

        match (status.status, status.winner) {
            (GameStatus::Checkmate, Some(chess_rules::Color::White)) => summary.white_wins += 1,
            (GameStatus::Checkmate, _) => summary.black_wins += 1,
            (GameStatus::Stalemate, _) => summary.stalemates += 1,
            (GameStatus::DrawFiftyMoves, _) => summary.fifty_move_draws += 1,
            _ => summary.unfinished += 1,
        }
        if claimable {
            summary.threefold_claimable += 1;
        }
        summary.total_plies += plies;

        eprintln!(
            "game {game}: {:?} after {plies} plies ({})",
            status.status,
            state.move_history.last().map(String::as_str).unwrap_or("-")
        );
    }

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not encode summary: {e}"),
    }
}
