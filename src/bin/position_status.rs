use std::env;
use std::process;

use chess_ai::board::{search_best_move_with, Position, SearchConfig};

fn usage() -> ! {
    eprintln!("usage: position_status [--search <depth>] [--threads <n>] <move1> <move2> ...");
    process::exit(2);
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    match value.as_deref().map(str::parse) {
        Some(Ok(n)) => n,
        _ => {
            eprintln!("{flag} expects a number");
            usage();
        }
    }
}

fn main() {
    let mut search_depth: Option<u32> = None;
    let mut config = SearchConfig::default();
    let mut moves: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--search" => search_depth = Some(parse_number("--search", args.next())),
            "--threads" => config = config.threads(parse_number("--threads", args.next())),
            "-h" | "--help" => usage(),
            _ => moves.push(arg),
        }
    }

    let mut position = Position::new();
    if let Err(err) = position.play_moves(moves.iter().map(String::as_str)) {
        eprintln!("error: {err}");
        process::exit(1);
    }

    let legal_moves = position.legal_moves();
    println!("fen: {}", position.to_fen());
    println!("side_to_move: {}", position.side_to_move());
    println!("in_check: {}", position.in_check());
    println!("legal_moves: {}", legal_moves.len());
    println!("captures: {}", position.capture_moves().len());
    println!("checkmate: {}", position.is_checkmate());
    println!("stalemate: {}", position.is_stalemate());
    for mv in &legal_moves {
        println!("{mv}");
    }

    if let Some(depth) = search_depth {
        let config = config.depth(depth);
        match search_best_move_with(&position, &legal_moves, &config) {
            Some(best) => println!("best_move: {best}"),
            None => println!("best_move: none"),
        }
        println!("eval: {}", position.evaluate());
    }
}
