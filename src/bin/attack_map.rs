use std::env;
use std::process::ExitCode;

use bitboard_chess::board::{Colour, Position};
use bitboard_chess::Game;

/// Normalise command-line words into `Game::setup` tokens. A quoted FEN is
/// split into its fields, no position means `startpos`, and a position that
/// does not start with a keyword is taken as a bare FEN.
fn setup_tokens(args: &[String]) -> Vec<&str> {
    let mut parts: Vec<&str> = args.iter().flat_map(|arg| arg.split_whitespace()).collect();
    match parts.first().copied() {
        None | Some("moves") => parts.insert(0, "startpos"),
        Some("startpos" | "fen") => {}
        Some(_) => parts.insert(0, "fen"),
    }
    parts
}

fn print_side(position: &Position, colour: Colour) {
    println!("{colour} attacks:");
    println!("{}", position.attacks(colour));
    println!("{colour} in check: {}", position.is_in_check(colour));
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let game = match Game::setup(&setup_tokens(&args)) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: attack_map [startpos | [fen] <six fields>] [moves <move1> <move2> ...]");
            return ExitCode::FAILURE;
        }
    };
    let position = game.position();

    println!("{position}");
    println!("fen: {}", position.to_fen());
    println!("side_to_move: {}", position.side_to_move());
    println!("pseudo_legal_moves: {}", position.pseudo_legal_moves().len());
    for colour in Colour::BOTH {
        println!();
        print_side(position, colour);
    }
    ExitCode::SUCCESS
}
