//! A played game: the current position plus snapshots for undo.
//!
//! Moves entering a [`Game`] must be legal for the side to move, so the
//! position always has one king per side and the side not to move is never
//! in check.

use std::fmt;

use crate::board::{Colour, FenError, Move, MoveError, MoveParseError, PieceKind, Position};

/// Error type for setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Unparseable move text
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    /// Well-formed move the position does not allow
    IllegalMove(MoveError),
    /// A side has no king or more than one
    KingCount { colour: Colour, found: u32 },
    /// The side that just moved is in check, so no legal game reaches this
    OpponentInCheck,
    /// Missing required parts in a setup command
    MissingParts,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            GameError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            GameError::IllegalMove(e) => write!(f, "Illegal move: {e}"),
            GameError::KingCount { colour, found } => {
                write!(f, "{colour} must have exactly one king, found {found}")
            }
            GameError::OpponentInCheck => {
                write!(f, "The side not to move is in check")
            }
            GameError::MissingParts => {
                write!(f, "Expected 'startpos' or 'fen <six fields>', optionally followed by 'moves ...'")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<FenError> for GameError {
    fn from(e: FenError) -> Self {
        GameError::InvalidFen(e)
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::IllegalMove(e)
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: Vec<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: Position::start(),
            history: Vec::new(),
        }
    }

    /// Start from an arbitrary position.
    ///
    /// Rejects positions where a side does not have exactly one king, or where
    /// the side not to move is in check.
    pub fn from_position(position: Position) -> Result<Self, GameError> {
        for colour in Colour::BOTH {
            let kings = position.bitboards().get(colour, PieceKind::King);
            if !kings.is_single() {
                return Err(GameError::KingCount {
                    colour,
                    found: kings.popcount(),
                });
            }
        }
        if position.is_in_check(position.side_to_move().opposite()) {
            return Err(GameError::OpponentInCheck);
        }
        Ok(Game {
            position,
            history: Vec::new(),
        })
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Self::from_position(Position::from_fen(fen)?)
    }

    /// Build a game from setup tokens: `startpos` or `fen <six fields>`,
    /// optionally followed by `moves <move1> <move2> ...`.
    pub fn setup(parts: &[&str]) -> Result<Self, GameError> {
        let mut i = 0;
        let mut game = match parts.first() {
            Some(&"startpos") => {
                i += 1;
                Game::new()
            }
            Some(&"fen") => {
                if parts.len() < 7 {
                    return Err(GameError::MissingParts);
                }
                i += 7;
                Game::from_fen(&parts[1..7].join(" "))?
            }
            _ => return Err(GameError::MissingParts),
        };

        match parts.get(i) {
            None => {}
            Some(&"moves") => {
                for move_str in &parts[i + 1..] {
                    game.play_uci(move_str)?;
                }
            }
            Some(_) => return Err(GameError::MissingParts),
        }
        Ok(game)
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Play a legal move, keeping a snapshot for [`Game::undo`].
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.position.validate_legal_move(mv)?;
        self.history.push(self.position.clone());
        self.position.make_move(mv);
        Ok(())
    }

    /// Parse a move in long algebraic form (`e2e4`, `e7e8q`) and play it.
    pub fn play_uci(&mut self, move_str: &str) -> Result<Move, GameError> {
        let mv: Move = move_str.parse().map_err(|error| GameError::InvalidMove {
            move_str: move_str.to_string(),
            error,
        })?;
        self.play(mv)?;
        Ok(mv)
    }

    /// Restore the position before the last move. Returns false when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.position = previous;
                true
            }
            None => false,
        }
    }

    /// Number of moves that can be undone
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_play_and_undo() {
        let mut game = Game::new();
        game.play(Move::new(Square::E2, Square::E4)).unwrap();
        game.play_uci("e7e5").unwrap();
        assert_eq!(game.history_len(), 2);
        assert_eq!(game.position().side_to_move(), Colour::White);

        assert!(game.undo());
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.position().side_to_move(), Colour::Black);
        assert!(game.undo());
        assert_eq!(game.position(), &Position::start());
        assert!(!game.undo());
    }

    #[test]
    fn test_wrong_side_is_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.play(Move::new(Square::E7, Square::E5)),
            Err(MoveError::WrongSide { square: Square::E7 })
        );
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn test_self_check_is_rejected() {
        let mut game = Game::from_fen("7k/7r/8/8/8/8/7Q/7K w - - 0 1").unwrap();
        let mv = Move::new(Square::H2, Square::A2);
        assert_eq!(game.play(mv), Err(MoveError::LeavesKingInCheck { mv }));
        assert!(game.play(Move::new(Square::H2, Square::H3)).is_ok());
    }

    #[test]
    fn test_play_uci_errors() {
        let mut game = Game::new();
        assert!(matches!(
            game.play_uci("e2"),
            Err(GameError::InvalidMove { .. })
        ));
        assert!(matches!(
            game.play_uci("e2e5"),
            Err(GameError::IllegalMove(MoveError::Unreachable { .. }))
        ));
    }

    #[test]
    fn test_setup_commands() {
        let game = Game::setup(&["startpos", "moves", "e2e4", "c7c5", "g1f3"]).unwrap();
        assert_eq!(
            game.position().to_fen(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        assert_eq!(game.history_len(), 3);

        let fen: Vec<&str> = "fen 8/8/8/8/8/8/8/K1k5 w - - 0 1".split(' ').collect();
        let game = Game::setup(&fen).unwrap();
        assert_eq!(game.position().to_fen(), "8/8/8/8/8/8/8/K1k5 w - - 0 1");

        assert_eq!(Game::setup(&[]).unwrap_err(), GameError::MissingParts);
        assert_eq!(
            Game::setup(&["fen", "8/8/8/8/8/8/8/8", "w"]).unwrap_err(),
            GameError::MissingParts
        );
        assert_eq!(
            Game::setup(&["startpos", "e2e4"]).unwrap_err(),
            GameError::MissingParts
        );
    }

    #[test]
    fn test_setup_rejects_bad_positions() {
        assert!(matches!(
            Game::from_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(GameError::KingCount { colour: Colour::White, found: 0 })
        ));
        assert!(matches!(
            Game::from_fen("k7/8/8/8/8/8/8/QK6 w - - 0 1"),
            Err(GameError::OpponentInCheck)
        ));
        assert!(matches!(
            Game::from_fen("not a fen"),
            Err(GameError::InvalidFen(FenError::FieldCount { found: 3 }))
        ));
    }
}
