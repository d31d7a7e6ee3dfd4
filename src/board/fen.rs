//! Forsyth-Edwards Notation reading and writing.
//!
//! A FEN record has six space-separated fields:
//! `<placement> <side> <castling> <en passant> <halfmove clock> <fullmove number>`,
//! e.g. `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1`.
//! Placement lists rank 8 first; the position stores rank 1 first.

use std::str::FromStr;

use super::error::FenError;
use super::state::Position;
use super::types::{CastlingRights, Colour, PieceCode, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// # Example
    /// ```
    /// use bitboard_chess::board::{Colour, Position, Square};
    ///
    /// let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
    /// assert_eq!(pos.side_to_move(), Colour::Black);
    /// assert_eq!(pos.en_passant_target(), Some(Square::E3));
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::FieldCount {
                found: fields.len(),
            });
        }

        let mut position = Position::empty();
        parse_placement(fields[0], &mut position)?;
        position.side_to_move = parse_side_to_move(fields[1])?;
        position.castling = parse_castling(fields[2])?;
        position.en_passant_target = parse_en_passant(fields[3])?;
        position.halfmove_clock =
            fields[4]
                .parse()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: fields[4].to_string(),
                })?;
        position.fullmove_number =
            fields[5]
                .parse()
                .map_err(|_| FenError::InvalidFullmoveNumber {
                    found: fields[5].to_string(),
                })?;

        log::debug!("parsed FEN '{fen}'");
        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.squares[rank * 8 + file].to_fen_char() {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Colour::White => "w",
            Colour::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling_field(self.castling),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

fn parse_placement(field: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    for (rank, text) in ranks.into_iter().rev().enumerate() {
        let mut file = 0usize;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                file += run as usize;
                continue;
            }
            let piece = PieceCode::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if let Some(sq) = Square::new(rank, file) {
                position.put_piece(sq, piece);
            }
            file += 1;
        }
        if file != 8 {
            return Err(FenError::RankLength {
                rank: rank + 1,
                squares: file,
            });
        }
    }
    Ok(())
}

fn parse_side_to_move(field: &str) -> Result<Colour, FenError> {
    match field {
        "w" => Ok(Colour::White),
        "b" => Ok(Colour::Black),
        other => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}

/// Up to four characters from `KQkq-` in any order; `-` marks no right and
/// may pad the field, letters may not repeat.
fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    if field
        .chars()
        .any(|c| !matches!(c, 'K' | 'Q' | 'k' | 'q' | '-'))
    {
        return Err(invalid());
    }
    if field.len() > 4 {
        return Err(FenError::CastlingTooLong { len: field.len() });
    }

    let mut rights = CastlingRights::none();
    for c in field.chars() {
        let (colour, kingside) = match c {
            'K' => (Colour::White, true),
            'Q' => (Colour::White, false),
            'k' => (Colour::Black, true),
            'q' => (Colour::Black, false),
            _ => continue,
        };
        if rights.has(colour, kingside) {
            return Err(invalid());
        }
        rights.set(colour, kingside);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    field
        .parse::<Square>()
        .map(Some)
        .map_err(|_| FenError::InvalidEnPassant {
            found: field.to_string(),
        })
}

fn castling_field(rights: CastlingRights) -> String {
    let mut field = String::new();
    for (colour, kingside, c) in [
        (Colour::White, true, 'K'),
        (Colour::White, false, 'Q'),
        (Colour::Black, true, 'k'),
        (Colour::Black, false, 'q'),
    ] {
        if rights.has(colour, kingside) {
            field.push(c);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}
