//! Error types for position parsing and move validation.

use std::fmt;

use super::types::{Move, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly 6 fields
    FieldCount { found: usize },
    /// Piece placement does not have exactly 8 ranks
    RankCount { found: usize },
    /// A rank does not describe exactly 8 squares (rank is 1-8)
    RankLength { rank: usize, squares: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Castling field with unknown, repeated or misplaced characters
    InvalidCastling { found: String },
    /// Castling field longer than 4 characters
    CastlingTooLong { len: usize },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a non-negative integer
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::FieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::RankCount { found } => {
                write!(f, "FEN piece placement must have 8 ranks, found {found}")
            }
            FenError::RankLength { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling rights '{found}'")
            }
            FenError::CastlingTooLong { len } => {
                write!(f, "Castling rights must be 1-4 characters, found {len}")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a move was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the source square
    EmptySource { square: Square },
    /// The destination holds a piece of the mover's colour
    OwnPieceCapture { square: Square },
    /// The piece cannot reach the destination
    Unreachable { mv: Move },
    /// Promotion missing, misplaced or to a kind that cannot be promoted to
    InvalidPromotion { mv: Move },
    /// The piece does not belong to the side to move
    WrongSide { square: Square },
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => write!(f, "No piece on {square}"),
            MoveError::OwnPieceCapture { square } => {
                write!(f, "Cannot capture own piece on {square}")
            }
            MoveError::Unreachable { mv } => write!(f, "Piece cannot move {mv}"),
            MoveError::InvalidPromotion { mv } => write!(f, "Invalid promotion in {mv}"),
            MoveError::WrongSide { square } => {
                write!(f, "Piece on {square} does not belong to the side to move")
            }
            MoveError::LeavesKingInCheck { mv } => {
                write!(f, "Move {mv} leaves the king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_field_count() {
        let err = FenError::FieldCount { found: 7 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_names_offending_input() {
        let err = FenError::InvalidCastling {
            found: "KXq".to_string(),
        };
        assert!(err.to_string().contains("'KXq'"));
        let err = FenError::InvalidEnPassant {
            found: "e33".to_string(),
        };
        assert!(err.to_string().contains("'e33'"));
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_rank_length() {
        let err = FenError::RankLength { rank: 3, squares: 9 };
        assert!(err.to_string().contains("Rank 3"));
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::EmptySource { square: Square::E4 };
        assert!(err.to_string().contains("e4"));
        let err = MoveError::Unreachable {
            mv: Move::new(Square::E2, Square::E5),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
