//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use bitboard_chess::board::{Colour, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Colour::White, PieceKind::King)
//!     .piece(Square::E8, Colour::Black, PieceKind::King)
//!     .piece(Square::A2, Colour::White, PieceKind::WhitePawn)
//!     .side_to_move(Colour::White)
//!     .build();
//! assert!(position.is_consistent());
//! ```

use super::state::Position;
use super::types::{CastlingRights, Colour, PieceCode, PieceKind, Square};

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    squares: [PieceCode; 64],
    side_to_move: Colour,
    castling: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            squares: [PieceCode::EMPTY; 64],
            side_to_move: Colour::White,
            castling: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_position(&Position::start())
    }

    /// Create a builder holding every piece and state field of `position`.
    #[must_use]
    pub fn from_position(position: &Position) -> Self {
        PositionBuilder {
            squares: *position.squares(),
            side_to_move: position.side_to_move(),
            castling: position.castling_rights(),
            en_passant_target: position.en_passant_target(),
            halfmove_clock: position.halfmove_clock(),
            fullmove_number: position.fullmove_number(),
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    ///
    /// # Panics
    /// Panics if `kind` cannot belong to `colour` (kind `None`, or the other
    /// colour's pawn).
    #[must_use]
    pub fn piece(mut self, square: Square, colour: Colour, kind: PieceKind) -> Self {
        assert!(kind.belongs_to(colour), "{colour} cannot own a {kind:?}");
        self.squares[square.index()] = PieceCode::new(colour, kind);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.squares[square.index()] = PieceCode::EMPTY;
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, colour: Colour) -> Self {
        self.side_to_move = colour;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, colour: Colour, kingside: bool) -> Self {
        self.castling.set(colour, kingside);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for sq in Square::all() {
            let piece = self.squares[sq.index()];
            if !piece.is_empty() {
                position.put_piece(sq, piece);
            }
        }
        position.side_to_move = self.side_to_move;
        position.castling = self.castling;
        position.en_passant_target = self.en_passant_target;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number;
        position
    }
}
