use std::fmt;

use once_cell::sync::Lazy;

use super::bitboards::BitboardSet;
use super::types::{Bitboard, CastlingRights, Colour, PieceCode, PieceKind, Square};

static START_POSITION: Lazy<Position> = Lazy::new(|| {
    let mut position = Position::empty();
    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (file, kind) in back_rank.into_iter().enumerate() {
        position.put_piece(Square::A1.offset(file), PieceCode::new(Colour::White, kind));
        position.put_piece(Square::A8.offset(file), PieceCode::new(Colour::Black, kind));
        position.put_piece(
            Square::A2.offset(file),
            PieceCode::new(Colour::White, PieceKind::WhitePawn),
        );
        position.put_piece(
            Square::A7.offset(file),
            PieceCode::new(Colour::Black, PieceKind::BlackPawn),
        );
    }
    position.castling = CastlingRights::all();
    position
});

/// A chess position: piece bitboards mirrored by a per-square occupant array,
/// plus the side to move, clocks, en passant target and castling rights.
///
/// The bitboards and the occupant array always agree; every mutation goes
/// through [`Position::put_piece`] / [`Position::take_piece`], which update
/// both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) bitboards: BitboardSet,
    pub(crate) squares: [PieceCode; 64],
    pub(crate) side_to_move: Colour,
    pub(crate) fullmove_number: u32,
    pub(crate) halfmove_clock: u32,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling: CastlingRights,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn start() -> Self {
        START_POSITION.clone()
    }

    /// An empty board, White to move, move 1.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            bitboards: BitboardSet::new(),
            squares: [PieceCode::EMPTY; 64],
            side_to_move: Colour::White,
            fullmove_number: 1,
            halfmove_clock: 0,
            en_passant_target: None,
            castling: CastlingRights::none(),
        }
    }

    pub fn bitboards(&self) -> &BitboardSet {
        &self.bitboards
    }

    /// Occupant of every square, a1 first
    pub fn squares(&self) -> &[PieceCode; 64] {
        &self.squares
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> PieceCode {
        self.squares[sq.index()]
    }

    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn occupancy(&self, colour: Colour) -> Bitboard {
        self.bitboards.occupancy(colour)
    }

    /// Every square `colour` attacks
    #[inline]
    pub fn attacks(&self, colour: Colour) -> Bitboard {
        self.bitboards.attacks(colour)
    }

    #[inline]
    pub fn is_square_attacked(&self, sq: Square, colour: Colour) -> bool {
        self.bitboards.is_square_attacked(sq, colour)
    }

    /// # Panics
    /// Panics if `colour` does not have exactly one king.
    #[inline]
    pub fn is_in_check(&self, colour: Colour) -> bool {
        self.bitboards.is_in_check(colour)
    }

    /// Place `piece` on an empty square.
    pub(crate) fn put_piece(&mut self, sq: Square, piece: PieceCode) {
        debug_assert!(self.squares[sq.index()].is_empty(), "{sq} is occupied");
        self.squares[sq.index()] = piece;
        self.bitboards.add(sq, piece);
    }

    /// Remove and return whatever stands on `sq`.
    pub(crate) fn take_piece(&mut self, sq: Square) -> PieceCode {
        let piece = std::mem::take(&mut self.squares[sq.index()]);
        self.bitboards.remove(sq, piece);
        piece
    }

    /// Whether the occupant array and the bitboards describe the same board
    /// and no square is claimed by both colours.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let white = self.bitboards.occupancy(Colour::White);
        let black = self.bitboards.occupancy(Colour::Black);
        if !(white & black).is_empty() {
            return false;
        }
        let mut claimed = Bitboard::EMPTY;
        for colour in Colour::BOTH {
            for kind in PieceKind::owned_by(colour) {
                let mask = self.bitboards.get(colour, kind);
                if !(claimed & mask).is_empty() {
                    return false;
                }
                claimed |= mask;
            }
        }
        Square::all().all(|sq| self.bitboards.piece_at(sq) == self.squares[sq.index()])
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

/// Text diagram, rank 8 at the top, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let piece = self.squares[rank * 8 + file];
                write!(f, " {}", piece.to_fen_char().unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_masks() {
        let pos = Position::start();
        let bb = pos.bitboards();
        assert_eq!(bb.get(Colour::White, PieceKind::WhitePawn), Bitboard(0x000000000000FF00));
        assert_eq!(bb.get(Colour::White, PieceKind::Knight), Bitboard(0x0000000000000042));
        assert_eq!(bb.get(Colour::White, PieceKind::Bishop), Bitboard(0x0000000000000024));
        assert_eq!(bb.get(Colour::White, PieceKind::Rook), Bitboard(0x0000000000000081));
        assert_eq!(bb.get(Colour::White, PieceKind::Queen), Bitboard(0x0000000000000008));
        assert_eq!(bb.get(Colour::White, PieceKind::King), Bitboard(0x0000000000000010));
        assert_eq!(bb.get(Colour::Black, PieceKind::BlackPawn), Bitboard(0x00FF000000000000));
        assert_eq!(bb.get(Colour::Black, PieceKind::Knight), Bitboard(0x4200000000000000));
        assert_eq!(bb.get(Colour::Black, PieceKind::Bishop), Bitboard(0x2400000000000000));
        assert_eq!(bb.get(Colour::Black, PieceKind::Rook), Bitboard(0x8100000000000000));
        assert_eq!(bb.get(Colour::Black, PieceKind::Queen), Bitboard(0x0800000000000000));
        assert_eq!(bb.get(Colour::Black, PieceKind::King), Bitboard(0x1000000000000000));
        assert!(pos.is_consistent());
    }

    #[test]
    fn test_start_position_state() {
        let pos = Position::start();
        assert_eq!(pos.side_to_move(), Colour::White);
        assert_eq!(pos.fullmove_number(), 1);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.en_passant_target(), None);
        assert_eq!(pos.castling_rights(), CastlingRights::all());
        assert_eq!(
            pos.piece_at(Square::D1),
            PieceCode::new(Colour::White, PieceKind::Queen)
        );
        assert_eq!(
            pos.piece_at(Square::D8),
            PieceCode::new(Colour::Black, PieceKind::Queen)
        );
    }

    #[test]
    fn test_put_and_take_keep_views_in_sync() {
        let mut pos = Position::empty();
        let knight = PieceCode::new(Colour::Black, PieceKind::Knight);
        pos.put_piece(Square::F6, knight);
        assert!(pos.is_consistent());
        assert_eq!(pos.bitboards().get(Colour::Black, PieceKind::Knight), Square::F6.bit());
        assert_eq!(pos.take_piece(Square::F6), knight);
        assert_eq!(pos.take_piece(Square::F6), PieceCode::EMPTY);
        assert!(pos.bitboards().occupied().is_empty());
        assert!(pos.is_consistent());
    }

    #[test]
    fn test_inconsistency_is_detected() {
        let mut pos = Position::start();
        pos.squares[Square::E4.index()] = PieceCode::new(Colour::White, PieceKind::Queen);
        assert!(!pos.is_consistent());
    }

    #[test]
    fn test_display_diagram() {
        let text = Position::start().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[4], "4  . . . . . . . .");
    }
}
