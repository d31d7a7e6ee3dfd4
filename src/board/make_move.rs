//! Pseudo-legal move validation and in-place application.
//!
//! A move is pseudo-legal when the piece on the source square can reach the
//! destination by its movement pattern and the destination does not hold a
//! piece of the same colour. Side to move, self-check, castling and en
//! passant captures are not considered here; [`Position::is_legal_move`] adds
//! the first two on top.

use super::attacks::{attacks_of, pawn_attacks, pawn_pushes};
use super::error::MoveError;
use super::state::Position;
use super::types::{Bitboard, Colour, Move, PieceCode, PieceKind, Square};

/// Rook home squares and the castling right each one guards.
const ROOK_CORNERS: [(Square, Colour, bool); 4] = [
    (Square::H1, Colour::White, true),
    (Square::A1, Colour::White, false),
    (Square::H8, Colour::Black, true),
    (Square::A8, Colour::Black, false),
];

impl Position {
    /// Squares the piece on `sq` may move to, ignoring whose turn it is.
    ///
    /// Pawns capture diagonally only onto enemy pieces and push forward only
    /// into empty squares. Every other kind moves onto the squares it attacks,
    /// minus its own side's pieces. An empty square has no targets.
    #[must_use]
    pub fn move_targets(&self, sq: Square) -> Bitboard {
        let piece = self.piece_at(sq);
        let origin = sq.bit();
        let empty = self.bitboards.empty();
        match piece.kind() {
            PieceKind::None => Bitboard::EMPTY,
            PieceKind::WhitePawn | PieceKind::BlackPawn => {
                let colour = piece.colour();
                let enemies = self.occupancy(colour.opposite());
                (pawn_attacks(colour, origin) & enemies) | pawn_pushes(colour, origin, empty)
            }
            kind @ (PieceKind::Knight
            | PieceKind::Bishop
            | PieceKind::Rook
            | PieceKind::Queen
            | PieceKind::King) => {
                attacks_of(kind, origin, empty) & !self.occupancy(piece.colour())
            }
        }
    }

    /// Check that `mv` is pseudo-legal, naming the first rule it breaks.
    pub fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        let mover = self.piece_at(mv.from);
        if mover.is_empty() {
            return Err(MoveError::EmptySource { square: mv.from });
        }
        if self.piece_at(mv.to).is_colour(mover.colour()) {
            return Err(MoveError::OwnPieceCapture { square: mv.to });
        }
        if !self.move_targets(mv.from).contains(mv.to) {
            return Err(MoveError::Unreachable { mv });
        }

        let promotes =
            mover.kind().is_pawn() && mv.to.rank() == mover.colour().promotion_rank();
        match mv.promotion {
            None if promotes => Err(MoveError::InvalidPromotion { mv }),
            Some(kind) if !promotes || !PieceKind::PROMOTIONS.contains(&kind) => {
                Err(MoveError::InvalidPromotion { mv })
            }
            _ => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Apply a pseudo-legal move in place.
    ///
    /// The caller must have validated `mv`; debug builds assert it.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.is_valid_move(mv), "make_move called with invalid move {mv}");

        let mover = self.piece_at(mv.from);
        let captured = self.piece_at(mv.to);
        let colour = mover.colour();

        self.take_piece(mv.from);
        self.take_piece(mv.to);
        let placed = mv
            .promotion
            .map_or(mover, |kind| PieceCode::new(colour, kind));
        self.put_piece(mv.to, placed);

        self.revoke_castling(mv, mover, captured);

        let double_push = mover.kind().is_pawn() && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        self.en_passant_target = if double_push {
            Square::new((mv.from.rank() + mv.to.rank()) / 2, mv.from.file())
        } else {
            None
        };
        if let Some(target) = self.en_passant_target {
            log::trace!("en passant target set to {target}");
        }

        if mover.kind().is_pawn() || !captured.is_empty() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if colour == Colour::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();

        log::debug!("applied {mv}");
    }

    /// Validate `mv` and apply it when it is pseudo-legal.
    pub fn try_make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Err(err) = self.validate_move(mv) {
            log::debug!("rejected move {mv}: {err}");
            return Err(err);
        }
        self.make_move(mv);
        Ok(())
    }

    /// The position after `mv`, leaving `self` untouched.
    pub fn apply_move(&self, mv: Move) -> Result<Position, MoveError> {
        let mut next = self.clone();
        next.try_make_move(mv)?;
        Ok(next)
    }

    /// Pseudo-legal, played by the side to move, and not leaving that side's
    /// king attacked.
    ///
    /// # Panics
    /// Panics if the mover's side does not have exactly one king.
    pub fn validate_legal_move(&self, mv: Move) -> Result<(), MoveError> {
        let mover = self.piece_at(mv.from);
        if !mover.is_empty() && !mover.is_colour(self.side_to_move) {
            return Err(MoveError::WrongSide { square: mv.from });
        }
        self.validate_move(mv)?;

        let mut next = self.clone();
        next.make_move(mv);
        if next.is_in_check(mover.colour()) {
            return Err(MoveError::LeavesKingInCheck { mv });
        }
        Ok(())
    }

    /// # Panics
    /// Panics if the mover's side does not have exactly one king.
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.validate_legal_move(mv).is_ok()
    }

    /// Every pseudo-legal move of the side to move. A pawn reaching its last
    /// rank yields one move per promotion kind.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let colour = self.side_to_move;
        let mut moves = Vec::new();
        for from in self.occupancy(colour) {
            let is_pawn = self.piece_at(from).kind().is_pawn();
            for to in self.move_targets(from) {
                if is_pawn && to.rank() == colour.promotion_rank() {
                    moves.extend(
                        PieceKind::PROMOTIONS
                            .iter()
                            .map(|&kind| Move::with_promotion(from, to, kind)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    fn revoke_castling(&mut self, mv: Move, mover: PieceCode, captured: PieceCode) {
        let before = self.castling;
        if mover.kind() == PieceKind::King {
            self.castling.remove_all(mover.colour());
        }
        for (corner, colour, kingside) in ROOK_CORNERS {
            let rook = PieceCode::new(colour, PieceKind::Rook);
            let leaves = mv.from == corner && mover == rook;
            let taken = mv.to == corner && captured == rook;
            if leaves || taken {
                self.castling.remove(colour, kingside);
            }
        }
        if self.castling != before {
            log::trace!("castling rights {:?} -> {:?}", before, self.castling);
        }
    }
}
