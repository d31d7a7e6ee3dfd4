//! Move value type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A proposed move: source, destination and an optional promotion kind.
///
/// Castling and en passant captures have no representation here; the
/// validator rejects a king's two-square step and a diagonal pawn step onto
/// an empty square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Create a plain move
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a pawn move that promotes to `kind`
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

/// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(c) = self.promotion.and_then(PieceKind::to_char) {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let invalid_square = |_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(invalid_square)?;
        let to: Square = s[2..4].parse().map_err(invalid_square)?;

        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => {
                let kind = PieceKind::from_char(c)
                    .filter(|kind| PieceKind::PROMOTIONS.contains(kind))
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Ok(Move::with_promotion(from, to, kind))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv, Move::new(Square::E2, Square::E4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_promotion() {
        let mv: Move = "a7a8n".parse().unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        assert_eq!(mv.to_string(), "a7a8n");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            "z9z9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "a7a8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
        assert!(matches!(
            "a7a8p".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        ));
    }
}
