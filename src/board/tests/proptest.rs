//! Property-based tests using proptest.

use crate::board::{Colour, Move, Position};
use proptest::prelude::*;

/// Strategy to generate a random move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random pseudo-legal moves from the start position,
/// calling `check` after each one.
fn random_walk(
    seed: u64,
    num_moves: usize,
    mut check: impl FnMut(&Position, Move) -> Result<(), TestCaseError>,
) -> Result<(), TestCaseError> {
    use rand::prelude::*;

    let mut position = Position::start();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = position.pseudo_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        position.make_move(mv);
        check(&position, mv)?;
    }
    Ok(())
}

proptest! {
    /// Property: the occupant array and the bitboards always agree
    #[test]
    fn prop_views_stay_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |position, mv| {
            prop_assert!(position.is_consistent(), "inconsistent after {}", mv);
            let white = position.occupancy(Colour::White);
            let black = position.occupancy(Colour::Black);
            prop_assert!((white & black).is_empty());
            Ok(())
        })?;
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |position, _| {
            let fen = position.to_fen();
            let parsed = Position::from_fen(&fen);
            prop_assert!(parsed.is_ok(), "unparseable FEN {}", fen);
            if let Ok(parsed) = parsed {
                prop_assert_eq!(&parsed, position);
                prop_assert_eq!(parsed.to_fen(), fen);
            }
            Ok(())
        })?;
    }

    /// Property: every generated move validates, and lands where it said
    #[test]
    fn prop_generated_moves_are_valid(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut position = Position::start();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = position.pseudo_legal_moves();
            if moves.is_empty() {
                break;
            }
            for &mv in &moves {
                prop_assert!(position.is_valid_move(mv), "generated invalid move {}", mv);
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let mover = position.piece_at(mv.from);
            position.make_move(mv);
            prop_assert!(position.piece_at(mv.from).is_empty());
            prop_assert_eq!(position.piece_at(mv.to).colour(), mover.colour());
        }
    }

    /// Property: a knight's attacks never wrap across the board edge
    #[test]
    fn prop_knight_leaps_stay_close(index in 0usize..64) {
        use crate::board::{attacks::knight_attacks, Square};

        let Some(from) = Square::from_index(index) else {
            return Ok(());
        };
        for to in knight_attacks(from.bit()) {
            let files = from.file().abs_diff(to.file());
            let ranks = from.rank().abs_diff(to.rank());
            prop_assert!(matches!((files, ranks), (1, 2) | (2, 1)), "{} -> {}", from, to);
        }
    }
}
