//! Benchmarks for attack generation and move validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bitboard_chess::board::attacks::{knight_attacks, queen_attacks, rook_attacks};
use bitboard_chess::board::{Colour, Move, Position, Square};

const POSITIONS: [(&str, &str); 3] = [
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "middlegame",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
];

fn bench_attacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");

    for (name, fen) in POSITIONS {
        let Ok(position) = Position::from_fen(fen) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("both_sides", name), &position, |b, pos| {
            b.iter(|| {
                black_box(pos.attacks(Colour::White));
                black_box(pos.attacks(Colour::Black))
            })
        });
        group.bench_with_input(BenchmarkId::new("is_in_check", name), &position, |b, pos| {
            b.iter(|| black_box(pos.is_in_check(Colour::White)))
        });
    }

    let empty = !(Square::D4.bit() | Square::F6.bit());
    group.bench_function("rook_ray_fill", |b| {
        b.iter(|| rook_attacks(black_box(Square::D4.bit()), black_box(empty)))
    });
    group.bench_function("queen_ray_fill", |b| {
        b.iter(|| queen_attacks(black_box(Square::D4.bit()), black_box(empty)))
    });
    group.bench_function("knight_leaps", |b| {
        b.iter(|| knight_attacks(black_box(Square::D4.bit() | Square::G6.bit())))
    });

    group.finish();
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");

    for (name, fen) in POSITIONS {
        let Ok(position) = Position::from_fen(fen) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("pseudo_legal", name), &position, |b, pos| {
            b.iter(|| black_box(pos.pseudo_legal_moves()))
        });
    }

    let start = Position::start();
    let e4 = Move::new(Square::E2, Square::E4);
    group.bench_function("is_valid_move", |b| {
        b.iter(|| start.is_valid_move(black_box(e4)))
    });
    group.bench_function("apply_move", |b| b.iter(|| start.apply_move(black_box(e4))));

    group.finish();
}

fn bench_fen(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");
    for (name, fen) in POSITIONS {
        group.bench_with_input(BenchmarkId::new("parse", name), &fen, |b, fen| {
            b.iter(|| Position::from_fen(black_box(fen)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_attacks, bench_moves, bench_fen);
criterion_main!(benches);
