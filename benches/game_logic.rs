use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSession, SessionConfig};
use blockfall::types::{PieceKind, RotationDirection};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default());
    let mut now = 0u64;

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            session.tick(black_box(now));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, PieceKind::I.color_id());
                }
            }
            black_box(board.sweep());
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default());

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(session.spawn());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default());
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !session.move_piece(black_box(dx)) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default());
    session.soft_drop();
    session.soft_drop();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            session.rotate(black_box(RotationDirection::Clockwise));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
