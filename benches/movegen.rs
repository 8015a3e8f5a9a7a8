use animal_game::{Color, Game, GameBuilder, Square, Variant};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

/// A busy middlegame-like position.
fn middlegame() -> Game {
    GameBuilder::standard()
        .remove(sq("b1"))
        .piece(sq("d4"), Color::Tangerine, Variant::Marmoset)
        .remove(sq("f7"))
        .piece(sq("c5"), Color::Amethyst, Variant::Marmoset)
        .remove(sq("d1"))
        .piece(sq("d3"), Color::Tangerine, Variant::Chinchilla)
        .build()
}

fn bench_legal_moves(c: &mut Criterion) {
    let opening = Game::new();
    let middle = middlegame();

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| black_box(&opening).legal_moves())
    });
    c.bench_function("legal_moves_middlegame", |b| {
        b.iter(|| black_box(&middle).legal_moves())
    });
}

fn bench_make_move(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("make_move_clone_and_apply", |b| {
        b.iter(|| {
            let mut g = game.clone();
            black_box(g.make_move(black_box("b1"), black_box("e4")))
        })
    });
    c.bench_function("make_move_rejected", |b| {
        b.iter(|| {
            let mut g = game.clone();
            black_box(g.make_move(black_box("c1"), black_box("c3")))
        })
    });
}

criterion_group!(benches, bench_legal_moves, bench_make_move);
criterion_main!(benches);
