use mnk::board::Player;
use mnk::evaluate::WIN_SCORE;
use mnk::mnk_position;
use mnk::searcher::Searcher;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta 3x3 midgame", |b| b.iter(search_3x3_midgame));
    c.bench_function("alpha beta 4x4 midgame", |b| b.iter(search_4x4_midgame));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_3x3_midgame() {
    let mut board = mnk_position! {
        O . .
        . X .
        . . .
    };
    let mut searcher = Searcher::new(Player::X, 9, true);

    let evaluation = searcher.find_best_move(&mut board).unwrap();
    assert!(evaluation.score > -WIN_SCORE);
}

fn search_4x4_midgame() {
    let mut board = mnk_position! {
        win_length = 3;
        X . . .
        . . . X
        O . . .
        . . O .
    };
    let mut searcher = Searcher::new(Player::X, 5, true);

    let _ = searcher.find_best_move(&mut board).unwrap();
}
