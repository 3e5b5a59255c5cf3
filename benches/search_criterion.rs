use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use capture_chess::game_state::game_state::GameState;
use capture_chess::search::board_scoring::PositionalScorer;
use capture_chess::search::minimax::{minimax_search, SearchConfig};

const POSITIONS: &[(&str, &str)] = &[
    ("start", "rnbkqbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBKQBNR w"),
    ("open_center", "r1bkqb1r/ppp2ppp/2n2n2/3pp3/3PP3/2N2N2/PPP2PPP/R1BKQB1R w"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark position should parse");
        for depth in [2u8, 3] {
            let config = SearchConfig {
                depth,
                ..SearchConfig::default()
            };
            let first = minimax_search(&game, &PositionalScorer, &config);
            assert!(first.best_move.is_some(), "{name} should have a move");

            group.bench_with_input(BenchmarkId::new(*name, depth), &config, |b, config| {
                b.iter(|| black_box(minimax_search(black_box(&game), &PositionalScorer, config)));
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
