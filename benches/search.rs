use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pursuit_search::eval::BetterEvaluation;
use pursuit_search::games::grid::GridState;
use pursuit_search::search::{AlphaBetaSearch, ExpectimaxSearch, MinimaxSearch, SearchConfig};

const MAZE: &str = "\
%%%%%%%%%%
%P.  .  o%
%.%%.%%%.%
%.  G  ..%
%%%.%%.%.%
%o.   . G%
%%%%%%%%%%";

pub fn criterion_benchmark(c: &mut Criterion) {
    let state = GridState::parse(MAZE).unwrap();
    let config = SearchConfig::default().with_max_depth(2);
    let mut g = c.benchmark_group("Depth 2");

    g.bench_function("Minimax", |b| {
        let mut search = MinimaxSearch::with_evaluator(BetterEvaluation::default(), config.clone());
        b.iter(|| search.decide(black_box(&state)))
    });

    g.bench_function("Alpha-Beta", |b| {
        let mut search =
            AlphaBetaSearch::with_evaluator(BetterEvaluation::default(), config.clone());
        b.iter(|| search.decide(black_box(&state)))
    });

    g.bench_function("Expectimax", |b| {
        let mut search =
            ExpectimaxSearch::with_evaluator(BetterEvaluation::default(), config.clone());
        b.iter(|| search.decide(black_box(&state)))
    });

    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
