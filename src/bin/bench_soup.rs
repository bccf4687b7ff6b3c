use life_history::{random_soup, BoundedScanEngine, Engine, GenerationHistory, SparseEngine};
use std::time::Instant;

const HALF_EXTENT: i64 = 128;
const FILL_RATE: f64 = 0.35;
const SEED: u64 = 42;
const GENERATIONS: usize = 200;

fn bench<E: Engine>(engine: E) {
    let name = engine.name();
    let mut history = GenerationHistory::with_engine(engine);
    history.seed(random_soup(HALF_EXTENT, FILL_RATE, Some(SEED)));
    let initial = history.population();

    let timer = Instant::now();
    let stepped = history.advance_by(GENERATIONS);
    println!(
        "{:>12}: {} generations in {:?} (population {} -> {})",
        name,
        stepped,
        timer.elapsed(),
        initial,
        history.population()
    );

    let timer = Instant::now();
    while history.retreat() {}
    history.advance_by(stepped);
    println!(
        "{:>12}: replay of cached generations in {:?}",
        name,
        timer.elapsed()
    );
}

fn main() {
    bench(SparseEngine);
    bench(BoundedScanEngine);
}
