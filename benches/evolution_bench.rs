use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nichevo::base::{Alphabet, Ecosystem, Genome};
use nichevo::evolution::{edit_distance, FitnessEvaluator};
use nichevo::simulation::{Evolution, EvolutionConfig};

fn bench_edit_distance(c: &mut Criterion) {
    let a: Vec<char> = "the quick brown fox jumps over".chars().collect();
    let b: Vec<char> = "a lazy dog sleeps in the shade".chars().collect();

    c.bench_function("edit_distance_30", |bencher| {
        bencher.iter(|| edit_distance(black_box(&a), black_box(&b)))
    });
}

fn bench_individual_fitness(c: &mut Criterion) {
    let ecosystem = Ecosystem::from_str("textual ecosystem to be inhabited simulating environment");
    let evaluator = FitnessEvaluator::new(ecosystem, 30);
    let alphabet = Alphabet::lowercase_with_space();
    let genome = Genome::from_str("textual ecosystem to be inhabi", alphabet).unwrap();

    c.bench_function("individual_fitness_30", |bencher| {
        bencher.iter(|| evaluator.individual_fitness(black_box(&genome)))
    });
}

fn bench_small_run(c: &mut Criterion) {
    c.bench_function("run_abcabc_pop50", |bencher| {
        bencher.iter(|| {
            let config = EvolutionConfig::new("abcabc", "abc", 50, 3, 20, Some(42));
            let mut evolution = Evolution::new(config).unwrap();
            black_box(evolution.run())
        })
    });
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_individual_fitness,
    bench_small_run
);
criterion_main!(benches);
