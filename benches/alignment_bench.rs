use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use seqdyn::{
    naive_distance_matrix, Alphabet, CostModelBuilder, CostScheme, DistanceAssembler, DistanceType,
    OptimalMatching, PairwiseDistance, SubstitutionMatrix,
};
use seqdyn_test::TrajectoryGenerator;
use std::hint::black_box;

fn generate_codes(length: usize, k: usize, seed: usize) -> Vec<usize> {
    (0..length).map(|i| (i * 7 + seed * 3 + i / 5) % k).collect()
}

fn bench_pairwise_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/pairwise");
    let om = OptimalMatching::new(CostScheme::new(SubstitutionMatrix::interval(8), 7.0).unwrap());

    for length in [10, 50, 100, 500].iter() {
        let s1 = generate_codes(*length, 8, 1);
        let s2 = generate_codes(*length, 8, 2);

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            let mut scratch = Vec::new();
            b.iter(|| om.distance_with(black_box(&s1), black_box(&s2), &mut scratch));
        });
    }

    group.finish();
}

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");
    group.sample_size(20);

    for n in [100, 400].iter() {
        // Low change rate gives the heavy duplication typical of tract trajectories
        let seqs = TrajectoryGenerator::new(6, 6).with_change_rate(0.1).generate(*n, 42);
        let encoded = Alphabet::fit_encode(&seqs).unwrap();
        let model = CostModelBuilder::new()
            .distance_type(DistanceType::Interval)
            .build(&encoded.sequences, encoded.alphabet.k())
            .unwrap();

        group.bench_with_input(BenchmarkId::new("dedup", n), n, |b, _| {
            b.iter(|| {
                DistanceAssembler::new(&model.metric)
                    .assemble(black_box(&model.sequences))
                    .unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("naive", n), n, |b, _| {
            b.iter(|| naive_distance_matrix(&model.metric, black_box(&model.sequences)).unwrap());
        });
    }

    group.finish();
}

fn bench_cost_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_models");
    let seqs = TrajectoryGenerator::new(6, 8).ragged().generate(500, 7);
    let encoded = Alphabet::fit_encode(&seqs).unwrap();

    for dt in [DistanceType::Markov, DistanceType::Tran] {
        group.bench_function(dt.as_str(), |b| {
            b.iter(|| {
                CostModelBuilder::new()
                    .distance_type(dt)
                    .build(black_box(&encoded.sequences), encoded.alphabet.k())
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pairwise_alignment,
    bench_distance_matrix,
    bench_cost_models
);
criterion_main!(benches);
