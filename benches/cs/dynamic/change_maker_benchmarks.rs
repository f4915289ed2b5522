use changemaker::{count_change_ways, ChangeMaker, CombinationGraph, ReachabilityTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const US_COINS: [i64; 4] = [25, 10, 5, 1];

fn bench_us_coins(c: &mut Criterion) {
    let maker = ChangeMaker::new(&US_COINS).unwrap();
    let mut group = c.benchmark_group("us_coins");

    for amount in [50_i64, 100, 200] {
        group.bench_with_input(BenchmarkId::new("change", amount), &amount, |b, &amount| {
            b.iter(|| maker.change(black_box(amount)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("count_change", amount),
            &amount,
            |b, &amount| b.iter(|| maker.count_change(black_box(amount)).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("reference", amount),
            &amount,
            |b, &amount| b.iter(|| count_change_ways(&[1, 5, 10, 25], black_box(amount as usize))),
        );
    }

    group.finish();
}

fn bench_dense_denominations(c: &mut Criterion) {
    let coins: Vec<i64> = (1..=19).collect();
    let maker = ChangeMaker::new(&coins).unwrap();
    let mut group = c.benchmark_group("one_to_nineteen");

    group.bench_function("change_20", |b| b.iter(|| maker.change(black_box(20)).unwrap()));
    group.bench_function("count_change_20", |b| {
        b.iter(|| maker.count_change(black_box(20)).unwrap())
    });
    group.bench_function("build_graph_20", |b| {
        let table = maker.table(20).unwrap();
        b.iter(|| CombinationGraph::build(black_box(&table)))
    });
    group.bench_function("build_table_20", |b| {
        b.iter(|| ReachabilityTable::build(maker.denominations(), black_box(20)))
    });

    group.finish();
}

criterion_group!(benches, bench_us_coins, bench_dense_denominations);
criterion_main!(benches);
