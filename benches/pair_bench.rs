use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use numscan::{Problem, find_pair};

fn bench_find_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_pair");
    for size in [1_000usize, 100_000] {
        // Only the last two values complete the pair, forcing a full scan.
        let mut sequence: Vec<i64> = (0..size as i64).map(|v| v * 2).collect();
        let target = sequence[size - 1] + sequence[size - 2] + 2;
        sequence.push(target - sequence[size - 1]);

        group.bench_with_input(BenchmarkId::from_parameter(size), &sequence, |b, seq| {
            b.iter(|| find_pair(black_box(seq), black_box(target)))
        });
    }
    group.finish();
}

fn bench_solve_text(c: &mut Criterion) {
    let values: Vec<String> = (0..10_000).map(|v: i64| (v * 3 - 7).to_string()).collect();
    let text = format!("{}\n{}\n{}\n", values.len(), values.join(" "), -1);

    c.bench_function("two_sum_solve_text_10k", |b| {
        b.iter(|| Problem::TwoSum.solve_text(black_box(&text)))
    });
}

criterion_group!(benches, bench_find_pair, bench_solve_text);
criterion_main!(benches);
