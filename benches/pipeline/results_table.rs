use criterion::{black_box, BenchmarkId, Criterion};
use results_plotter::chart::{ChartStyle, Figure};
use results_plotter::results::{parse_results, partition, PartitionRule, ResultRow};

/// Builds a results table alternating between the two recognised algorithms.
fn generate_results_csv(row_count: usize) -> Vec<u8> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for x in 0..row_count {
        let n = (x / 2 + 1) as i64 * 100;
        let row = if x % 2 == 0 {
            ResultRow::new("greedy", n, n as f64 * 0.005, n)
        } else {
            ResultRow::new("dnc", n, (n as f64).log2() * 0.001, (n as f64).log2() as i64)
        };
        writer.serialize(row).unwrap();
    }

    writer.into_inner().unwrap()
}

pub fn bench_parse_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_results");

    for row_count in [100, 10_000] {
        let data = generate_results_csv(row_count);
        group.bench_with_input(BenchmarkId::from_parameter(row_count), &data, |b, data| {
            b.iter(|| parse_results(black_box(data.as_slice())).unwrap())
        });
    }

    group.finish();
}

pub fn bench_partition_and_figures(c: &mut Criterion) {
    let results = parse_results(generate_results_csv(10_000).as_slice()).unwrap();
    let style = ChartStyle::compact();
    let mut group = c.benchmark_group("partition_and_figures");

    for rule in [PartitionRule::Exact, PartitionRule::FirstVersusRest] {
        group.bench_function(format!("{:?}", rule), |b| {
            b.iter(|| {
                let groups = partition(black_box(&results), "greedy", "dnc", rule);
                let runtime = Figure::runtime(&groups.first, &groups.second, &style);
                let operations = Figure::operations(&groups.first, &groups.second, &style);
                (runtime, operations)
            })
        });
    }

    group.finish();
}
