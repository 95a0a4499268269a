use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sensorstat_core::{AnomalyPipeline, SampleGenerator, SeededSource, SummaryStats};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    for &count in &[100_000usize, 1_000_000] {
        let mut generator = SampleGenerator::new(SeededSource::new(1));
        let temperature = generator
            .generate_temperature(count, 45.0, 12.5)
            .expect("valid parameters");
        let status = generator.generate_status_codes(count).expect("valid count");
        let stats = SummaryStats::from_sample(&temperature).expect("non-empty sample");
        let pipeline = AnomalyPipeline::new();

        group.bench_with_input(BenchmarkId::new("summary_stats", count), &temperature, |b, t| {
            b.iter(|| SummaryStats::from_sample(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("analyze", count), &temperature, |b, t| {
            b.iter(|| pipeline.analyze(black_box(t), &status, &stats))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
