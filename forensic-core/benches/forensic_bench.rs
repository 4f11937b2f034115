//! Cost of emitting a record, and of the disabled fast path.

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forensic_core::{ForensicConfig, ForensicLogger, Sink};

fn bench_emit(c: &mut Criterion) {
    let logger = ForensicLogger::new(&ForensicConfig::default(), Sink::writer(std::io::sink()));
    let start = Utc::now();

    c.bench_function("log_enabled", |b| {
        b.iter(|| logger.info(black_box("checkpoint reached"), start))
    });

    c.bench_function("scope_enabled", |b| {
        b.iter(|| logger.scope(black_box("Work"), || black_box(1 + 1)))
    });
}

fn bench_disabled(c: &mut Criterion) {
    let logger = ForensicLogger::new(&ForensicConfig::new(false), Sink::writer(std::io::sink()));
    let start = Utc::now();

    c.bench_function("log_disabled", |b| {
        b.iter(|| logger.info(black_box("checkpoint reached"), start))
    });

    c.bench_function("check_disabled", |b| {
        b.iter(|| logger.check(black_box(false), "assumption"))
    });
}

criterion_group!(benches, bench_emit, bench_disabled);
criterion_main!(benches);
