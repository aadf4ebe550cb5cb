use std::sync::Arc;
use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parcelsort_core::{Clock, ClassificationService, MetricsRecorder, RuleEngine};
use parcelsort_domain::{Category, ClassifierConfig, Result as DomainResult};

#[derive(Debug)]
struct BenchClock;

impl Clock for BenchClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
struct NoopMetrics;

impl MetricsRecorder for NoopMetrics {
    fn observe(&self, category: &Category, duration: Duration) -> DomainResult<()> {
        black_box((category, duration));
        Ok(())
    }

    fn record_error(&self) -> DomainResult<()> {
        Ok(())
    }
}

fn sample_inputs() -> Vec<(f64, f64, f64, f64)> {
    vec![
        (10.0, 10.0, 10.0, 5.0),
        (100.0, 100.0, 100.0, 10.0),
        (150.0, 50.0, 50.0, 10.0),
        (50.0, 50.0, 50.0, 25.0),
        (150.0, 100.0, 100.0, 25.0),
    ]
}

fn bench_engine(c: &mut Criterion) {
    let standard = RuleEngine::standard();
    let extended = RuleEngine::from_config(&ClassifierConfig {
        enable_fragile: true,
        enable_express: true,
        ..Default::default()
    });
    let inputs = sample_inputs();

    c.bench_function("engine_classify_standard", |b| {
        b.iter(|| {
            for &(w, h, l, m) in &inputs {
                black_box(standard.classify_dimensions(w, h, l, m));
            }
        });
    });

    c.bench_function("engine_classify_extended", |b| {
        b.iter(|| {
            for &(w, h, l, m) in &inputs {
                black_box(extended.classify_dimensions(w, h, l, m));
            }
        });
    });
}

fn bench_service(c: &mut Criterion) {
    let service =
        ClassificationService::new(RuleEngine::standard(), Arc::new(NoopMetrics), Arc::new(BenchClock));
    let inputs = sample_inputs();

    c.bench_function("service_sort", |b| {
        b.iter(|| {
            for &(w, h, l, m) in &inputs {
                let _ = black_box(service.sort(w, h, l, m));
            }
        });
    });

    c.bench_function("service_sort_invalid", |b| {
        b.iter(|| {
            let _ = black_box(service.sort(-1.0, 10.0, 10.0, 10.0));
        });
    });
}

criterion_group!(benches, bench_engine, bench_service);
criterion_main!(benches);
