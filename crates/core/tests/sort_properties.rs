//! Behavioural properties of `ClassificationService::sort`
//!
//! Covers the reference boundary cases, idempotence, the error taxonomy and
//! metrics pairing (one update per call).

mod support;

use std::sync::Arc;
use std::thread;

use parcelsort_core::{ClassificationService, RuleEngine};
use parcelsort_domain::{Category, ParcelSortError};
use support::ports::{CountingMetrics, RealClock};

fn service() -> (ClassificationService, Arc<CountingMetrics>) {
    let metrics = Arc::new(CountingMetrics::default());
    let service =
        ClassificationService::new(RuleEngine::standard(), metrics.clone(), Arc::new(RealClock));
    (service, metrics)
}

// ============================================================================
// Reference cases
// ============================================================================

#[test]
fn test_reference_boundaries() {
    let (service, _) = service();

    // volume = 1,000,000 meets the bulky-by-volume threshold exactly
    assert_eq!(service.sort(100.0, 100.0, 100.0, 10.0).unwrap(), Category::SPECIAL);
    // width meets the bulky-by-dimension threshold exactly
    assert_eq!(service.sort(150.0, 1.0, 1.0, 1.0).unwrap(), Category::SPECIAL);
    // mass meets the heavy threshold exactly
    assert_eq!(service.sort(10.0, 10.0, 10.0, 20.0).unwrap(), Category::SPECIAL);
    // heavy and bulky
    assert_eq!(service.sort(150.0, 1.0, 1.0, 25.0).unwrap(), Category::REJECTED);
    // neither
    assert_eq!(service.sort(10.0, 10.0, 10.0, 10.0).unwrap(), Category::STANDARD);
}

#[test]
fn test_demo_cases() {
    let (service, _) = service();
    let cases = [
        ((10.0, 10.0, 10.0), 5.0, Category::STANDARD),
        ((100.0, 100.0, 100.0), 10.0, Category::SPECIAL),
        ((150.0, 50.0, 50.0), 10.0, Category::SPECIAL),
        ((50.0, 50.0, 50.0), 25.0, Category::SPECIAL),
        ((150.0, 100.0, 100.0), 25.0, Category::REJECTED),
    ];

    for ((w, h, l), mass, expected) in cases {
        assert_eq!(service.sort(w, h, l, mass).unwrap(), expected, "{w}x{h}x{l} {mass}kg");
    }
}

#[test]
fn test_valid_input_always_yields_known_label() {
    let (service, metrics) = service();
    let known = [Category::STANDARD, Category::SPECIAL, Category::REJECTED];
    let values = [0.5, 1.0, 19.99, 20.0, 99.0, 100.0, 149.0, 150.0, 1000.0];

    let mut calls = 0;
    for &w in &values {
        for &h in &values {
            for &m in &values {
                let label = service.sort(w, h, 10.0, m).unwrap();
                assert!(known.contains(&label), "unexpected label {label}");
                calls += 1;
            }
        }
    }
    assert_eq!(metrics.total(), calls);
}

#[test]
fn test_sort_is_idempotent() {
    let (service, metrics) = service();
    let first = service.sort(120.0, 90.0, 95.0, 19.0).unwrap();
    for _ in 0..50 {
        assert_eq!(service.sort(120.0, 90.0, 95.0, 19.0).unwrap(), first);
    }
    assert_eq!(metrics.total(), 51);
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[test]
fn test_invalid_inputs_increment_error_counter_only() {
    let (service, metrics) = service();
    service.sort(10.0, 10.0, 10.0, 10.0).unwrap();

    let cases = [
        ((-1.0, 10.0, 10.0, 10.0), "All dimensions and mass must be positive."),
        ((10.0, 0.0, 10.0, 10.0), "All dimensions and mass must be positive."),
        ((10.0, 10.0, 10.0, -0.1), "All dimensions and mass must be positive."),
        ((f64::NAN, 10.0, 10.0, 10.0), "All dimensions and mass must be numbers."),
    ];

    for (i, ((w, h, l, m), message)) in cases.into_iter().enumerate() {
        let err = service.sort(w, h, l, m).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), message);

        let counts = metrics.snapshot();
        assert_eq!(counts.errors, i as u64 + 1);
        assert_eq!(counts.by_category.get("STANDARD"), Some(&1));
        assert_eq!(counts.samples.len(), 1);
    }
}

#[test]
fn test_json_input_errors() {
    let (service, metrics) = service();
    let err = service.sort_json(&serde_json::json!({"width": "10"})).unwrap_err();
    assert_eq!(err, ParcelSortError::InvalidType);
    assert_eq!(metrics.snapshot().errors, 1);
    assert_eq!(metrics.total(), 0);
}

// ============================================================================
// Metrics pairing
// ============================================================================

#[test]
fn test_counts_and_samples_stay_paired() {
    let (service, metrics) = service();
    for i in 1..=25 {
        service.sort(f64::from(i), 10.0, 10.0, f64::from(i)).unwrap();
    }
    for _ in 0..4 {
        let _ = service.sort(0.0, 1.0, 1.0, 1.0);
    }

    let counts = metrics.snapshot();
    assert_eq!(counts.by_category.values().sum::<u64>(), 25);
    assert_eq!(counts.samples.len(), 25);
    assert_eq!(counts.errors, 4);
}

#[test]
fn test_concurrent_sorts_lose_nothing() {
    let (service, metrics) = service();
    let service = Arc::new(service);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for i in 0..250 {
                    let mass = f64::from((t * 250 + i) % 40 + 1);
                    service.sort(10.0, 10.0, 10.0, mass).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(metrics.total(), 2000);
    assert_eq!(metrics.snapshot().samples.len(), 2000);
}
