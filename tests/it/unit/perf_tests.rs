//! Unit tests for perf module.

use pagegrid::perf::{RenderTimings, ScopedTimer};

#[test]
fn test_render_timings_recording() {
    let mut timings = RenderTimings::new();

    timings.record(10.0);
    timings.record(5.0);
    timings.record(15.0);

    // (5 + 10 + 15) / 3 = 10
    assert!((timings.average() - 10.0).abs() < 0.001);
    assert!((timings.total() - 30.0).abs() < 0.001);
    assert_eq!(timings.count(), 3);
    assert_eq!(timings.min(), 5.0);
    assert_eq!(timings.max(), 15.0);
}

#[test]
fn test_empty_timings() {
    let timings = RenderTimings::new();
    assert_eq!(timings.average(), 0.0);
    assert_eq!(timings.p95(), 0.0);
    assert_eq!(timings.min(), 0.0);
    assert_eq!(timings.max(), 0.0);
    assert_eq!(timings.count(), 0);
}

#[test]
fn test_timings_keep_every_page() {
    let mut timings = RenderTimings::with_capacity(300);
    for _ in 0..150 {
        timings.record(1.0);
    }
    for _ in 0..150 {
        timings.record(3.0);
    }

    assert_eq!(timings.count(), 300);
    assert!((timings.average() - 2.0).abs() < 0.001);
    assert_eq!(timings.min(), 1.0);
}

#[test]
fn test_p95() {
    let mut timings = RenderTimings::new();
    for i in (1..=100).rev() {
        timings.record(i as f64);
    }
    assert_eq!(timings.p95(), 96.0);
    assert_eq!(timings.percentile(0.0), 1.0);
    assert_eq!(timings.percentile(1.0), 100.0);
}

#[test]
fn test_p95_single_sample() {
    let mut timings = RenderTimings::new();
    timings.record(42.0);
    assert_eq!(timings.p95(), 42.0);
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it only logs at debug.
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}
