//! Timing utilities for document loads and page renders.
//!
//! - **Scoped timers**: RAII-style timing that warns past a threshold
//! - **Render timings**: per-page render durations for one load
//!
//! Build with the `profiling` feature to log every page render at debug
//! level via `profile_scope!`.

use std::time::Instant;
use tracing::{debug, warn};

/// Profile a scope with the given name and warning threshold. Zero-cost when
/// profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Render Timings
// ============================================================================

/// Per-page render durations collected over one document load.
///
/// Every sample is kept; a load renders each page exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderTimings {
    samples_ms: Vec<f64>,
}

impl RenderTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(pages: usize) -> Self {
        Self {
            samples_ms: Vec::with_capacity(pages),
        }
    }

    pub fn record(&mut self, ms: f64) {
        self.samples_ms.push(ms);
    }

    pub fn count(&self) -> usize {
        self.samples_ms.len()
    }

    pub fn total(&self) -> f64 {
        self.samples_ms.iter().sum()
    }

    /// Mean render time, or 0.0 before any sample.
    pub fn average(&self) -> f64 {
        if self.samples_ms.is_empty() {
            0.0
        } else {
            self.total() / self.samples_ms.len() as f64
        }
    }

    pub fn min(&self) -> f64 {
        self.samples_ms.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.samples_ms.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Sample at rank `floor(count * fraction)` of the sorted durations.
    pub fn percentile(&self, fraction: f64) -> f64 {
        let mut sorted = self.samples_ms.clone();
        sorted.sort_by(f64::total_cmp);
        let Some(last) = sorted.len().checked_sub(1) else {
            return 0.0;
        };
        let rank = (sorted.len() as f64 * fraction.clamp(0.0, 1.0)).floor() as usize;
        sorted[rank.min(last)]
    }

    pub fn p95(&self) -> f64 {
        self.percentile(0.95)
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Milliseconds since the timer started.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            debug!(operation = self.name, elapsed_ms = format!("{:.2}", ms), "Timed");
        }
    }
}
