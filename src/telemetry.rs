//! Telemetry sink contract and the `metrics`-facade implementation.
//!
//! The shortener records counters and latency as a side channel at every
//! branch; where those measurements land (Prometheus, StatsD, a test
//! recorder) is decided by whichever `metrics` recorder the deployment
//! installs.

use std::time::Duration;

use metrics::{counter, histogram};

/// Sink for the shortener's counters and latency measurements.
///
/// Implementations must be cheap and infallible; recording telemetry is
/// never allowed to fail a request.
#[cfg_attr(test, mockall::automock)]
pub trait Telemetry: Send + Sync {
    /// Counts a created mapping, tagged by owner (`anonymous` when absent).
    fn url_created(&self, created_by: &Option<String>);

    /// Counts a rejected input URL.
    fn validation_failed(&self);

    /// Counts a swallowed cache write failure.
    fn cache_write_failed(&self);

    /// Counts a swallowed notification publish failure.
    fn publish_failed(&self);

    /// Records total request latency, covering both the dedup-hit and the
    /// creation branch.
    fn request_latency(&self, elapsed: Duration);
}

/// [`Telemetry`] implementation backed by the `metrics` facade.
///
/// Metric names:
///
/// - `url.created.count{user}` - counter
/// - `url.validation.failed.count` - counter
/// - `url.cache.write.failed.count` - counter
/// - `url.notify.failed.count` - counter
/// - `url.request.latency` - histogram, seconds
pub struct MetricsTelemetry;

impl MetricsTelemetry {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetricsTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry for MetricsTelemetry {
    fn url_created(&self, created_by: &Option<String>) {
        let user = created_by.as_deref().unwrap_or("anonymous").to_string();
        counter!("url.created.count", "user" => user).increment(1);
    }

    fn validation_failed(&self) {
        counter!("url.validation.failed.count").increment(1);
    }

    fn cache_write_failed(&self) {
        counter!("url.cache.write.failed.count").increment(1);
    }

    fn publish_failed(&self) {
        counter!("url.notify.failed.count").increment(1);
    }

    fn request_latency(&self, elapsed: Duration) {
        histogram!("url.request.latency").record(elapsed.as_secs_f64());
    }
}
