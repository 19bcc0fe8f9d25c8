use std::{fmt, time::Duration};

/// Measured outcome of one successful case run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    name: String,
    iterations: usize,
    total_duration: Duration,
}

impl BenchmarkResult {
    pub(crate) fn new(name: String, iterations: usize, total_duration: Duration) -> Self {
        Self {
            name,
            iterations,
            total_duration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Wall-clock time of the timed loop.
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn total_duration_nanos(&self) -> u128 {
        self.total_duration.as_nanos()
    }

    /// Iterations per second. A zero measurement counts as one nanosecond.
    pub fn ops_per_sec(&self) -> f64 {
        let nanos = self.total_duration_nanos().max(1) as f64;
        self.iterations as f64 / (nanos / 1e9)
    }

    /// Mean wall-clock time of one iteration.
    pub fn mean_latency(&self) -> Duration {
        let nanos = self.total_duration_nanos() / self.iterations.max(1) as u128;
        Duration::from_nanos(nanos.min(u64::MAX as u128) as u64)
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} ops/sec", self.name, self.ops_per_sec())
    }
}
