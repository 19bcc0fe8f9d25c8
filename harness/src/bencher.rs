use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use crate::{
    benchmark::{Benchmark, BenchmarkCase},
    error::{HarnessError, Phase},
    record::BenchmarkResult,
};

/// Wall-clock timer around the measured loop.
pub struct BenchTimer {
    start_time: Instant,
}

impl BenchTimer {
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn stop(self) -> Duration {
        self.start_time.elapsed()
    }
}

impl BenchmarkCase<'_> {
    fn execution_error(
        &self,
        phase: Phase,
        iteration: usize,
        cause: anyhow::Error,
    ) -> HarnessError {
        HarnessError::Execution {
            name: self.name.clone(),
            phase,
            iteration,
            cause,
        }
    }

    fn measure(&mut self) -> Result<Duration, HarnessError> {
        for i in 0..self.warmup {
            if let Err(cause) = self.benchmark.iter() {
                return Err(self.execution_error(Phase::Warmup, i, cause));
            }
        }
        let timer = BenchTimer::start();
        for i in 0..self.iterations {
            if let Err(cause) = black_box(self.benchmark.iter()) {
                return Err(self.execution_error(Phase::Timing, i, cause));
            }
        }
        Ok(timer.stop())
    }

    /// Run this case once: prologue, warmup, timed iterations, epilogue.
    ///
    /// Only the timed iterations are measured. Any failing iteration aborts
    /// the case and its partial timing is dropped.
    pub fn run(&mut self) -> Result<BenchmarkResult, HarnessError> {
        log::info!(
            "===== {} starting ({} warmup, {} timed) =====",
            self.name,
            self.warmup,
            self.iterations
        );
        self.benchmark.prologue();
        let elapsed = self.measure();
        self.benchmark.epilogue();
        let elapsed = elapsed?;
        log::info!(
            "===== {} PASSED in {:.1} msec =====",
            self.name,
            elapsed.as_micros() as f64 / 1000.0
        );
        Ok(BenchmarkResult::new(self.name.clone(), self.iterations, elapsed))
    }
}

/// An owned set of benchmark cases, run sequentially in registration order.
#[derive(Debug, Default)]
pub struct BenchmarkRunner<'a> {
    cases: Vec<BenchmarkCase<'a>>,
}

impl<'a> BenchmarkRunner<'a> {
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Register a closure as a benchmark case.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        iterations: usize,
        body: impl FnMut() -> anyhow::Result<()> + 'a,
    ) -> Result<(), HarnessError> {
        self.add(BenchmarkCase::from_fn(name, iterations, body))
    }

    /// Register a [`Benchmark`] implementation as a benchmark case.
    pub fn register_benchmark(
        &mut self,
        name: impl Into<String>,
        iterations: usize,
        benchmark: impl Benchmark + 'a,
    ) -> Result<(), HarnessError> {
        self.add(BenchmarkCase::new(name, iterations, benchmark))
    }

    pub fn add(&mut self, case: BenchmarkCase<'a>) -> Result<(), HarnessError> {
        case.validate()?;
        if self.cases.iter().any(|c| c.name == case.name) {
            return Err(HarnessError::Config(format!(
                "benchmark `{}` is already registered",
                case.name
            )));
        }
        self.cases.push(case);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Registered case names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name()).collect()
    }

    /// Run a single registered case by name.
    pub fn run_case(&mut self, name: &str) -> Result<BenchmarkResult, HarnessError> {
        let Some(case) = self.cases.iter_mut().find(|c| c.name == name) else {
            return Err(HarnessError::Config(format!("no benchmark named `{name}`")));
        };
        case.run()
    }

    /// Run every case in registration order.
    ///
    /// Cases are run lazily as the iterator is advanced. A failing case
    /// yields its error and the next case still runs.
    pub fn run_all(&mut self) -> RunAll<'_, 'a> {
        RunAll {
            cases: self.cases.iter_mut(),
        }
    }
}

/// Iterator returned by [`BenchmarkRunner::run_all`].
pub struct RunAll<'r, 'a> {
    cases: std::slice::IterMut<'r, BenchmarkCase<'a>>,
}

impl Iterator for RunAll<'_, '_> {
    type Item = Result<BenchmarkResult, HarnessError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cases.next().map(|case| case.run())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cases.size_hint()
    }
}
