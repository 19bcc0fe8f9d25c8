use crate::error::HarnessError;

/// A unit of timed work.
///
/// `iter` is the measured operation. `prologue` and `epilogue` run once per
/// case, outside the timed region, and are the place for any setup or result
/// checks that must not be measured.
pub trait Benchmark {
    /// Prepare the benchmark before the first warmup or timing iteration.
    fn prologue(&mut self) {}

    /// Run one benchmark iteration.
    fn iter(&mut self) -> anyhow::Result<()>;

    /// Clean up after the last iteration. Also called when an iteration fails.
    fn epilogue(&mut self) {}
}

/// Adapter that turns a plain closure into a [`Benchmark`].
pub struct FnBenchmark<F>(pub F);

impl<F> Benchmark for FnBenchmark<F>
where
    F: FnMut() -> anyhow::Result<()>,
{
    fn iter(&mut self) -> anyhow::Result<()> {
        (self.0)()
    }
}

/// A named benchmark with a fixed iteration count.
pub struct BenchmarkCase<'a> {
    pub(crate) name: String,
    pub(crate) iterations: usize,
    pub(crate) warmup: usize,
    pub(crate) benchmark: Box<dyn Benchmark + 'a>,
}

impl<'a> BenchmarkCase<'a> {
    pub fn new(
        name: impl Into<String>,
        iterations: usize,
        benchmark: impl Benchmark + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            iterations,
            warmup: 0,
            benchmark: Box::new(benchmark),
        }
    }

    /// Build a case from a closure.
    pub fn from_fn(
        name: impl Into<String>,
        iterations: usize,
        body: impl FnMut() -> anyhow::Result<()> + 'a,
    ) -> Self {
        Self::new(name, iterations, FnBenchmark(body))
    }

    /// Number of untimed iterations to run before the timer starts.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn warmup(&self) -> usize {
        self.warmup
    }

    pub(crate) fn validate(&self) -> Result<(), HarnessError> {
        if self.name.trim().is_empty() {
            return Err(HarnessError::Config(
                "benchmark name must not be empty".to_owned(),
            ));
        }
        if self.iterations == 0 {
            return Err(HarnessError::Config(format!(
                "benchmark `{}` must run at least one iteration",
                self.name
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for BenchmarkCase<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkCase")
            .field("name", &self.name)
            .field("iterations", &self.iterations)
            .field("warmup", &self.warmup)
            .finish_non_exhaustive()
    }
}
