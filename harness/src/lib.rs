mod bencher;
mod benchmark;
mod error;
mod payload;
mod record;

pub use bencher::{BenchTimer, BenchmarkRunner, RunAll};
pub use benchmark::{Benchmark, BenchmarkCase, FnBenchmark};
pub use error::{HarnessError, Phase};
pub use payload::Payload;
pub use record::BenchmarkResult;
pub use std::hint::black_box;
