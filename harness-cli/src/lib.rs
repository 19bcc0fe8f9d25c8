use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use cssbench_harness::{BenchmarkResult, BenchmarkRunner, HarnessError, Payload};
use once_cell::sync::Lazy;

pub mod cases;
pub mod config;
pub mod parser;

use crate::parser::{CssParser, LightningCss};

/// Measure CSS parser throughput on a stylesheet
#[derive(Parser, Debug)]
#[command(name = "cssbench", version)]
pub struct Cli {
    /// Path to the config file. Defaults to `./cssbench.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Stylesheet to benchmark, overriding the config
    #[arg(long)]
    pub payload: Option<PathBuf>,
    #[arg(short = 'n', long)]
    /// Number of timed iterations for every case, overriding the config
    pub iterations: Option<usize>,
}

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    Cli::parse()
});

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<BenchmarkResult>,
    pub failures: Vec<HarnessError>,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status for this run: 0 when every case passed.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

fn print_error(msg: impl AsRef<str>) {
    eprintln!("❌ {}: {}", "ERROR".red().bold(), msg.as_ref().red());
}

/// Run every configured case against the lightningcss parser.
pub fn entry(cli: &Cli) -> anyhow::Result<RunReport> {
    entry_with_parser(cli, &LightningCss)
}

/// Run every configured case against `css`.
///
/// Configuration, payload and registration errors abort the run. Failing
/// cases are collected in the report and do not stop the remaining ones.
pub fn entry_with_parser(cli: &Cli, css: &dyn CssParser) -> anyhow::Result<RunReport> {
    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(payload) = &cli.payload {
        config.payload = payload.clone();
    }
    if let Some(iterations) = cli.iterations {
        for case in &mut config.cases {
            case.iterations = iterations;
        }
    }
    let payload = Payload::load(&config.payload)?;
    log::info!(
        "Payload: {} ({} bytes)",
        payload.path().display(),
        payload.len()
    );
    let mut runner = BenchmarkRunner::new();
    cases::register_cases(&mut runner, &config, &payload, css)?;
    if runner.is_empty() {
        log::warn!("No benchmarks configured");
    }
    let mut report = RunReport::default();
    for outcome in runner.run_all() {
        match outcome {
            Ok(result) => {
                println!("{result}");
                report.results.push(result);
            }
            Err(err) => {
                print_error(err.to_string());
                report.failures.push(err);
            }
        }
    }
    Ok(report)
}

#[doc(hidden)]
pub fn main() -> anyhow::Result<()> {
    let cli = &*CMD_ARGS;
    env_logger::init();
    let report = match entry(cli) {
        Ok(report) => report,
        Err(err) => {
            print_error(format!("{err:#}"));
            std::process::exit(1);
        }
    };
    if !report.success() {
        print_error(format!(
            "{} of {} benchmarks failed",
            report.failures.len(),
            report.failures.len() + report.results.len()
        ));
    }
    match report.exit_code() {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}
