use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "cssbench.toml";

/// What a benchmark case measures.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CaseKind {
    /// Full stylesheet parse of the payload.
    Parse,
    /// Parse, minify and print the payload.
    Minify,
    /// Walk every token of the payload.
    Tokenize,
    /// Tokenize generated random identifiers.
    IdentStream,
    /// Tokenize generated random numbers.
    NumberStream,
}

impl CaseKind {
    pub const ALL: [CaseKind; 5] = [
        CaseKind::Parse,
        CaseKind::Minify,
        CaseKind::Tokenize,
        CaseKind::IdentStream,
        CaseKind::NumberStream,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseKind::Parse => "parse",
            CaseKind::Minify => "minify",
            CaseKind::Tokenize => "tokenize",
            CaseKind::IdentStream => "ident-stream",
            CaseKind::NumberStream => "number-stream",
        }
    }
}

fn default_iterations() -> usize {
    1000
}

fn default_payload() -> PathBuf {
    PathBuf::from("data/sample.css")
}

fn default_seed() -> u64 {
    42
}

fn default_cases() -> Vec<CaseConfig> {
    CaseKind::ALL
        .iter()
        .map(|kind| CaseConfig {
            name: None,
            kind: *kind,
            iterations: default_iterations(),
            warmup: 0,
        })
        .collect()
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Stylesheet loaded once and shared by every case
    #[serde(default = "default_payload")]
    pub payload: PathBuf,
    /// Seed for the generated token streams
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Cases in the order they run
    #[serde(default = "default_cases", rename = "case")]
    pub cases: Vec<CaseConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payload: default_payload(),
            seed: default_seed(),
            cases: default_cases(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    /// Case name. Defaults to the kind.
    #[serde(default)]
    pub name: Option<String>,
    pub kind: CaseKind,
    /// Number of timed iterations
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Number of untimed iterations before timing starts
    #[serde(default)]
    pub warmup: usize,
}

impl CaseConfig {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.as_str())
    }
}

impl Config {
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str::<Config>(s)?)
    }

    /// Load a config file. A relative payload path is resolved against the
    /// directory of the config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        let mut config = Self::from_toml(&s)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        if config.payload.is_relative() {
            if let Some(dir) = path.parent() {
                config.payload = dir.join(&config.payload);
            }
        }
        Ok(config)
    }
}

/// Load `path` if given, else `./cssbench.toml` if present, else the built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }
    let local = Path::new(CONFIG_FILE);
    if local.is_file() {
        log::debug!("Using {}", local.display());
        return Config::load(local);
    }
    Ok(Config::default())
}
