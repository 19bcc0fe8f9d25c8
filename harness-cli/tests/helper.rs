#![allow(unused)]

use std::path::{Path, PathBuf};

use clap::Parser;
use cssbench_cli::{parser::CssParser, Cli, RunReport};
use tempdir::TempDir;

pub const SMALL_CSS: &str = r#"
:root { --gap: 4px; }
body { margin: 0; padding: calc(var(--gap) * 2); }
a:hover { color: #336699; }
@media (max-width: 600px) { .nav { display: none; } }
"#;

pub struct TestDir {
    temp_dir: TempDir,
}

impl TestDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new("cssbench")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, path: impl AsRef<str>, content: impl AsRef<str>) -> anyhow::Result<PathBuf> {
        let full_path = self.temp_dir.path().join(path.as_ref());
        let dir = full_path.parent().unwrap();
        std::fs::create_dir_all(dir)?;
        std::fs::write(&full_path, content.as_ref())?;
        Ok(full_path)
    }

    pub fn path_str(&self, path: impl AsRef<str>) -> String {
        self.temp_dir
            .path()
            .join(path.as_ref())
            .to_string_lossy()
            .into_owned()
    }

    pub fn run(&self, args: &[&str]) -> anyhow::Result<RunReport> {
        cssbench_cli::entry(&cli(args))
    }

    pub fn run_with_parser(&self, args: &[&str], css: &dyn CssParser) -> anyhow::Result<RunReport> {
        cssbench_cli::entry_with_parser(&cli(args), css)
    }
}

pub fn cli(args: &[&str]) -> Cli {
    let mut cmd_args = vec!["cssbench"];
    cmd_args.extend_from_slice(args);
    Cli::parse_from(cmd_args)
}
