use std::path::PathBuf;

use cssbench_cli::config::{load_or_default, CaseConfig, CaseKind, Config};

use crate::helper::TestDir;

mod helper;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.payload, PathBuf::from("data/sample.css"));
    assert_eq!(config.seed, 42);
    let names = config.cases.iter().map(|c| c.name()).collect::<Vec<_>>();
    assert_eq!(
        names,
        ["parse", "minify", "tokenize", "ident-stream", "number-stream"]
    );
    assert!(config.cases.iter().all(|c| c.iterations == 1000));
    assert!(config.cases.iter().all(|c| c.warmup == 0));
}

#[test]
fn test_case_defaults() -> anyhow::Result<()> {
    let config = Config::from_toml(
        r#"
[[case]]
kind = "tokenize"

[[case]]
name = "big-parse"
kind = "parse"
iterations = 7
warmup = 2
"#,
    )?;
    assert_eq!(config.payload, PathBuf::from("data/sample.css"));
    assert_eq!(
        config.cases,
        vec![
            CaseConfig {
                name: None,
                kind: CaseKind::Tokenize,
                iterations: 1000,
                warmup: 0,
            },
            CaseConfig {
                name: Some("big-parse".to_owned()),
                kind: CaseKind::Parse,
                iterations: 7,
                warmup: 2,
            },
        ]
    );
    assert_eq!(config.cases[0].name(), "tokenize");
    assert_eq!(config.cases[1].name(), "big-parse");
    Ok(())
}

#[test]
fn test_empty_case_list() -> anyhow::Result<()> {
    let config = Config::from_toml("case = []\n")?;
    assert!(config.cases.is_empty());
    Ok(())
}

#[test]
fn test_unknown_fields_are_rejected() {
    assert!(Config::from_toml("payloads = \"a.css\"\n").is_err());
    assert!(Config::from_toml("[[case]]\nkind = \"parse\"\nrepeat = 3\n").is_err());
}

#[test]
fn test_unknown_kind_is_rejected() {
    assert!(Config::from_toml("[[case]]\nkind = \"render\"\n").is_err());
}

#[test]
fn test_payload_relative_to_config_file() -> anyhow::Result<()> {
    let dir = TestDir::new()?;
    let path = dir.file("conf/cssbench.toml", "payload = \"../style.css\"\n")?;
    let config = load_or_default(Some(&path))?;
    assert_eq!(config.payload, dir.path().join("conf").join("../style.css"));
    Ok(())
}

#[test]
fn test_absolute_payload_is_kept() -> anyhow::Result<()> {
    let dir = TestDir::new()?;
    let payload = dir.path().join("style.css");
    let path = dir.file(
        "cssbench.toml",
        format!("payload = {:?}\n", payload.to_str().unwrap()),
    )?;
    let config = load_or_default(Some(&path))?;
    assert_eq!(config.payload, payload);
    Ok(())
}

#[test]
fn test_missing_config_keeps_io_error() -> anyhow::Result<()> {
    let dir = TestDir::new()?;
    let path = dir.path().join("nope.toml");
    let err = load_or_default(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"), "{err:#}");
    let io = err
        .root_cause()
        .downcast_ref::<std::io::Error>()
        .expect("an io error");
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    Ok(())
}

#[test]
fn test_config_directory_is_an_error() -> anyhow::Result<()> {
    let dir = TestDir::new()?;
    let err = load_or_default(Some(dir.path())).unwrap_err();
    assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    Ok(())
}
