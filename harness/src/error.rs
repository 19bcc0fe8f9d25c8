use std::{fmt, path::PathBuf};

/// Which loop of a case an iteration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Warmup,
    Timing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Warmup => write!(f, "warmup"),
            Phase::Timing => write!(f, "timing"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The payload could not be read. Fatal for the whole run.
    #[error("failed to read payload `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Invalid registration. Reported before anything is measured.
    #[error("invalid benchmark configuration: {0}")]
    Config(String),
    /// The benchmark body failed. Only the named case is aborted.
    #[error("benchmark `{name}` failed at {phase} iteration {iteration}: {cause:#}")]
    Execution {
        name: String,
        phase: Phase,
        iteration: usize,
        #[source]
        cause: anyhow::Error,
    },
}

impl HarnessError {
    /// Name of the failing case, for execution errors.
    pub fn case_name(&self) -> Option<&str> {
        match self {
            HarnessError::Execution { name, .. } => Some(name),
            _ => None,
        }
    }
}
