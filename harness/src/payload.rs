use std::path::{Path, PathBuf};

use crate::error::HarnessError;

/// Input data shared read-only by every benchmark of a run.
///
/// Loaded once, before any timing starts. Benchmarks borrow it for the
/// lifetime of the runner.
#[derive(Debug, Clone)]
pub struct Payload {
    path: PathBuf,
    text: String,
}

impl Payload {
    /// Read the whole file into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref().to_owned();
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("Loaded payload {} ({} bytes)", path.display(), text.len());
                Ok(Self { path, text })
            }
            Err(source) => Err(HarnessError::Io { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
