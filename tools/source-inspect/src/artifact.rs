use crate::error::InspectError;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw text of a single file, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArtifact {
    path: PathBuf,
    text: String,
}

impl SourceArtifact {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Read the whole file. Invalid UTF-8 sequences decode to U+FFFD rather than
/// failing; only an I/O failure is a `Read` error.
pub fn load_artifact(path: &Path) -> Result<SourceArtifact, InspectError> {
    let bytes = fs::read(path).map_err(|source| InspectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(SourceArtifact::new(path, text))
}
