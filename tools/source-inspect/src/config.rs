use std::io;
use std::path::{Path, PathBuf};

/// Location of the inspected artifact, relative to the root dir.
pub const ARTIFACT_REL_PATH: &str = "functions/sources/alpacaBalance.js";

pub struct InspectorConfig {
    pub root_dir: PathBuf,
    pub artifact_path: PathBuf,
}

impl InspectorConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            artifact_path: root.join(ARTIFACT_REL_PATH),
        }
    }

    /// Resolve against the current working directory
    pub fn current() -> io::Result<Self> {
        let dir = std::env::current_dir()?;
        Ok(Self::from_root(&dir))
    }

    /// Artifact path relative to the root dir, for display
    pub fn display_path(&self) -> &Path {
        self.artifact_path
            .strip_prefix(&self.root_dir)
            .unwrap_or(&self.artifact_path)
    }
}
