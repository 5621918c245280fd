//! Per-run scratch directories.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Role, RunId};
use crate::foundation::error::QuizResult;

/// Scratch directory owned by one run: `<root>/<run-id>/`.
///
/// File names inside also carry the run id, so frames from different runs never collide even
/// if two workspaces share a root.
#[derive(Debug)]
pub struct Workspace {
    run_id: RunId,
    dir: PathBuf,
}

impl Workspace {
    /// Create the run directory under `root`.
    pub fn create(root: impl AsRef<Path>, run_id: RunId) -> QuizResult<Self> {
        let dir = root.as_ref().join(run_id.as_str());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create workspace '{}'", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "workspace created");
        Ok(Self { run_id, dir })
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// PNG path for the frame of `role`.
    pub fn frame_path(&self, role: Role) -> PathBuf {
        self.dir.join(format!("{role}_{}.png", self.run_id))
    }

    /// Audio path for the narration of `role`.
    pub fn narration_path(&self, role: Role, extension: &str) -> PathBuf {
        self.dir.join(format!("{role}_{}.{extension}", self.run_id))
    }

    /// Remove the run directory. Failures are logged, never returned.
    pub fn cleanup(self) {
        if let Err(e) = std::fs::remove_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), "failed to clean workspace: {e}");
        }
    }
}

/// Final video path for a run: `<out_dir>/quiz_<run-id>.mp4`.
pub fn video_path(out_dir: &Path, run_id: &RunId) -> PathBuf {
    out_dir.join(format!("quiz_{run_id}.mp4"))
}

#[cfg(test)]
#[path = "../tests/unit/workspace.rs"]
mod tests;
