use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::Context as _;

use crate::encode::Compositor;
use crate::encode::job::{CompositionJob, EncodeSettings, partial_path};
use crate::foundation::error::{QuizError, QuizResult};

/// [`Compositor`] that runs the system `ffmpeg` once per job.
///
/// The encoder writes to a temporary sibling of the output path; the file is renamed into place
/// only after `ffmpeg` exits successfully.
#[derive(Clone, Debug, Default)]
pub struct FfmpegCompositor {
    settings: EncodeSettings,
}

impl FfmpegCompositor {
    pub fn new(settings: EncodeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EncodeSettings {
        &self.settings
    }

    /// Return `true` when the configured `ffmpeg` can be invoked.
    pub fn is_available(&self) -> bool {
        Command::new(&self.settings.ffmpeg_path)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Compositor for FfmpegCompositor {
    #[tracing::instrument(skip(self, job), fields(out = %job.out_path.display(), total_secs = job.total_seconds()))]
    fn compose(&self, job: &CompositionJob) -> QuizResult<PathBuf> {
        job.validate()?;
        check_inputs_exist(job)?;
        ensure_parent_dir(&job.out_path)?;

        if !self.is_available() {
            return Err(QuizError::composition(
                format!(
                    "'{}' is required for video composition, but could not be run",
                    self.settings.ffmpeg_path.display()
                ),
                "",
            ));
        }

        let partial = partial_path(&job.out_path);
        remove_if_exists(&partial);

        let args = job.ffmpeg_args(&self.settings, &partial);
        tracing::debug!(?args, "spawning ffmpeg");

        let out = Command::new(&self.settings.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                QuizError::composition(
                    format!(
                        "failed to spawn '{}': {e}",
                        self.settings.ffmpeg_path.display()
                    ),
                    "",
                )
            })?;

        if !out.status.success() {
            remove_if_exists(&partial);
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            tracing::error!(status = %out.status, "ffmpeg failed");
            return Err(QuizError::composition(
                format!("ffmpeg exited with status {}", out.status),
                stderr,
            ));
        }

        if let Err(e) = std::fs::rename(&partial, &job.out_path) {
            remove_if_exists(&partial);
            return Err(QuizError::composition(
                format!(
                    "failed to move '{}' into place at '{}': {e}",
                    partial.display(),
                    job.out_path.display()
                ),
                "",
            ));
        }

        tracing::info!("video composed");
        Ok(job.out_path.clone())
    }
}

fn check_inputs_exist(job: &CompositionJob) -> QuizResult<()> {
    let inputs = job
        .visuals
        .iter()
        .map(|(f, _)| f.path.as_path())
        .chain(job.narration.iter().map(|a| a.path.as_path()));
    for path in inputs {
        if !path.is_file() {
            return Err(QuizError::composition(
                format!("composition input '{}' does not exist", path.display()),
                "",
            ));
        }
    }
    Ok(())
}

fn remove_if_exists(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), "failed to remove partial output: {e}"),
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> QuizResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
