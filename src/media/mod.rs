//! Narration assets and their measured durations.

/// Container-metadata duration probing through `ffprobe`.
pub mod probe;

use std::path::{Path, PathBuf};

use crate::foundation::core::Role;
use crate::foundation::error::QuizResult;

pub use probe::{DurationProbe, FfprobeDurationProbe};

/// A synthesized narration audio file paired with one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrationAudio {
    pub role: Role,
    pub path: PathBuf,
    duration: Option<f64>,
}

impl NarrationAudio {
    pub fn new(role: Role, path: impl Into<PathBuf>) -> Self {
        Self {
            role,
            path: path.into(),
            duration: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Measured duration in seconds, once [`NarrationAudio::measure`] has run.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Probe the asset and remember its duration. Every call re-probes.
    pub fn measure(&mut self, probe: &dyn DurationProbe) -> QuizResult<f64> {
        let seconds = probe.probe_seconds(&self.path)?;
        tracing::debug!(role = %self.role, seconds, path = %self.path.display(), "narration measured");
        self.duration = Some(seconds);
        Ok(seconds)
    }
}

/// Measure a question/answer pair concurrently.
pub fn measure_pair(
    pair: &mut [NarrationAudio; 2],
    probe: &dyn DurationProbe,
) -> QuizResult<(f64, f64)> {
    let [question, answer] = pair;
    let (q, a) = rayon::join(|| question.measure(probe), || answer.measure(probe));
    Ok((q?, a?))
}

#[cfg(test)]
#[path = "../../tests/unit/media/mod.rs"]
mod tests;
