use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{QuizError, QuizResult};

/// Measures the playback duration of a media file.
pub trait DurationProbe: Send + Sync {
    /// Duration in seconds. Fails with [`QuizError::MediaProbe`].
    fn probe_seconds(&self, path: &Path) -> QuizResult<f64>;
}

/// [`DurationProbe`] reading `format.duration` from `ffprobe` JSON output.
///
/// Only container metadata is read; the stream is not decoded.
#[derive(Clone, Debug)]
pub struct FfprobeDurationProbe {
    program: PathBuf,
}

impl Default for FfprobeDurationProbe {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl FfprobeDurationProbe {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Return `true` when the configured `ffprobe` can be invoked.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl DurationProbe for FfprobeDurationProbe {
    fn probe_seconds(&self, path: &Path) -> QuizResult<f64> {
        if !path.is_file() {
            return Err(QuizError::media_probe(format!(
                "narration asset '{}' does not exist",
                path.display()
            )));
        }

        let out = Command::new(&self.program)
            .args(["-v", "error", "-print_format", "json", "-show_format"])
            .arg(path)
            .output()
            .map_err(|e| {
                QuizError::media_probe(format!(
                    "failed to run '{}' (is it installed and on PATH?): {e}",
                    self.program.display()
                ))
            })?;
        if !out.status.success() {
            return Err(QuizError::media_probe(format!(
                "ffprobe failed for '{}': {}",
                path.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        parse_ffprobe_duration(&out.stdout).map_err(|e| match e {
            QuizError::MediaProbe(msg) => {
                QuizError::media_probe(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
    }
}

/// Extract `format.duration` (seconds) from `ffprobe -print_format json -show_format` output.
pub fn parse_ffprobe_duration(json: &[u8]) -> QuizResult<f64> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<serde_json::Value>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: Option<ProbeFormat>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| QuizError::media_probe(format!("ffprobe json parse failed: {e}")))?;
    let raw = parsed
        .format
        .and_then(|f| f.duration)
        .ok_or_else(|| QuizError::media_probe("no duration in container metadata"))?;

    // ffprobe prints durations as strings ("7.200000"); accept plain numbers too.
    let seconds = match &raw {
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }
    .ok_or_else(|| QuizError::media_probe(format!("unparseable duration {raw}")))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(QuizError::media_probe(format!("invalid duration {seconds}")));
    }
    Ok(seconds)
}

#[cfg(test)]
#[path = "../../tests/unit/media/probe.rs"]
mod tests;
