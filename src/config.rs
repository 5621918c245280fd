//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a valid config.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::EncodeSettings;
use crate::foundation::core::Canvas;
use crate::foundation::error::{QuizError, QuizResult};
use crate::quiz::NarrationStyle;
use crate::render::FrameStyle;
use crate::services::openai::OpenAiSettings;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: Canvas,
    pub encode: EncodeSettings,
    pub style: FrameStyle,
    pub narration: NarrationStyle,
    /// `ffprobe` executable used to measure narration.
    pub ffprobe_path: PathBuf,
    /// Parent of the per-run scratch directories.
    pub workspace_root: PathBuf,
    /// Where finished videos are written.
    pub output_dir: PathBuf,
    /// When set, finished videos are also copied here.
    pub publish_dir: Option<PathBuf>,
    /// JSON-lines file receiving one record per run. `None` disables the log.
    pub run_log: Option<PathBuf>,
    /// Keep scratch directories after successful runs.
    pub keep_workspace: bool,
    pub openai: OpenAiSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: Canvas::VERTICAL_HD,
            encode: EncodeSettings::default(),
            style: FrameStyle::default(),
            narration: NarrationStyle::default(),
            ffprobe_path: PathBuf::from("ffprobe"),
            workspace_root: PathBuf::from("output/work"),
            output_dir: PathBuf::from("output/videos"),
            publish_dir: None,
            run_log: Some(PathBuf::from("output/runs.jsonl")),
            keep_workspace: false,
            openai: OpenAiSettings::default(),
        }
    }
}

impl Config {
    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> QuizResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .map_err(|e| QuizError::config(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> QuizResult<()> {
        self.canvas
            .validate()
            .map_err(|e| QuizError::config(e.to_string()))?;
        let fps = self.encode.fps;
        if fps.num == 0 || fps.den == 0 {
            return Err(QuizError::config("encode.fps num/den must be non-zero"));
        }
        if self.encode.video_codec.trim().is_empty() || self.encode.audio_codec.trim().is_empty() {
            return Err(QuizError::config("encode codecs must be non-empty"));
        }
        self.style.validate()?;
        self.openai.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
