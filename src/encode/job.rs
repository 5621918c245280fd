use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::foundation::core::Fps;
use crate::foundation::error::{QuizError, QuizResult};
use crate::media::NarrationAudio;
use crate::render::Frame;
use crate::timing::{Segment, SegmentPlan};

/// Output encoding options.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    /// `ffmpeg` executable.
    pub ffmpeg_path: PathBuf,
    pub fps: Fps,
    pub video_codec: String,
    pub audio_codec: String,
    pub pix_fmt: String,
    /// Move the moov atom to the front for streaming-friendly MP4s.
    pub faststart: bool,
    /// Pad each narration with silence to its segment length so the answer narration starts
    /// exactly at the visual cut. Off by default: narrations play back to back.
    pub align_answer_audio: bool,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            fps: Fps::default(),
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            pix_fmt: "yuv420p".to_string(),
            faststart: true,
            align_answer_audio: false,
        }
    }
}

/// One encode invocation: frames held for their segments, narration in the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositionJob {
    pub visuals: Vec<(Frame, Segment)>,
    pub narration: Vec<NarrationAudio>,
    pub out_path: PathBuf,
}

impl CompositionJob {
    /// Build the standard question-then-answer job.
    pub fn from_pair(
        frames: [Frame; 2],
        plan: SegmentPlan,
        narration: [NarrationAudio; 2],
        out_path: impl Into<PathBuf>,
    ) -> QuizResult<Self> {
        let job = Self {
            visuals: frames.into_iter().zip(plan.segments()).collect(),
            narration: narration.into(),
            out_path: out_path.into(),
        };
        job.validate()?;
        Ok(job)
    }

    /// Check that visuals and narration line up role by role.
    pub fn validate(&self) -> QuizResult<()> {
        if self.visuals.is_empty() {
            return Err(QuizError::validation("composition job has no frames"));
        }
        if self.visuals.len() != self.narration.len() {
            return Err(QuizError::validation(format!(
                "composition job has {} frames but {} narration assets",
                self.visuals.len(),
                self.narration.len()
            )));
        }
        for ((frame, segment), audio) in self.visuals.iter().zip(&self.narration) {
            if frame.role != segment.role || frame.role != audio.role {
                return Err(QuizError::validation(format!(
                    "role mismatch in composition job: frame {}, segment {}, narration {}",
                    frame.role, segment.role, audio.role
                )));
            }
            if segment.seconds == 0 {
                return Err(QuizError::validation(format!(
                    "{} segment must be at least one second",
                    segment.role
                )));
            }
        }
        if self.out_path.file_name().is_none() {
            return Err(QuizError::validation("composition output path has no file name"));
        }
        Ok(())
    }

    /// Expected output duration: the sum of all segments.
    pub fn total_seconds(&self) -> u32 {
        self.visuals.iter().map(|(_, s)| s.seconds).sum()
    }

    /// `-filter_complex` graph concatenating video and audio inputs independently.
    ///
    /// Inputs `0..n` are the looped frames and `n..2n` the narration assets.
    pub fn filter_graph(&self, settings: &EncodeSettings) -> String {
        let n = self.visuals.len();
        let mut graph = String::new();

        for i in 0..n {
            let _ = write!(graph, "[{i}:v]");
        }
        let _ = write!(graph, "concat=n={n}:v=1:a=0[outv];");

        if settings.align_answer_audio {
            for (i, (_, segment)) in self.visuals.iter().enumerate() {
                let _ = write!(
                    graph,
                    "[{}:a]apad=whole_dur={}[a{i}];",
                    n + i,
                    segment.seconds
                );
            }
            for i in 0..n {
                let _ = write!(graph, "[a{i}]");
            }
        } else {
            for i in 0..n {
                let _ = write!(graph, "[{}:a]", n + i);
            }
        }
        let _ = write!(graph, "concat=n={n}:v=0:a=1[outa]");
        graph
    }

    /// Full `ffmpeg` argument list writing to `output`.
    pub fn ffmpeg_args(&self, settings: &EncodeSettings, output: &Path) -> Vec<OsString> {
        let rate = settings.fps.to_ffmpeg_arg();
        let mut args: Vec<OsString> = ["-y", "-loglevel", "error"]
            .into_iter()
            .map(OsString::from)
            .collect();

        for (frame, segment) in &self.visuals {
            args.extend(
                [
                    "-loop",
                    "1",
                    "-framerate",
                    rate.as_str(),
                    "-t",
                    &segment.seconds.to_string(),
                    "-i",
                ]
                .map(OsString::from),
            );
            args.push(frame.path.clone().into_os_string());
        }
        for audio in &self.narration {
            args.push("-i".into());
            args.push(audio.path.clone().into_os_string());
        }

        args.push("-filter_complex".into());
        args.push(self.filter_graph(settings).into());
        args.extend(
            [
                "-map",
                "[outv]",
                "-map",
                "[outa]",
                "-c:v",
                settings.video_codec.as_str(),
                "-c:a",
                settings.audio_codec.as_str(),
                "-r",
                rate.as_str(),
                "-pix_fmt",
                settings.pix_fmt.as_str(),
            ]
            .map(OsString::from),
        );
        if settings.faststart {
            args.push("-movflags".into());
            args.push("+faststart".into());
        }
        args.push(output.as_os_str().to_os_string());
        args
    }
}

/// Temporary sibling of `out` the encoder writes to before the final rename.
///
/// `clip.mp4` becomes `clip.partial.mp4`, keeping the extension so the container is inferred.
pub fn partial_path(out: &Path) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match out.extension() {
        Some(ext) => format!("{stem}.partial.{}", ext.to_string_lossy()),
        None => format!("{stem}.partial"),
    };
    out.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/job.rs"]
mod tests;
