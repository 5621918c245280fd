//! Video composition.
//!
//! A [`CompositionJob`] pairs frames with their display segments and narration assets; a
//! [`Compositor`] turns it into one muxed video file.

/// `ffmpeg`-backed compositor.
pub mod ffmpeg;
/// Composition job description and encoder arguments.
pub mod job;

use std::path::PathBuf;

use crate::foundation::error::QuizResult;

pub use ffmpeg::FfmpegCompositor;
pub use job::{CompositionJob, EncodeSettings};

/// Produces a video from a composition job.
pub trait Compositor: Send + Sync {
    /// Encode `job` and return the final output path.
    ///
    /// On error no file is left at `job.out_path`.
    fn compose(&self, job: &CompositionJob) -> QuizResult<PathBuf>;
}
