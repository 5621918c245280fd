#![forbid(unsafe_code)]
//! Short vertical quiz videos: two rendered frames, two narration tracks, one muxed MP4.
//!
//! The core path is [`pipeline::CorePipeline`]: render the question and answer frames, probe the
//! narration durations, round them up into display segments and hand everything to a
//! [`encode::Compositor`].

pub mod config;
pub mod encode;
pub mod foundation;
pub mod layout;
pub mod media;
pub mod pipeline;
pub mod quiz;
pub mod render;
pub mod runlog;
pub mod services;
pub mod timing;
pub mod workspace;

pub use config::Config;
pub use encode::{CompositionJob, Compositor, EncodeSettings, FfmpegCompositor};
pub use foundation::core::{Canvas, Fps, Role, RunId};
pub use foundation::error::{QuizError, QuizResult};
pub use layout::{wrap_lines, wrap_text, wrap_text_capped};
pub use media::{DurationProbe, FfprobeDurationProbe, NarrationAudio};
pub use pipeline::{Automation, CorePipeline, RunSlot, RunState};
pub use quiz::{Quiz, parse_quiz_text};
pub use render::{Frame, FrameRenderer, FrameSource, FrameStyle};
pub use timing::{Segment, SegmentPlan, schedule, segment_seconds};
pub use workspace::Workspace;
