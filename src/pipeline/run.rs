use std::path::{Path, PathBuf};

use crate::encode::{CompositionJob, Compositor};
use crate::foundation::core::Role;
use crate::foundation::error::{QuizError, QuizResult};
use crate::media::{DurationProbe, NarrationAudio, measure_pair};
use crate::pipeline::state::{RunState, RunTracker};
use crate::quiz::model::Quiz;
use crate::render::{Frame, FrameSource};
use crate::timing::{SegmentPlan, schedule};
use crate::workspace::Workspace;

/// Artifacts of a completed core run.
#[derive(Clone, Debug, PartialEq)]
pub struct CoreOutput {
    pub video: PathBuf,
    pub frames: [Frame; 2],
    pub narration: [NarrationAudio; 2],
    pub plan: SegmentPlan,
}

/// Quiz plus narration audio in, one muxed video out.
///
/// Stages run strictly in order; a failure at any stage stops the run before the next one
/// starts, so the encoder is never invoked with unmeasured or unrendered inputs.
pub struct CorePipeline<'a> {
    frames: &'a dyn FrameSource,
    probe: &'a dyn DurationProbe,
    compositor: &'a dyn Compositor,
}

impl<'a> CorePipeline<'a> {
    pub fn new(
        frames: &'a dyn FrameSource,
        probe: &'a dyn DurationProbe,
        compositor: &'a dyn Compositor,
    ) -> Self {
        Self {
            frames,
            probe,
            compositor,
        }
    }

    /// Run every stage, writing frames into `workspace` and the video to `out_path`.
    pub fn run(
        &self,
        workspace: &Workspace,
        quiz: &Quiz,
        question_audio: &Path,
        answer_audio: &Path,
        out_path: &Path,
    ) -> QuizResult<CoreOutput> {
        let mut tracker = RunTracker::new();
        self.run_tracked(
            workspace,
            quiz,
            [
                NarrationAudio::new(Role::Question, question_audio),
                NarrationAudio::new(Role::Answer, answer_audio),
            ],
            out_path,
            &mut tracker,
        )
    }

    /// Like [`CorePipeline::run`], reporting progress through `tracker`.
    ///
    /// On error the tracker ends in [`RunState::Failed`] with the stage that was reached.
    #[tracing::instrument(skip_all, fields(run_id = %workspace.run_id()))]
    pub fn run_tracked(
        &self,
        workspace: &Workspace,
        quiz: &Quiz,
        narration: [NarrationAudio; 2],
        out_path: &Path,
        tracker: &mut RunTracker,
    ) -> QuizResult<CoreOutput> {
        match self.stages(workspace, quiz, narration, out_path, tracker) {
            Ok(out) => {
                tracker.advance(RunState::Success)?;
                tracing::info!(video = %out.video.display(), "run succeeded");
                Ok(out)
            }
            Err(e) => {
                tracker.fail();
                tracing::error!(failed_at = ?tracker.failed_at(), "run failed: {e}");
                Err(e)
            }
        }
    }

    fn stages(
        &self,
        workspace: &Workspace,
        quiz: &Quiz,
        mut narration: [NarrationAudio; 2],
        out_path: &Path,
        tracker: &mut RunTracker,
    ) -> QuizResult<CoreOutput> {
        quiz.validate()?;

        let frames = self.frames.render_pair(
            quiz,
            &workspace.frame_path(Role::Question),
            &workspace.frame_path(Role::Answer),
        )?;
        for frame in &frames {
            if !frame.path.is_file() {
                return Err(QuizError::render(format!(
                    "{} frame '{}' was not written",
                    frame.role,
                    frame.path.display()
                )));
            }
        }
        tracker.advance(RunState::FramesRendered)?;

        let (question_secs, answer_secs) = measure_pair(&mut narration, self.probe)?;
        tracker.advance(RunState::DurationsProbed)?;

        let plan = schedule(question_secs, answer_secs)?;
        tracker.advance(RunState::SegmentsComputed)?;

        let job = CompositionJob::from_pair(frames.clone(), plan, narration.clone(), out_path)?;
        let video = self.compositor.compose(&job)?;
        tracker.advance(RunState::Composed)?;

        Ok(CoreOutput {
            video,
            frames,
            narration,
            plan,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
