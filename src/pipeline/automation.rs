use std::path::PathBuf;

use crate::config::Config;
use crate::encode::Compositor;
use crate::foundation::core::{Role, RunId};
use crate::foundation::error::QuizResult;
use crate::media::{DurationProbe, NarrationAudio};
use crate::pipeline::run::{CoreOutput, CorePipeline};
use crate::pipeline::slot::RunSlot;
use crate::pipeline::state::RunTracker;
use crate::quiz::model::Quiz;
use crate::quiz::narration::{answer_script, question_script};
use crate::render::FrameSource;
use crate::runlog::{RunLog, RunRecord};
use crate::services::prompt::time_seed;
use crate::services::{PublishMetadata, PublishReceipt, Publisher, QuizSource, SpeechSynthesizer};
use crate::workspace::{Workspace, video_path};

/// Collaborators of a full generation run.
pub struct Services<'a> {
    pub source: &'a dyn QuizSource,
    pub speech: &'a dyn SpeechSynthesizer,
    pub frames: &'a dyn FrameSource,
    pub probe: &'a dyn DurationProbe,
    pub compositor: &'a dyn Compositor,
    pub publisher: Option<&'a dyn Publisher>,
}

/// Outcome of one successful full run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub run_id: RunId,
    pub quiz: Quiz,
    pub output: CoreOutput,
    pub published: Option<PublishReceipt>,
}

/// Quiz generation, narration, core pipeline, publishing and run logging, one run at a time.
pub struct Automation<'a> {
    config: &'a Config,
    services: Services<'a>,
    slot: &'a RunSlot,
    run_log: Option<RunLog>,
}

impl<'a> Automation<'a> {
    pub fn new(config: &'a Config, services: Services<'a>, slot: &'a RunSlot) -> Self {
        let run_log = config.run_log.as_ref().map(|p| RunLog::new(p.clone()));
        Self {
            config,
            services,
            slot,
            run_log,
        }
    }

    /// Perform one full run. Returns `Ok(None)` when another run holds the slot.
    pub fn run_once(&self) -> QuizResult<Option<RunSummary>> {
        let Some(ticket) = self.slot.try_acquire(RunId::generate()) else {
            tracing::warn!("a run is already in progress; skipping this trigger");
            return Ok(None);
        };
        let run_id = ticket.run_id().clone();

        let mut quiz = None;
        let mut tracker = RunTracker::new();
        let result = self.attempt(&run_id, &mut quiz, &mut tracker);

        let record = match &result {
            Ok(summary) => {
                let mut r = RunRecord::success(
                    run_id.clone(),
                    summary.quiz.clone(),
                    summary.output.video.clone(),
                );
                r.published = summary.published.as_ref().map(|p| p.location.clone());
                r
            }
            Err(e) => {
                tracker.fail();
                let mut r = RunRecord::failure(run_id.clone(), quiz, e);
                r.failed_at = tracker.failed_at();
                r
            }
        };
        if let Some(log) = &self.run_log
            && let Err(e) = log.append(&record)
        {
            tracing::warn!(path = %log.path().display(), "failed to write run log: {e}");
        }

        result.map(Some)
    }

    /// Run `count` times back to back, stopping at the first failure.
    pub fn run_many(&self, count: usize) -> QuizResult<Vec<RunSummary>> {
        let mut done = Vec::with_capacity(count);
        for i in 0..count {
            tracing::info!(run = i + 1, of = count, "starting run");
            if let Some(summary) = self.run_once()? {
                done.push(summary);
            }
        }
        Ok(done)
    }

    #[tracing::instrument(skip_all, fields(run_id = %run_id))]
    fn attempt(
        &self,
        run_id: &RunId,
        quiz_out: &mut Option<Quiz>,
        tracker: &mut RunTracker,
    ) -> QuizResult<RunSummary> {
        let quiz = self.services.source.generate_quiz()?;
        quiz.validate()?;
        tracing::info!(title = %quiz.title, category = %quiz.category, "quiz ready");
        *quiz_out = Some(quiz.clone());

        let workspace = Workspace::create(&self.config.workspace_root, run_id.clone())?;
        let narration = self.synthesize(&workspace, &quiz)?;

        let out_path = video_path(&self.config.output_dir, run_id);
        let core = CorePipeline::new(
            self.services.frames,
            self.services.probe,
            self.services.compositor,
        );
        let output = core.run_tracked(&workspace, &quiz, narration, &out_path, tracker)?;

        let published = match self.services.publisher {
            Some(publisher) => {
                let metadata = PublishMetadata::for_quiz(&quiz, time_seed());
                Some(publisher.publish(&output.video, &metadata)?)
            }
            None => None,
        };

        if self.config.keep_workspace {
            tracing::debug!(dir = %workspace.dir().display(), "keeping workspace");
        } else {
            workspace.cleanup();
        }

        Ok(RunSummary {
            run_id: run_id.clone(),
            quiz,
            output,
            published,
        })
    }

    fn synthesize(&self, workspace: &Workspace, quiz: &Quiz) -> QuizResult<[NarrationAudio; 2]> {
        let style = &self.config.narration;
        let ext = self.services.speech.extension();
        let q_path: PathBuf = workspace.narration_path(Role::Question, ext);
        let a_path: PathBuf = workspace.narration_path(Role::Answer, ext);
        let q_text = question_script(quiz, style);
        let a_text = answer_script(quiz, style);

        let (q, a) = rayon::join(
            || self.services.speech.synthesize(&q_text, &q_path),
            || self.services.speech.synthesize(&a_text, &a_path),
        );
        q?;
        a?;
        Ok([
            NarrationAudio::new(Role::Question, q_path),
            NarrationAudio::new(Role::Answer, a_path),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/automation.rs"]
mod tests;
