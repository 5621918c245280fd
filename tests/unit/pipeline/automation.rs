use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;

use super::*;
use crate::encode::CompositionJob;
use crate::foundation::core::Canvas;
use crate::foundation::error::QuizError;
use crate::pipeline::state::RunState;
use crate::render::Frame;
use crate::runlog::RunStatus;

fn quiz() -> Quiz {
    Quiz {
        category: "우주의 미스터리".to_string(),
        title: "토성의 위성".to_string(),
        question: "위성이 가장 많은 행성은?".to_string(),
        options: vec![
            "A) 지구".to_string(),
            "B) 토성".to_string(),
            "C) 화성".to_string(),
            "D) 금성".to_string(),
        ],
        correct_answer: "B".to_string(),
        explanation: "토성은 확인된 위성이 백 개가 넘습니다.".to_string(),
        timestamp: Utc::now(),
    }
}

/// Serves quizzes until `fail_after` calls, then fails.
struct CountingSource {
    calls: AtomicUsize,
    fail_after: usize,
}

impl QuizSource for CountingSource {
    fn generate_quiz(&self) -> QuizResult<Quiz> {
        if self.calls.fetch_add(1, Ordering::SeqCst) >= self.fail_after {
            return Err(QuizError::data_shape("generated quiz has no question"));
        }
        Ok(quiz())
    }
}

#[derive(Default)]
struct FakeSpeech {
    scripts: Mutex<Vec<String>>,
    fail: bool,
}

impl SpeechSynthesizer for FakeSpeech {
    fn synthesize(&self, text: &str, out_path: &Path) -> QuizResult<()> {
        if self.fail {
            return Err(QuizError::service("POST /v1/audio/speech failed: 500"));
        }
        self.scripts.lock().unwrap().push(text.to_string());
        std::fs::write(out_path, text.as_bytes()).unwrap();
        Ok(())
    }

    fn extension(&self) -> &str {
        "mp3"
    }
}

struct StubFrames;

impl FrameSource for StubFrames {
    fn render_pair(&self, _: &Quiz, q: &Path, a: &Path) -> QuizResult<[Frame; 2]> {
        std::fs::write(q, b"png").unwrap();
        std::fs::write(a, b"png").unwrap();
        let canvas = Canvas::VERTICAL_HD;
        Ok([
            Frame {
                role: Role::Question,
                path: q.to_path_buf(),
                canvas,
            },
            Frame {
                role: Role::Answer,
                path: a.to_path_buf(),
                canvas,
            },
        ])
    }
}

struct FixedProbe;

impl DurationProbe for FixedProbe {
    fn probe_seconds(&self, path: &Path) -> QuizResult<f64> {
        let name = path.file_name().unwrap().to_string_lossy();
        Ok(if name.starts_with("question") { 7.2 } else { 14.6 })
    }
}

struct TouchCompositor;

impl Compositor for TouchCompositor {
    fn compose(&self, job: &CompositionJob) -> QuizResult<PathBuf> {
        std::fs::create_dir_all(job.out_path.parent().unwrap()).unwrap();
        std::fs::write(&job.out_path, b"mp4").unwrap();
        Ok(job.out_path.clone())
    }
}

struct RecordingPublisher(Mutex<Vec<PathBuf>>);

impl Publisher for RecordingPublisher {
    fn publish(&self, video: &Path, metadata: &PublishMetadata) -> QuizResult<PublishReceipt> {
        self.0.lock().unwrap().push(video.to_path_buf());
        Ok(PublishReceipt {
            location: video.to_path_buf(),
            title: metadata.title.clone(),
        })
    }
}

fn config(root: &Path) -> Config {
    Config {
        workspace_root: root.join("work"),
        output_dir: root.join("videos"),
        run_log: Some(root.join("runs.jsonl")),
        ..Config::default()
    }
}

#[test]
fn full_run_produces_video_and_log() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(tmp.path());
    let source = CountingSource {
        calls: AtomicUsize::new(0),
        fail_after: usize::MAX,
    };
    let speech = FakeSpeech::default();
    let publisher = RecordingPublisher(Mutex::new(Vec::new()));
    let slot = RunSlot::new();
    let automation = Automation::new(
        &cfg,
        Services {
            source: &source,
            speech: &speech,
            frames: &StubFrames,
            probe: &FixedProbe,
            compositor: &TouchCompositor,
            publisher: Some(&publisher),
        },
        &slot,
    );

    let summary = automation.run_once().unwrap().unwrap();

    assert_eq!(summary.output.plan.total_seconds(), 23);
    assert_eq!(
        summary.output.video,
        tmp.path()
            .join("videos")
            .join(format!("quiz_{}.mp4", summary.run_id))
    );
    assert!(summary.output.video.is_file());
    assert_eq!(publisher.0.lock().unwrap().len(), 1);
    assert!(summary.published.unwrap().title.contains("토성의 위성"));
    assert!(!tmp.path().join("work").join(summary.run_id.as_str()).exists());
    assert!(!slot.is_busy());

    let scripts = speech.scripts.lock().unwrap();
    assert!(scripts.iter().any(|s| s.starts_with("위성이 가장 많은 행성은?")));
    assert!(scripts.iter().any(|s| s.starts_with("정답은 B번입니다.")));

    let records = RunLog::new(tmp.path().join("runs.jsonl")).read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, RunStatus::Success);
    assert_eq!(records[0].run_id, summary.run_id);
}

#[test]
fn busy_slot_skips_the_trigger() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(tmp.path());
    let source = CountingSource {
        calls: AtomicUsize::new(0),
        fail_after: usize::MAX,
    };
    let speech = FakeSpeech::default();
    let slot = RunSlot::new();
    let _held = slot.try_acquire(RunId::parse("other").unwrap()).unwrap();
    let automation = Automation::new(
        &cfg,
        Services {
            source: &source,
            speech: &speech,
            frames: &StubFrames,
            probe: &FixedProbe,
            compositor: &TouchCompositor,
            publisher: None,
        },
        &slot,
    );

    assert!(automation.run_once().unwrap().is_none());
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    assert!(!tmp.path().join("runs.jsonl").exists());
}

#[test]
fn speech_failure_is_logged_with_quiz() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(tmp.path());
    let source = CountingSource {
        calls: AtomicUsize::new(0),
        fail_after: usize::MAX,
    };
    let speech = FakeSpeech {
        fail: true,
        ..FakeSpeech::default()
    };
    let slot = RunSlot::new();
    let automation = Automation::new(
        &cfg,
        Services {
            source: &source,
            speech: &speech,
            frames: &StubFrames,
            probe: &FixedProbe,
            compositor: &TouchCompositor,
            publisher: None,
        },
        &slot,
    );

    let err = automation.run_once().unwrap_err();
    assert!(matches!(err, QuizError::Service(_)));
    assert!(!slot.is_busy());

    let records = RunLog::new(tmp.path().join("runs.jsonl")).read_all().unwrap();
    assert_eq!(records[0].status, RunStatus::Failed);
    assert_eq!(records[0].failed_at, Some(RunState::Idle));
    assert_eq!(records[0].quiz.as_ref().unwrap().title, "토성의 위성");
    assert!(records[0].video.is_none());
}

#[test]
fn run_many_stops_at_first_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(tmp.path());
    let source = CountingSource {
        calls: AtomicUsize::new(0),
        fail_after: 2,
    };
    let speech = FakeSpeech::default();
    let slot = RunSlot::new();
    let automation = Automation::new(
        &cfg,
        Services {
            source: &source,
            speech: &speech,
            frames: &StubFrames,
            probe: &FixedProbe,
            compositor: &TouchCompositor,
            publisher: None,
        },
        &slot,
    );

    let err = automation.run_many(5).unwrap_err();
    assert!(matches!(err, QuizError::DataShape(_)));
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);

    let records = RunLog::new(tmp.path().join("runs.jsonl")).read_all().unwrap();
    let statuses: Vec<_> = records.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        [RunStatus::Success, RunStatus::Success, RunStatus::Failed]
    );
}
