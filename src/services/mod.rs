//! External collaborators around the core pipeline: quiz generation, speech synthesis and
//! publishing.
//!
//! The core only ever sees a [`Quiz`] and two audio paths; these traits are how the `run`
//! command obtains them and what it does with the finished video.

/// Quiz loaded from a JSON file.
pub mod json;
/// OpenAI-compatible chat and speech endpoints.
pub mod openai;
/// Generation prompt and category choice.
pub mod prompt;
/// Publishing finished videos.
pub mod publish;

use std::path::{Path, PathBuf};

use crate::foundation::error::QuizResult;
use crate::quiz::model::Quiz;

pub use json::JsonQuizSource;
pub use openai::{OpenAiClient, OpenAiQuizSource, OpenAiSettings, OpenAiSpeech};
pub use publish::{DirectoryPublisher, PublishMetadata};

/// Supplies one quiz per call.
pub trait QuizSource: Send + Sync {
    fn generate_quiz(&self) -> QuizResult<Quiz>;
}

/// Turns a narration script into an audio file.
pub trait SpeechSynthesizer: Send + Sync {
    /// Write audio for `text` to `out_path`, replacing any file there.
    fn synthesize(&self, text: &str, out_path: &Path) -> QuizResult<()>;

    /// File extension of the produced audio (`"mp3"`).
    fn extension(&self) -> &str;
}

/// Where a published video ended up.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PublishReceipt {
    pub location: PathBuf,
    pub title: String,
}

/// Hands a finished video to its destination.
pub trait Publisher: Send + Sync {
    fn publish(&self, video: &Path, metadata: &PublishMetadata) -> QuizResult<PublishReceipt>;
}
