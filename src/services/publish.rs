use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{QuizError, QuizResult};
use crate::quiz::model::Quiz;
use crate::services::{PublishReceipt, Publisher};

const TITLE_PREFIXES: [&str; 5] = [
    "🤔 당신은 알고 있나요?",
    "🧠 신기한 퀴즈",
    "😮 놀라운 사실",
    "🎯 퀴즈 도전",
    "🤓 알쏭달쏭 퀴즈",
];

const TAGS: [&str; 17] = [
    "퀴즈", "상식", "교육", "학습", "지식", "재미", "쇼츠", "quiz", "knowledge", "education",
    "learning", "facts", "trivia", "shorts", "한국어퀴즈", "상식퀴즈", "교양",
];

/// Title, description and tags published alongside a video.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PublishMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl PublishMetadata {
    /// Metadata for `quiz`; `seed` picks the title prefix.
    pub fn for_quiz(quiz: &Quiz, seed: u64) -> Self {
        let prefix = TITLE_PREFIXES[(seed % TITLE_PREFIXES.len() as u64) as usize];
        let title = format!("{prefix} {} #퀴즈 #상식 #쇼츠", quiz.title);
        let description = format!(
            "🎯 오늘의 흥미진진한 퀴즈를 풀어보세요!\n\n\
             {}에 대한 신기한 사실을 알려드립니다.\n\n\
             🔔 구독과 좋아요는 큰 힘이 됩니다!\n\
             💬 댓글로 여러분의 생각을 들려주세요!\n\n\
             #퀴즈 #상식 #교육 #학습 #재미 #지식 #쇼츠 #shorts\n\
             #quiz #knowledge #education #learning #facts #trivia",
            quiz.title
        );
        Self {
            title,
            description,
            tags: TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// [`Publisher`] that copies videos into a local directory, with a JSON metadata sidecar.
#[derive(Clone, Debug)]
pub struct DirectoryPublisher {
    dir: PathBuf,
}

impl DirectoryPublisher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Publisher for DirectoryPublisher {
    #[tracing::instrument(skip_all, fields(video = %video.display()))]
    fn publish(&self, video: &Path, metadata: &PublishMetadata) -> QuizResult<PublishReceipt> {
        let Some(name) = video.file_name() else {
            return Err(QuizError::validation(format!(
                "video path '{}' has no file name",
                video.display()
            )));
        };
        if !video.is_file() {
            return Err(QuizError::service(format!(
                "video '{}' does not exist",
                video.display()
            )));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create publish directory '{}'", self.dir.display()))?;

        let dest = self.dir.join(name);
        std::fs::copy(video, &dest)
            .with_context(|| format!("copy '{}' to '{}'", video.display(), dest.display()))?;

        let sidecar = dest.with_extension("json");
        let json = serde_json::to_vec_pretty(metadata).context("serialize publish metadata")?;
        std::fs::write(&sidecar, json)
            .with_context(|| format!("write '{}'", sidecar.display()))?;

        tracing::info!(location = %dest.display(), "video published");
        Ok(PublishReceipt {
            location: dest,
            title: metadata.title.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/publish.rs"]
mod tests;
