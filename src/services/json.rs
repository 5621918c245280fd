use std::path::PathBuf;

use crate::foundation::error::QuizResult;
use crate::quiz::model::Quiz;
use crate::services::QuizSource;

/// [`QuizSource`] that re-reads one quiz JSON file on every call.
#[derive(Clone, Debug)]
pub struct JsonQuizSource {
    path: PathBuf,
}

impl JsonQuizSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuizSource for JsonQuizSource {
    fn generate_quiz(&self) -> QuizResult<Quiz> {
        tracing::debug!(path = %self.path.display(), "loading quiz");
        Quiz::from_path(&self.path)
    }
}
