//! Append-only JSON-lines record of pipeline runs.

use std::io::{BufRead as _, BufReader, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Utc};

use crate::foundation::core::RunId;
use crate::foundation::error::{QuizError, QuizResult};
use crate::pipeline::state::RunState;
use crate::quiz::model::Quiz;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
}

/// One line of the run log.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub status: RunStatus,
    pub run_id: RunId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<RunState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunRecord {
    pub fn success(run_id: RunId, quiz: Quiz, video: PathBuf) -> Self {
        Self {
            timestamp: Utc::now(),
            status: RunStatus::Success,
            run_id,
            quiz: Some(quiz),
            video: Some(video),
            published: None,
            failed_at: None,
            error: None,
        }
    }

    pub fn failure(run_id: RunId, quiz: Option<Quiz>, error: &QuizError) -> Self {
        Self {
            timestamp: Utc::now(),
            status: RunStatus::Failed,
            run_id,
            quiz,
            video: None,
            published: None,
            failed_at: None,
            error: Some(error.to_string()),
        }
    }
}

/// Run log file; created on first append.
#[derive(Clone, Debug)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &RunRecord) -> QuizResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create run log directory '{}'", parent.display()))?;
        }
        let mut line = serde_json::to_string(record).context("serialize run record")?;
        line.push('\n');
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open run log '{}'", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("append to run log '{}'", self.path.display()))?;
        Ok(())
    }

    /// Every record in the log, oldest first. A missing file reads as empty.
    pub fn read_all(&self) -> QuizResult<Vec<RunRecord>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("open run log '{}'", self.path.display()))
                    .into());
            }
        };
        let mut out = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("read run log '{}'", self.path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|e| {
                QuizError::data_shape(format!(
                    "run log '{}' line {}: {e}",
                    self.path.display(),
                    idx + 1
                ))
            })?;
            out.push(record);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../tests/unit/runlog.rs"]
mod tests;
