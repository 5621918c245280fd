use crate::foundation::error::{QuizError, QuizResult};

/// Progress of one pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    FramesRendered,
    DurationsProbed,
    SegmentsComputed,
    Composed,
    Success,
    Failed,
}

impl RunState {
    /// The only non-failure successor of this state.
    pub fn next(self) -> Option<RunState> {
        match self {
            RunState::Idle => Some(RunState::FramesRendered),
            RunState::FramesRendered => Some(RunState::DurationsProbed),
            RunState::DurationsProbed => Some(RunState::SegmentsComputed),
            RunState::SegmentsComputed => Some(RunState::Composed),
            RunState::Composed => Some(RunState::Success),
            RunState::Success | RunState::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Success | RunState::Failed)
    }
}

/// Enforces the run state machine: one step forward at a time, or straight to `Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTracker {
    state: RunState,
    failed_at: Option<RunState>,
}

impl Default for RunTracker {
    fn default() -> Self {
        Self {
            state: RunState::Idle,
            failed_at: None,
        }
    }
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// State the run was in when it failed.
    pub fn failed_at(&self) -> Option<RunState> {
        self.failed_at
    }

    pub fn advance(&mut self, to: RunState) -> QuizResult<()> {
        if self.state.next() != Some(to) {
            return Err(QuizError::validation(format!(
                "illegal run transition {:?} -> {to:?}",
                self.state
            )));
        }
        tracing::debug!(from = ?self.state, to = ?to, "run state");
        self.state = to;
        Ok(())
    }

    /// Move to `Failed`, remembering where. A terminal tracker is left unchanged.
    pub fn fail(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.failed_at = Some(self.state);
        self.state = RunState::Failed;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/state.rs"]
mod tests;
