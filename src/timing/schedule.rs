use crate::foundation::core::Role;
use crate::foundation::error::{QuizError, QuizResult};

/// Whole seconds a frame stays on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub role: Role,
    pub seconds: u32,
}

/// Segments for one video, in role order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentPlan {
    pub question: Segment,
    pub answer: Segment,
}

impl SegmentPlan {
    pub fn segments(&self) -> [Segment; 2] {
        [self.question, self.answer]
    }

    /// Length of the output video in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.question.seconds + self.answer.seconds
    }

    /// Offset where the answer frame and answer narration begin.
    pub fn cut_seconds(&self) -> u32 {
        self.question.seconds
    }
}

/// Round a narration duration up to whole seconds, with a floor of one second.
///
/// The frame must never disappear before its narration ends, so the slack (under one second of
/// silent display) always trails the audio. Zero-length narration still shows its frame for one
/// second, keeping every segment positive.
pub fn segment_seconds(duration: f64) -> QuizResult<u32> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(QuizError::media_probe(format!(
            "narration duration must be finite and >= 0, got {duration}"
        )));
    }
    let secs = duration.ceil();
    if secs > f64::from(u32::MAX) {
        return Err(QuizError::media_probe(format!(
            "narration duration {duration}s is out of range"
        )));
    }
    Ok((secs as u32).max(1))
}

/// Compute both display segments from measured narration durations.
pub fn schedule(question_secs: f64, answer_secs: f64) -> QuizResult<SegmentPlan> {
    let plan = SegmentPlan {
        question: Segment {
            role: Role::Question,
            seconds: segment_seconds(question_secs)?,
        },
        answer: Segment {
            role: Role::Answer,
            seconds: segment_seconds(answer_secs)?,
        },
    };
    tracing::info!(
        question_secs,
        answer_secs,
        question_segment = plan.question.seconds,
        answer_segment = plan.answer.seconds,
        "segments scheduled"
    );
    Ok(plan)
}

#[cfg(test)]
#[path = "../../tests/unit/timing/schedule.rs"]
mod tests;
