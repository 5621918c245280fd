use std::path::Path;

use anyhow::Context as _;
use chrono::{DateTime, Utc};

use crate::foundation::error::{QuizError, QuizResult};

/// Option labels in display order.
pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One multiple-choice quiz.
///
/// Produced once by a quiz source and only read afterwards. Field names serialize in camelCase
/// (`correctAnswer`) to match generated quiz files.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub category: String,
    pub title: String,
    pub question: String,
    /// Exactly four options, `"A) ..."` through `"D) ..."`.
    pub options: Vec<String>,
    /// Answer letter, optionally followed by text (`"B"`, `"B) Jupiter"`).
    pub correct_answer: String,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}

/// Answer text chosen for display on the answer frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedAnswer<'a> {
    pub text: &'a str,
    /// `false` when no option matched and the raw `correct_answer` is shown instead.
    pub matched: bool,
}

impl Quiz {
    /// Load a quiz from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> QuizResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read quiz '{}'", path.display()))?;
        let quiz: Quiz = serde_json::from_slice(&bytes).map_err(|e| {
            QuizError::validation(format!("parse quiz JSON '{}': {e}", path.display()))
        })?;
        quiz.validate()?;
        Ok(quiz)
    }

    /// Check the structural invariants the frame layout relies on.
    pub fn validate(&self) -> QuizResult<()> {
        if self.question.trim().is_empty() {
            return Err(QuizError::validation("quiz question must be non-empty"));
        }
        if self.options.len() != OPTION_LABELS.len() {
            return Err(QuizError::validation(format!(
                "quiz must have exactly {} options, got {}",
                OPTION_LABELS.len(),
                self.options.len()
            )));
        }
        for (opt, label) in self.options.iter().zip(OPTION_LABELS) {
            if option_label(opt) != Some(label) {
                return Err(QuizError::validation(format!(
                    "option '{opt}' must start with '{label})'"
                )));
            }
        }
        Ok(())
    }

    /// Answer letter named by `correct_answer`: its first character uppercased, or the label at
    /// a leading option number (`"2"`, `"2번"` give `B`).
    pub fn answer_letter(&self) -> Option<char> {
        let answer = self.correct_answer.trim_start();
        let digits: String = answer.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            return digits
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| OPTION_LABELS.get(i).copied());
        }
        answer.chars().next().map(|c| c.to_ascii_uppercase())
    }

    /// Option whose label matches the answer letter, if any.
    pub fn correct_option(&self) -> Option<&str> {
        let letter = self.answer_letter()?;
        self.options
            .iter()
            .find(|opt| option_label(opt) == Some(letter))
            .map(String::as_str)
    }

    /// Text to show as the answer: the matching option, or the raw `correct_answer`.
    ///
    /// A mismatch is a recoverable data-shape problem, never an error.
    pub fn resolved_answer(&self) -> ResolvedAnswer<'_> {
        match self.correct_option() {
            Some(text) => ResolvedAnswer {
                text,
                matched: true,
            },
            None => {
                tracing::warn!(
                    correct_answer = %self.correct_answer,
                    "correct answer matches no option label; showing raw answer"
                );
                ResolvedAnswer {
                    text: self.correct_answer.trim(),
                    matched: false,
                }
            }
        }
    }
}

/// Label letter of an option string such as `"C) Mars"`.
pub(crate) fn option_label(option: &str) -> Option<char> {
    let mut chars = option.trim_start().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    (OPTION_LABELS.contains(&letter) && chars.next() == Some(')')).then_some(letter)
}

#[cfg(test)]
#[path = "../../tests/unit/quiz/model.rs"]
mod tests;
