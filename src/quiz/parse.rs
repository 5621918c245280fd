use chrono::Utc;

use crate::foundation::error::{QuizError, QuizResult};
use crate::quiz::model::{OPTION_LABELS, Quiz, option_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Preamble,
    Title,
    Question,
    Options,
    Answer,
    Explanation,
}

const TITLE_LABELS: &[&str] = &["제목:", "title:"];
const QUESTION_LABELS: &[&str] = &["질문:", "question:"];
const ANSWER_LABELS: &[&str] = &["정답:", "answer:", "correct answer:"];
const EXPLANATION_LABELS: &[&str] = &["설명:", "explanation:"];

#[derive(Default)]
struct Draft {
    title: String,
    question: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
}

impl Draft {
    fn slot(&mut self, section: Section) -> Option<&mut String> {
        match section {
            Section::Preamble => None,
            Section::Title => Some(&mut self.title),
            Section::Question => Some(&mut self.question),
            Section::Options => self.options.last_mut(),
            Section::Answer => Some(&mut self.answer),
            Section::Explanation => Some(&mut self.explanation),
        }
    }
}

/// Parse generated quiz prose into a [`Quiz`].
///
/// The text is read line by line as a sequence of labelled sections (`제목:`/`Title:`,
/// `질문:`/`Question:`, `A)`..`D)`, `정답:`/`Answer:`, `설명:`/`Explanation:`). A line without a
/// label continues the current section. Text before the first label is ignored.
///
/// Fails with [`QuizError::DataShape`] when the result has no question, no answer, or not
/// exactly four options.
pub fn parse_quiz_text(text: &str, category: &str) -> QuizResult<Quiz> {
    let mut draft = Draft::default();
    let mut section = Section::Preamble;

    for raw in text.lines() {
        let line = strip_decoration(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = strip_label(line, TITLE_LABELS) {
            section = Section::Title;
            draft.title = rest.to_string();
        } else if let Some(rest) = strip_label(line, QUESTION_LABELS) {
            section = Section::Question;
            draft.question = rest.to_string();
        } else if let Some(rest) = strip_label(line, ANSWER_LABELS) {
            section = Section::Answer;
            draft.answer = rest.to_string();
        } else if let Some(rest) = strip_label(line, EXPLANATION_LABELS) {
            section = Section::Explanation;
            draft.explanation = rest.to_string();
        } else if option_label(line).is_some() {
            section = Section::Options;
            draft.options.push(line.to_string());
        } else if let Some(slot) = draft.slot(section) {
            append_continuation(slot, line);
        }
    }

    if draft.question.is_empty() {
        return Err(QuizError::data_shape("generated quiz has no question"));
    }
    if draft.options.len() != OPTION_LABELS.len() {
        return Err(QuizError::data_shape(format!(
            "generated quiz has {} options, expected {}",
            draft.options.len(),
            OPTION_LABELS.len()
        )));
    }
    if draft.answer.is_empty() {
        return Err(QuizError::data_shape("generated quiz has no answer"));
    }

    let title = if draft.title.is_empty() {
        format!("{category} 퀴즈")
    } else {
        draft.title
    };

    let quiz = Quiz {
        category: category.to_string(),
        title,
        question: draft.question,
        options: draft.options,
        correct_answer: draft.answer,
        explanation: draft.explanation,
        timestamp: Utc::now(),
    };
    quiz.validate()
        .map_err(|e| QuizError::data_shape(format!("generated quiz is malformed: {e}")))?;
    Ok(quiz)
}

// Chat models like to wrap labels in markdown (`**제목:**`, `### Question:`).
fn strip_decoration(line: &str) -> &str {
    line.trim().trim_start_matches(['#', '*', '-']).trim()
}

fn strip_label<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    labels.iter().find_map(|label| {
        let head = line.get(..label.len())?;
        head.eq_ignore_ascii_case(label)
            .then(|| line[label.len()..].trim().trim_matches('*').trim())
    })
}

fn append_continuation(slot: &mut String, line: &str) {
    if !slot.is_empty() {
        slot.push(' ');
    }
    slot.push_str(line);
}

#[cfg(test)]
#[path = "../../tests/unit/quiz/parse.rs"]
mod tests;
