use crate::quiz::model::Quiz;

/// Fixed phrases spoken around the quiz content.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NarrationStyle {
    /// Spoken after the options.
    pub question_outro: String,
    /// Spoken before the explanation; `{answer}` is replaced with the raw correct answer.
    pub answer_intro: String,
}

impl Default for NarrationStyle {
    fn default() -> Self {
        Self {
            question_outro: "정답은 무엇일까요?".to_string(),
            answer_intro: "정답은 {answer}번입니다.".to_string(),
        }
    }
}

/// Script for the question narration: question, every option, then the outro.
pub fn question_script(quiz: &Quiz, style: &NarrationStyle) -> String {
    let mut parts = Vec::with_capacity(quiz.options.len() + 2);
    parts.push(quiz.question.trim());
    parts.extend(quiz.options.iter().map(|o| o.trim()));
    parts.push(style.question_outro.trim());
    join_nonempty(&parts)
}

/// Script for the answer narration: the answer intro, then the explanation.
pub fn answer_script(quiz: &Quiz, style: &NarrationStyle) -> String {
    let intro = style
        .answer_intro
        .replace("{answer}", quiz.correct_answer.trim());
    join_nonempty(&[intro.trim(), quiz.explanation.trim()])
}

fn join_nonempty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/quiz/narration.rs"]
mod tests;
