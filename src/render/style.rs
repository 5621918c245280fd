use std::path::PathBuf;

use crate::foundation::error::{QuizError, QuizResult};

/// Per-block character budgets used when wrapping frame text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WrapBudgets {
    pub question: usize,
    pub option: usize,
    pub answer: usize,
    pub explanation: usize,
}

impl Default for WrapBudgets {
    fn default() -> Self {
        Self {
            question: 25,
            option: 25,
            answer: 30,
            explanation: 22,
        }
    }
}

/// Colours as `#rrggbb` strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [String; 3],
    pub text: String,
    pub accent: String,
    pub secondary_accent: String,
    pub success: String,
    pub success_secondary: String,
    pub muted_text: String,
    pub option_fill: [String; 2],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [
                "#1a1a2e".to_string(),
                "#16213e".to_string(),
                "#0f3460".to_string(),
            ],
            text: "#ffffff".to_string(),
            accent: "#e94560".to_string(),
            secondary_accent: "#533483".to_string(),
            success: "#00d2ff".to_string(),
            success_secondary: "#3a7bd5".to_string(),
            muted_text: "#e2e8f0".to_string(),
            option_fill: ["#2d3748".to_string(), "#4a5568".to_string()],
        }
    }
}

impl Palette {
    fn colors(&self) -> impl Iterator<Item = &String> {
        self.background
            .iter()
            .chain(self.option_fill.iter())
            .chain([
                &self.text,
                &self.accent,
                &self.secondary_accent,
                &self.success,
                &self.success_secondary,
                &self.muted_text,
            ])
    }
}

/// Text and visual settings shared by both frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameStyle {
    /// CSS font-family list written into the SVG.
    pub font_family: String,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files.
    pub font_dirs: Vec<PathBuf>,
    pub question_banner: String,
    pub countdown_caption: String,
    pub answer_banner: String,
    pub call_to_action: String,
    pub wrap: WrapBudgets,
    pub palette: Palette,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            font_family: "'Noto Sans CJK KR', 'Noto Sans KR', 'Apple SD Gothic Neo', \
                          'Malgun Gothic', Arial, sans-serif"
                .to_string(),
            font_dirs: Vec::new(),
            question_banner: "오늘의 퀴즈".to_string(),
            countdown_caption: "3초 후 정답 공개!".to_string(),
            answer_banner: "정답!".to_string(),
            call_to_action: "구독 & 좋아요!".to_string(),
            wrap: WrapBudgets::default(),
            palette: Palette::default(),
        }
    }
}

impl FrameStyle {
    pub fn validate(&self) -> QuizResult<()> {
        let w = self.wrap;
        if w.question == 0 || w.option == 0 || w.answer == 0 || w.explanation == 0 {
            return Err(QuizError::config("wrap budgets must be non-zero"));
        }
        if let Some(bad) = self.palette.colors().find(|c| !is_hex_color(c)) {
            return Err(QuizError::config(format!(
                "palette colour '{bad}' is not of the form #rrggbb"
            )));
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
