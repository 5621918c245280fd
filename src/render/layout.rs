use kurbo::Rect;

use crate::foundation::core::{Canvas, Role};
use crate::layout::wrap::{wrap_lines, wrap_text_capped};
use crate::quiz::model::Quiz;
use crate::render::style::FrameStyle;

const BANNER_Y: f64 = 200.0;

const QUESTION_TOP_Y: f64 = 350.0;
const QUESTION_LINE_PITCH: f64 = 50.0;
const QUESTION_TO_OPTIONS_GAP: f64 = 40.0;

const OPTIONS_FIRST_CENTER_Y: f64 = 650.0;
const OPTION_PITCH: f64 = 150.0;
const OPTION_MIN_GAP: f64 = 8.0;
const OPTION_BOX_HEIGHT: f64 = 110.0;
const OPTION_MARGIN_X: f64 = 60.0;
const OPTION_LINE_PITCH: f64 = 35.0;
// Visual centering of a 34px line inside its box.
const OPTION_BASELINE_NUDGE: f64 = -5.0;

const COUNTDOWN_FROM_BOTTOM: f64 = 150.0;
const COUNTDOWN_CLEARANCE: f64 = 60.0;

const ANSWER_TOP_Y: f64 = 400.0;
const ANSWER_LINE_PITCH: f64 = 60.0;
const ANSWER_MAX_LINES: usize = 3;
const EXPLANATION_TOP_Y: f64 = 600.0;
const EXPLANATION_GAP: f64 = 110.0;
const EXPLANATION_LINE_PITCH: f64 = 70.0;
const CTA_FROM_BOTTOM: f64 = 100.0;
const CTA_CLEARANCE: f64 = 90.0;

/// Typographic role of a text line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextClass {
    Banner,
    Question,
    Option,
    Countdown,
    SuccessBanner,
    Answer,
    Explanation,
    CallToAction,
}

impl TextClass {
    pub fn font_size(self) -> f64 {
        match self {
            TextClass::Banner => 44.0,
            TextClass::Question => 48.0,
            TextClass::Option => 34.0,
            TextClass::Countdown | TextClass::CallToAction => 32.0,
            TextClass::SuccessBanner => 56.0,
            TextClass::Answer => 60.0,
            TextClass::Explanation => 55.0,
        }
    }

    pub fn bold(self) -> bool {
        !matches!(self, TextClass::Question | TextClass::Explanation)
    }
}

/// One centred line of text; `y` is the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub class: TextClass,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Resolved geometry of one frame, independent of any raster backend.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLayout {
    pub role: Role,
    pub canvas: Canvas,
    /// Option boxes in A-D order (question frame only).
    pub option_boxes: Vec<Rect>,
    pub lines: Vec<TextLine>,
}

impl FrameLayout {
    fn new(role: Role, canvas: Canvas) -> Self {
        Self {
            role,
            canvas,
            option_boxes: Vec::new(),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, class: TextClass, text: impl Into<String>, y: f64) {
        let x = self.canvas.center_x();
        self.lines.push(TextLine {
            class,
            text: text.into(),
            x,
            y,
        });
    }

    /// Lines of one class, in layout order.
    pub fn lines_of(&self, class: TextClass) -> impl Iterator<Item = &TextLine> {
        self.lines.iter().filter(move |l| l.class == class)
    }
}

/// Lay out the question frame: banner, question, stacked options, countdown.
///
/// Options keep a fixed box height. The stack starts below the question and its pitch shrinks
/// when needed so the last box stays clear of the countdown caption. A question too long to
/// leave room for the stack at its minimum pitch is cut short with an ellipsis.
pub fn layout_question(quiz: &Quiz, canvas: Canvas, style: &FrameStyle) -> FrameLayout {
    let mut layout = FrameLayout::new(Role::Question, canvas);
    let height = f64::from(canvas.height);

    layout.push(TextClass::Banner, style.question_banner.as_str(), BANNER_Y);

    let half_box = OPTION_BOX_HEIGHT / 2.0;
    let stack_bottom = height - COUNTDOWN_FROM_BOTTOM - COUNTDOWN_CLEARANCE;
    let min_stack =
        quiz.options.len().saturating_sub(1) as f64 * (OPTION_BOX_HEIGHT + OPTION_MIN_GAP);
    let question_limit = stack_bottom - OPTION_BOX_HEIGHT - min_stack - QUESTION_TO_OPTIONS_GAP;
    let max_question_lines = lines_within(QUESTION_TOP_Y, QUESTION_LINE_PITCH, question_limit);

    let mut last_question_y = QUESTION_TOP_Y;
    let question = wrap_text_capped(&quiz.question, style.wrap.question, max_question_lines);
    for (i, line) in question.into_iter().enumerate() {
        last_question_y = QUESTION_TOP_Y + i as f64 * QUESTION_LINE_PITCH;
        layout.push(TextClass::Question, line, last_question_y);
    }

    let first_center =
        OPTIONS_FIRST_CENTER_Y.max(last_question_y + QUESTION_TO_OPTIONS_GAP + half_box);
    let pitch = option_pitch(quiz.options.len(), first_center, stack_bottom - half_box);

    let box_width = (f64::from(canvas.width) - 2.0 * OPTION_MARGIN_X).max(0.0);
    for (i, option) in quiz.options.iter().enumerate() {
        let center = first_center + i as f64 * pitch;
        layout.option_boxes.push(Rect::new(
            OPTION_MARGIN_X,
            center - half_box,
            OPTION_MARGIN_X + box_width,
            center + half_box,
        ));

        let lines: Vec<String> = wrap_lines(option, style.wrap.option).collect();
        let first_y = center + OPTION_BASELINE_NUDGE
            - (lines.len().saturating_sub(1) as f64) * OPTION_LINE_PITCH / 2.0;
        for (k, line) in lines.into_iter().enumerate() {
            layout.push(
                TextClass::Option,
                line,
                first_y + k as f64 * OPTION_LINE_PITCH,
            );
        }
    }

    layout.push(
        TextClass::Countdown,
        style.countdown_caption.as_str(),
        height - COUNTDOWN_FROM_BOTTOM,
    );
    layout
}

/// Lay out the answer frame: success banner, resolved answer, explanation, call to action.
///
/// The answer and explanation blocks are capped (with an ellipsis) so the explanation ends
/// above the call to action.
pub fn layout_answer(quiz: &Quiz, canvas: Canvas, style: &FrameStyle) -> FrameLayout {
    let mut layout = FrameLayout::new(Role::Answer, canvas);
    let height = f64::from(canvas.height);

    layout.push(TextClass::SuccessBanner, style.answer_banner.as_str(), BANNER_Y);

    let answer = quiz.resolved_answer();
    let mut last_answer_y = ANSWER_TOP_Y;
    let answer_lines = wrap_text_capped(answer.text, style.wrap.answer, ANSWER_MAX_LINES);
    for (i, line) in answer_lines.into_iter().enumerate() {
        last_answer_y = ANSWER_TOP_Y + i as f64 * ANSWER_LINE_PITCH;
        layout.push(TextClass::Answer, line, last_answer_y);
    }

    let explanation_top = EXPLANATION_TOP_Y.max(last_answer_y + EXPLANATION_GAP);
    let explanation_limit = height - CTA_FROM_BOTTOM - CTA_CLEARANCE;
    let max_explanation_lines =
        lines_within(explanation_top, EXPLANATION_LINE_PITCH, explanation_limit);
    let explanation =
        wrap_text_capped(&quiz.explanation, style.wrap.explanation, max_explanation_lines);
    for (i, line) in explanation.into_iter().enumerate() {
        layout.push(
            TextClass::Explanation,
            line,
            explanation_top + i as f64 * EXPLANATION_LINE_PITCH,
        );
    }

    layout.push(
        TextClass::CallToAction,
        style.call_to_action.as_str(),
        height - CTA_FROM_BOTTOM,
    );
    layout
}

/// Lines fitting from baseline `top` at `pitch` without passing baseline `limit`; at least one.
fn lines_within(top: f64, pitch: f64, limit: f64) -> usize {
    if limit <= top {
        return 1;
    }
    ((limit - top) / pitch).floor() as usize + 1
}

/// Center-to-center distance between option boxes.
fn option_pitch(count: usize, first_center: f64, last_center_limit: f64) -> f64 {
    if count < 2 {
        return OPTION_PITCH;
    }
    let fit = (last_center_limit - first_center) / (count - 1) as f64;
    fit.clamp(OPTION_BOX_HEIGHT + OPTION_MIN_GAP, OPTION_PITCH)
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
