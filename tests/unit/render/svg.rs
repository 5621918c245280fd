use chrono::Utc;

use super::*;
use crate::foundation::core::Canvas;
use crate::quiz::model::Quiz;
use crate::render::layout::{layout_answer, layout_question};

fn quiz() -> Quiz {
    Quiz {
        category: "c".to_string(),
        title: "t".to_string(),
        question: "Is 1 < 2 & \"true\"?".to_string(),
        options: vec![
            "A) yes".to_string(),
            "B) no".to_string(),
            "C) <maybe>".to_string(),
            "D) it's complicated".to_string(),
        ],
        correct_answer: "A".to_string(),
        explanation: "Because math.".to_string(),
        timestamp: Utc::now(),
    }
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape_xml(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_xml("퀴즈"), "퀴즈");
}

#[test]
fn question_svg_escapes_quiz_text_and_draws_four_boxes() {
    let style = FrameStyle::default();
    let layout = layout_question(&quiz(), Canvas::VERTICAL_HD, &style);
    let svg = frame_svg(&layout, &style, Canvas::VERTICAL_HD);

    assert!(svg.starts_with("<svg width=\"1080\" height=\"1920\""));
    assert!(svg.contains("Is 1 &lt; 2 &amp; &quot;true&quot;?"));
    assert!(svg.contains("C) &lt;maybe&gt;"));
    assert!(!svg.contains("<maybe>"));
    assert_eq!(svg.matches("data-option=").count(), 4);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn answer_svg_has_no_option_boxes() {
    let style = FrameStyle::default();
    let layout = layout_answer(&quiz(), Canvas::VERTICAL_HD, &style);
    let svg = frame_svg(&layout, &style, Canvas::VERTICAL_HD);
    assert_eq!(svg.matches("data-option=").count(), 0);
    assert!(svg.contains(">A) yes</text>"));
    assert!(svg.contains("구독 &amp; 좋아요!"));
}

#[test]
fn parses_as_valid_svg() {
    let style = FrameStyle::default();
    for layout in [
        layout_question(&quiz(), Canvas::VERTICAL_HD, &style),
        layout_answer(&quiz(), Canvas::VERTICAL_HD, &style),
    ] {
        let svg = frame_svg(&layout, &style, Canvas::VERTICAL_HD);
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
        assert_eq!(tree.size().width(), 1080.0);
        assert_eq!(tree.size().height(), 1920.0);
    }
}

#[test]
fn output_size_differs_from_design_space() {
    let style = FrameStyle::default();
    let layout = layout_question(&quiz(), Canvas::VERTICAL_HD, &style);
    let half = Canvas {
        width: 540,
        height: 960,
    };
    let svg = frame_svg(&layout, &style, half);
    assert!(svg.starts_with("<svg width=\"540\" height=\"960\" viewBox=\"0 0 1080 1920\""));
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 540.0);
}
