use chrono::Utc;

use super::*;

fn quiz(question: &str, correct: &str) -> Quiz {
    Quiz {
        category: "c".to_string(),
        title: "t".to_string(),
        question: question.to_string(),
        options: vec![
            "A) Earth".to_string(),
            "B) Saturn, the ringed gas giant with over a hundred moons".to_string(),
            "C) Mars".to_string(),
            "D) Venus".to_string(),
        ],
        correct_answer: correct.to_string(),
        explanation: "Saturn has well over a hundred confirmed moons.".to_string(),
        timestamp: Utc::now(),
    }
}

#[test]
fn option_boxes_stack_in_label_order_with_fixed_height() {
    let l = layout_question(
        &quiz("Which planet?", "B"),
        Canvas::VERTICAL_HD,
        &FrameStyle::default(),
    );
    assert_eq!(l.option_boxes.len(), 4);
    for pair in l.option_boxes.windows(2) {
        assert!(pair[0].y1 <= pair[1].y0, "boxes overlap: {pair:?}");
    }
    for r in &l.option_boxes {
        assert!((r.height() - OPTION_BOX_HEIGHT).abs() < 1e-9);
        assert_eq!(r.x0, OPTION_MARGIN_X);
        assert_eq!(r.x1, 1080.0 - OPTION_MARGIN_X);
    }
    assert_eq!(l.option_boxes[0].center().y, OPTIONS_FIRST_CENTER_Y);

    let first_words: Vec<_> = l
        .lines_of(TextClass::Option)
        .map(|line| line.text.chars().next().unwrap())
        .filter(|c| ['A', 'B', 'C', 'D'].contains(c))
        .collect();
    assert_eq!(first_words, vec!['A', 'B', 'C', 'D']);
}

#[test]
fn wrapped_option_lines_stay_inside_their_box() {
    let style = FrameStyle::default();
    let l = layout_question(&quiz("Which planet?", "B"), Canvas::VERTICAL_HD, &style);
    let b = l.option_boxes[1];
    let lines: Vec<_> = l
        .lines_of(TextClass::Option)
        .filter(|line| line.y > l.option_boxes[0].y1 && line.y < l.option_boxes[2].y0)
        .collect();
    assert!(lines.len() > 1);
    for line in lines {
        assert!(line.y > b.y0 && line.y < b.y1);
        assert!(line.text.chars().count() <= style.wrap.option);
    }
}

#[test]
fn long_question_pushes_options_down_but_clear_of_countdown() {
    let long = "word ".repeat(60);
    let l = layout_question(&quiz(&long, "B"), Canvas::VERTICAL_HD, &FrameStyle::default());
    let last_question = l.lines_of(TextClass::Question).last().unwrap().y;
    assert!(l.option_boxes[0].y0 > last_question);
    let countdown = l.lines_of(TextClass::Countdown).next().unwrap().y;
    assert!(l.option_boxes[3].y1 < countdown);
}

#[test]
fn layout_is_deterministic() {
    let q = quiz("Which planet has the most moons?", "B");
    let style = FrameStyle::default();
    assert_eq!(
        layout_question(&q, Canvas::VERTICAL_HD, &style),
        layout_question(&q, Canvas::VERTICAL_HD, &style)
    );
    assert_eq!(
        layout_answer(&q, Canvas::VERTICAL_HD, &style),
        layout_answer(&q, Canvas::VERTICAL_HD, &style)
    );
}

#[test]
fn answer_frame_shows_matching_option() {
    let l = layout_answer(&quiz("q", "C"), Canvas::VERTICAL_HD, &FrameStyle::default());
    let answer: Vec<_> = l.lines_of(TextClass::Answer).map(|x| x.text.as_str()).collect();
    assert_eq!(answer, vec!["C) Mars"]);
    assert_eq!(l.role, Role::Answer);
    assert!(l.option_boxes.is_empty());
}

#[test]
fn answer_frame_falls_back_to_raw_answer() {
    let l = layout_answer(
        &quiz("q", "Saturn"),
        Canvas::VERTICAL_HD,
        &FrameStyle::default(),
    );
    let answer: Vec<_> = l.lines_of(TextClass::Answer).map(|x| x.text.as_str()).collect();
    assert_eq!(answer, vec!["Saturn"]);
}

#[test]
fn captions_sit_near_the_bottom_edge() {
    let style = FrameStyle::default();
    let q = quiz("q", "B");
    let ql = layout_question(&q, Canvas::VERTICAL_HD, &style);
    let al = layout_answer(&q, Canvas::VERTICAL_HD, &style);
    assert_eq!(ql.lines_of(TextClass::Countdown).next().unwrap().y, 1770.0);
    assert_eq!(al.lines_of(TextClass::CallToAction).next().unwrap().y, 1820.0);
}

#[test]
fn overlong_question_is_cut_to_keep_options_on_canvas() {
    let long = "word ".repeat(120);
    let l = layout_question(&quiz(&long, "B"), Canvas::VERTICAL_HD, &FrameStyle::default());
    let question: Vec<_> = l.lines_of(TextClass::Question).collect();
    let last_question = question.last().unwrap();
    assert!(question.len() < 24);
    assert!(last_question.text.ends_with('…'));
    assert!(l.option_boxes[0].y0 > last_question.y);
    let countdown = l.lines_of(TextClass::Countdown).next().unwrap().y;
    assert!(l.option_boxes[3].y1 < countdown);
    assert!(l.option_boxes[3].y1 <= 1920.0);
}

#[test]
fn long_explanation_ends_above_call_to_action() {
    let mut q = quiz("q", "B");
    q.explanation = "설명입니다 ".repeat(80);
    let l = layout_answer(&q, Canvas::VERTICAL_HD, &FrameStyle::default());
    let last = l.lines_of(TextClass::Explanation).last().unwrap();
    let cta = l.lines_of(TextClass::CallToAction).next().unwrap().y;
    assert!(last.y < cta);
    assert!(last.text.ends_with('…'));
}

#[test]
fn short_explanation_is_not_cut() {
    let l = layout_answer(&quiz("q", "B"), Canvas::VERTICAL_HD, &FrameStyle::default());
    let explanation: Vec<_> = l
        .lines_of(TextClass::Explanation)
        .map(|x| x.text.as_str())
        .collect();
    assert_eq!(explanation.join(" "), "Saturn has well over a hundred confirmed moons.");
}
