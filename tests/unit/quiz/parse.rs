use super::*;

const KOREAN: &str = "제목: 꿀의 비밀
질문: 수천 년이 지나도 상하지 않는 음식은?
A) 빵
B) 꿀
C) 우유
D) 치즈
정답: B
설명: 꿀은 수분이 적고 산성이라
세균이 살 수 없습니다.";

#[test]
fn parses_labelled_korean_sections() {
    let quiz = parse_quiz_text(KOREAN, "음식의 흥미로운 기원").unwrap();
    assert_eq!(quiz.title, "꿀의 비밀");
    assert_eq!(quiz.question, "수천 년이 지나도 상하지 않는 음식은?");
    assert_eq!(quiz.options, vec!["A) 빵", "B) 꿀", "C) 우유", "D) 치즈"]);
    assert_eq!(quiz.correct_answer, "B");
    assert_eq!(
        quiz.explanation,
        "꿀은 수분이 적고 산성이라 세균이 살 수 없습니다."
    );
    assert_eq!(quiz.category, "음식의 흥미로운 기원");
}

#[test]
fn unlabelled_lines_extend_current_section() {
    let text = "Question: Which animal
can sleep standing up?
A) Horse
B) Cat
C) Dog
D) Snake
that slithers
Answer: A) Horse
Explanation: Horses lock their legs.";
    let quiz = parse_quiz_text(text, "animals").unwrap();
    assert_eq!(quiz.question, "Which animal can sleep standing up?");
    assert_eq!(quiz.options[3], "D) Snake that slithers");
    assert_eq!(quiz.correct_answer, "A) Horse");
}

#[test]
fn missing_title_defaults_from_category() {
    let text = "질문: q?\nA) a\nB) b\nC) c\nD) d\n정답: A\n설명: e";
    let quiz = parse_quiz_text(text, "우주의 미스터리").unwrap();
    assert_eq!(quiz.title, "우주의 미스터리 퀴즈");
}

#[test]
fn numbered_answer_resolves_to_its_option() {
    let text = "질문: q?\nA) a\nB) b\nC) c\nD) d\n정답: 2\n설명: e";
    let quiz = parse_quiz_text(text, "c").unwrap();
    assert_eq!(quiz.correct_answer, "2");
    assert_eq!(quiz.resolved_answer().text, "B) b");
}

#[test]
fn markdown_decorated_labels_are_recognized() {
    let text = "Sure! Here is a quiz.\n**제목:** 제목입니다\n### 질문: q?\nA) a\nB) b\nC) c\nD) d\n**정답:** C\n설명: e";
    let quiz = parse_quiz_text(text, "c").unwrap();
    assert_eq!(quiz.title, "제목입니다");
    assert_eq!(quiz.question, "q?");
    assert_eq!(quiz.correct_answer, "C");
}

#[test]
fn unparseable_response_is_data_shape_error() {
    let err = parse_quiz_text("I cannot help with that.", "c").unwrap_err();
    assert!(matches!(err, QuizError::DataShape(_)));

    let three = "질문: q?\nA) a\nB) b\nC) c\n정답: A";
    assert!(matches!(
        parse_quiz_text(three, "c").unwrap_err(),
        QuizError::DataShape(_)
    ));
}
