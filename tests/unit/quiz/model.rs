use super::*;

fn quiz(correct: &str) -> Quiz {
    Quiz {
        category: "space".to_string(),
        title: "Moons".to_string(),
        question: "Which planet has the most known moons?".to_string(),
        options: vec![
            "A) Earth".to_string(),
            "B) Saturn".to_string(),
            "C) Mars".to_string(),
            "D) Venus".to_string(),
        ],
        correct_answer: correct.to_string(),
        explanation: "Saturn has well over a hundred confirmed moons.".to_string(),
        timestamp: Utc::now(),
    }
}

#[test]
fn letter_only_answer_resolves_to_option() {
    let q = quiz("B");
    let r = q.resolved_answer();
    assert_eq!(r.text, "B) Saturn");
    assert!(r.matched);
}

#[test]
fn letter_with_text_answer_resolves_to_option() {
    assert_eq!(quiz("b) saturn").correct_option(), Some("B) Saturn"));
    assert_eq!(quiz("  C").correct_option(), Some("C) Mars"));
}

#[test]
fn option_number_answer_resolves_to_option() {
    let q = quiz("2");
    let r = q.resolved_answer();
    assert_eq!(r.text, "B) Saturn");
    assert!(r.matched);
    assert_eq!(quiz("4번").answer_letter(), Some('D'));
    assert_eq!(quiz(" 1) Earth").correct_option(), Some("A) Earth"));
}

#[test]
fn out_of_range_option_number_falls_back() {
    for raw in ["0", "5", "12"] {
        let q = quiz(raw);
        assert_eq!(q.answer_letter(), None, "{raw}");
        let r = q.resolved_answer();
        assert_eq!(r.text, raw);
        assert!(!r.matched);
    }
}

#[test]
fn unmatched_answer_falls_back_to_raw_text() {
    let q = quiz("Saturn");
    let r = q.resolved_answer();
    assert_eq!(r.text, "Saturn");
    assert!(!r.matched);

    let empty = quiz("");
    assert_eq!(empty.correct_option(), None);
    assert_eq!(empty.resolved_answer().text, "");
}

#[test]
fn validate_requires_four_labelled_options_in_order() {
    assert!(quiz("B").validate().is_ok());

    let mut three = quiz("B");
    three.options.pop();
    assert!(three.validate().is_err());

    let mut swapped = quiz("B");
    swapped.options.swap(0, 1);
    assert!(swapped.validate().is_err());

    let mut unlabeled = quiz("B");
    unlabeled.options[2] = "Mars".to_string();
    assert!(unlabeled.validate().is_err());
}

#[test]
fn json_uses_camel_case_answer_field() {
    let json = serde_json::to_value(quiz("B")).unwrap();
    assert_eq!(json["correctAnswer"], "B");
    let back: Quiz = serde_json::from_value(json).unwrap();
    assert_eq!(back.correct_answer, "B");
}
