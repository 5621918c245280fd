use super::*;

#[test]
fn default_style_is_valid() {
    FrameStyle::default().validate().unwrap();
}

#[test]
fn rejects_non_hex_palette_entries() {
    let mut style = FrameStyle::default();
    style.palette.accent = "red\" onload=\"x".to_string();
    assert!(matches!(style.validate(), Err(QuizError::Config(_))));
}

#[test]
fn rejects_zero_wrap_budget() {
    let mut style = FrameStyle::default();
    style.wrap.option = 0;
    assert!(style.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults() {
    let style: FrameStyle = serde_json::from_str(r#"{ "answer_banner": "Correct!" }"#).unwrap();
    assert_eq!(style.answer_banner, "Correct!");
    assert_eq!(style.wrap, WrapBudgets::default());
}
