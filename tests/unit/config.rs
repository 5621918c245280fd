use super::*;

#[test]
fn empty_object_is_the_default_config() {
    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());
    cfg.validate().unwrap();
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg: Config = serde_json::from_str(
        r#"{
            "canvas": { "width": 720, "height": 1280 },
            "encode": { "fps": { "num": 24, "den": 1 } },
            "style": { "wrap": { "question": 18 } },
            "publish_dir": "published"
        }"#,
    )
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 720);
    assert_eq!(cfg.encode.fps.num, 24);
    assert_eq!(cfg.encode.video_codec, "libx264");
    assert_eq!(cfg.style.wrap.question, 18);
    assert_eq!(cfg.style.wrap.explanation, 22);
    assert_eq!(cfg.publish_dir, Some(PathBuf::from("published")));
}

#[test]
fn odd_canvas_is_a_config_error() {
    let mut cfg = Config::default();
    cfg.canvas.height = 1919;
    assert!(matches!(cfg.validate(), Err(QuizError::Config(_))));
}

#[test]
fn zero_fps_is_rejected() {
    let mut cfg = Config::default();
    cfg.encode.fps.den = 0;
    assert!(matches!(cfg.validate(), Err(QuizError::Config(_))));
}

#[test]
fn zero_wrap_budget_is_rejected() {
    let mut cfg = Config::default();
    cfg.style.wrap.option = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quizreel.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = Config::from_path(&path).unwrap_err();
    assert!(matches!(err, QuizError::Config(_)));
    assert!(err.to_string().contains("quizreel.json"));
}

#[test]
fn from_path_loads_and_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quizreel.json");
    std::fs::write(&path, r#"{ "openai": { "voice": "alloy" }, "keep_workspace": true }"#).unwrap();
    let cfg = Config::from_path(&path).unwrap();
    assert_eq!(cfg.openai.voice, "alloy");
    assert!(cfg.keep_workspace);
}
