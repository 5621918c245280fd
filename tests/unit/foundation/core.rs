use super::*;

#[test]
fn roles_are_in_playback_order() {
    assert_eq!(Role::ALL, [Role::Question, Role::Answer]);
    assert!(Role::Question < Role::Answer);
    assert_eq!(Role::Answer.to_string(), "answer");
}

#[test]
fn canvas_rejects_odd_or_zero_sizes() {
    assert!(Canvas::VERTICAL_HD.validate().is_ok());
    assert!(
        Canvas {
            width: 1081,
            height: 1920
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 0,
            height: 1920
        }
        .validate()
        .is_err()
    );
}

#[test]
fn fps_formats_integral_and_rational_rates() {
    assert_eq!(Fps::default().to_ffmpeg_arg(), "30");
    assert_eq!(Fps::new(30000, 1001).unwrap().to_ffmpeg_arg(), "30000/1001");
    assert!(Fps::new(0, 1).is_err());
}

#[test]
fn generated_run_ids_are_unique_and_filename_safe() {
    let a = RunId::generate();
    let b = RunId::generate();
    assert_ne!(a, b);
    assert!(RunId::parse(a.as_str()).is_ok());
}

#[test]
fn run_id_parse_rejects_path_separators() {
    assert!(RunId::parse("../etc").is_err());
    assert!(RunId::parse("").is_err());
    assert_eq!(RunId::parse("job_42").unwrap().as_str(), "job_42");
}
