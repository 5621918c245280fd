use super::*;

#[test]
fn happy_path_walks_every_state() {
    let mut t = RunTracker::new();
    for s in [
        RunState::FramesRendered,
        RunState::DurationsProbed,
        RunState::SegmentsComputed,
        RunState::Composed,
        RunState::Success,
    ] {
        t.advance(s).unwrap();
    }
    assert_eq!(t.state(), RunState::Success);
    assert_eq!(t.failed_at(), None);
}

#[test]
fn skipping_a_state_is_illegal() {
    let mut t = RunTracker::new();
    assert!(t.advance(RunState::DurationsProbed).is_err());
    assert_eq!(t.state(), RunState::Idle);
}

#[test]
fn failure_records_the_state_it_came_from() {
    let mut t = RunTracker::new();
    t.advance(RunState::FramesRendered).unwrap();
    t.fail();
    assert_eq!(t.state(), RunState::Failed);
    assert_eq!(t.failed_at(), Some(RunState::FramesRendered));
    assert!(t.advance(RunState::DurationsProbed).is_err());
}

#[test]
fn failed_is_reachable_from_idle_and_sticky() {
    let mut t = RunTracker::new();
    t.fail();
    t.fail();
    assert_eq!(t.failed_at(), Some(RunState::Idle));
}
