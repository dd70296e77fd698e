//! Tests for the browse state machine.

use super::*;
use crate::model::{DayKey, Definition, Meaning};

fn entry_with(sizes: &[usize]) -> WordEntry {
    WordEntry {
        word: "test".to_string(),
        phonetic: String::new(),
        meanings: sizes
            .iter()
            .enumerate()
            .map(|(m, &n)| {
                Meaning::new(
                    format!("pos{m}"),
                    (0..n).map(|d| Definition::new(format!("m{m}d{d}"))).collect(),
                )
            })
            .collect(),
        produced_for: DayKey::parse("2024-01-01").unwrap(),
    }
}

const MS: Duration = Duration::from_millis(1);

// ===== Transition table =====

#[test]
fn left_advances_definition() {
    let entry = entry_with(&[3]);
    let t = BrowseState::new(0, 0).transition(Direction::Left, &entry);
    assert_eq!(t.to, BrowseState::new(0, 1));
    assert!(!t.is_noop());
}

#[test]
fn right_goes_back_a_definition() {
    let entry = entry_with(&[3]);
    let t = BrowseState::new(0, 2).transition(Direction::Right, &entry);
    assert_eq!(t.to, BrowseState::new(0, 1));
}

#[test]
fn right_at_first_definition_is_noop() {
    let entry = entry_with(&[3]);
    let t = BrowseState::new(0, 0).transition(Direction::Right, &entry);
    assert!(t.is_noop());
}

#[test]
fn up_advances_meaning_and_resets_definition() {
    let entry = entry_with(&[3, 2]);
    let t = BrowseState::new(0, 2).transition(Direction::Up, &entry);
    assert_eq!(t.to, BrowseState::new(1, 0));
}

#[test]
fn down_goes_back_a_meaning_and_resets_definition() {
    let entry = entry_with(&[3, 2]);
    let t = BrowseState::new(1, 1).transition(Direction::Down, &entry);
    assert_eq!(t.to, BrowseState::new(0, 0));
}

#[test]
fn up_at_last_meaning_keeps_definition() {
    let entry = entry_with(&[1, 3]);
    let t = BrowseState::new(1, 2).transition(Direction::Up, &entry);
    assert!(t.is_noop());
    assert_eq!(t.to, BrowseState::new(1, 2));
}

#[test]
fn down_at_first_meaning_keeps_definition() {
    let entry = entry_with(&[3, 1]);
    let t = BrowseState::new(0, 2).transition(Direction::Down, &entry);
    assert!(t.is_noop());
}

#[test]
fn empty_entry_stays_at_origin() {
    let entry = entry_with(&[]);
    for direction in Direction::ALL {
        let t = BrowseState::default().transition(direction, &entry);
        assert!(t.is_noop(), "{direction} should be a no-op on an empty entry");
    }
}

#[test]
fn scenario_left_clamps_then_up_resets() {
    let entry = entry_with(&[3, 1]);
    let mut state = BrowseState::default();

    for _ in 0..4 {
        state = state.transition(Direction::Left, &entry).to;
    }
    assert_eq!(state, BrowseState::new(0, 2));

    state = state.transition(Direction::Up, &entry).to;
    assert_eq!(state, BrowseState::new(1, 0));
}

#[test]
fn is_within_checks_both_axes() {
    let entry = entry_with(&[3, 1]);
    assert!(BrowseState::new(0, 2).is_within(&entry));
    assert!(!BrowseState::new(1, 1).is_within(&entry));
    assert!(!BrowseState::new(2, 0).is_within(&entry));
    assert!(BrowseState::default().is_within(&entry_with(&[])));
}

// ===== Animation sequencing =====

#[test]
fn begin_starts_exit_phase() {
    let entry = entry_with(&[3]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();

    assert_eq!(machine.begin(Direction::Left, &entry, t0), BeginOutcome::Started);
    assert!(matches!(
        machine.phase(),
        AnimationPhase::ExitAnimating {
            direction: Direction::Left,
            ..
        }
    ));
}

#[test]
fn index_unchanged_until_exit_completes() {
    let entry = entry_with(&[3]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Left, &entry, t0);

    assert_eq!(machine.tick(t0 + 199 * MS, &entry), None);
    assert_eq!(machine.state(), BrowseState::new(0, 0));
    assert!(matches!(machine.phase(), AnimationPhase::ExitAnimating { .. }));
}

#[test]
fn index_applied_when_enter_begins() {
    let entry = entry_with(&[3]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Left, &entry, t0);

    let applied = machine.tick(t0 + 200 * MS, &entry).unwrap();

    assert_eq!(applied.from, BrowseState::new(0, 0));
    assert_eq!(applied.to, BrowseState::new(0, 1));
    assert_eq!(machine.state(), BrowseState::new(0, 1));
    match machine.phase() {
        AnimationPhase::EnterAnimating { direction, started } => {
            assert_eq!(direction, Direction::Left);
            assert_eq!(started, t0 + 200 * MS);
        }
        other => panic!("expected EnterAnimating, got {other:?}"),
    }
}

#[test]
fn returns_to_idle_after_enter() {
    let entry = entry_with(&[3]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Left, &entry, t0);
    machine.tick(t0 + 200 * MS, &entry);

    assert_eq!(machine.tick(t0 + 399 * MS, &entry), None);
    assert!(machine.is_animating());
    assert_eq!(machine.tick(t0 + 400 * MS, &entry), None);
    assert_eq!(machine.phase(), AnimationPhase::Idle);
    assert_eq!(machine.state(), BrowseState::new(0, 1));
}

#[test]
fn late_tick_passes_both_deadlines() {
    let entry = entry_with(&[2, 2]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Up, &entry, t0);

    let applied = machine.tick(t0 + Duration::from_secs(5), &entry);

    assert_eq!(applied.map(|t| t.to), Some(BrowseState::new(1, 0)));
    assert_eq!(machine.phase(), AnimationPhase::Idle);
}

#[test]
fn gestures_during_animation_are_dropped() {
    let entry = entry_with(&[3]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Left, &entry, t0);

    assert_eq!(machine.begin(Direction::Left, &entry, t0 + 50 * MS), BeginOutcome::Busy);
    machine.tick(t0 + 200 * MS, &entry);
    assert_eq!(machine.begin(Direction::Left, &entry, t0 + 250 * MS), BeginOutcome::Busy);
    machine.tick(t0 + 400 * MS, &entry);

    assert_eq!(machine.state(), BrowseState::new(0, 1));
}

#[test]
fn noop_is_animated_by_default() {
    let entry = entry_with(&[1]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();

    assert_eq!(machine.begin(Direction::Right, &entry, t0), BeginOutcome::Started);
    let applied = machine.tick(t0 + 200 * MS, &entry).unwrap();
    assert!(applied.is_noop());
}

#[test]
fn noop_skipped_when_configured() {
    let entry = entry_with(&[1]);
    let mut machine = BrowseStateMachine::new(DEFAULT_PHASE_DURATION, true);
    let t0 = Instant::now();

    assert_eq!(machine.begin(Direction::Right, &entry, t0), BeginOutcome::SkippedNoOp);
    assert_eq!(machine.phase(), AnimationPhase::Idle);
}

#[test]
fn skip_noop_still_animates_real_moves() {
    let entry = entry_with(&[2]);
    let mut machine = BrowseStateMachine::new(DEFAULT_PHASE_DURATION, true);
    assert_eq!(
        machine.begin(Direction::Left, &entry, Instant::now()),
        BeginOutcome::Started
    );
}

#[test]
fn zero_duration_applies_on_first_tick() {
    let entry = entry_with(&[2]);
    let mut machine = BrowseStateMachine::new(Duration::ZERO, false);
    let t0 = Instant::now();
    machine.begin(Direction::Left, &entry, t0);

    assert!(machine.tick(t0, &entry).is_some());
    assert_eq!(machine.phase(), AnimationPhase::Idle);
    assert_eq!(machine.state(), BrowseState::new(0, 1));
}

#[test]
fn reset_cancels_animation() {
    let entry = entry_with(&[3, 3]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Up, &entry, t0);
    machine.tick(t0 + 200 * MS, &entry);

    machine.reset();

    assert_eq!(machine.state(), BrowseState::default());
    assert_eq!(machine.phase(), AnimationPhase::Idle);
}

// ===== Frames =====

#[test]
fn idle_frame_is_at_rest() {
    let machine = BrowseStateMachine::default();
    assert_eq!(machine.frame(Instant::now()), AnimationFrame::REST);
}

#[test]
fn exit_moves_toward_swipe_and_fades() {
    let entry = entry_with(&[3]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Left, &entry, t0);

    let frame = machine.frame(t0 + 100 * MS);

    assert_eq!(frame.axis, Some(Axis::Horizontal));
    assert!((frame.offset + 0.5).abs() < 1e-3, "offset {}", frame.offset);
    assert!((frame.opacity - 0.5).abs() < 1e-3, "opacity {}", frame.opacity);
}

#[test]
fn enter_comes_from_opposite_edge() {
    let entry = entry_with(&[2, 2]);
    let mut machine = BrowseStateMachine::default();
    let t0 = Instant::now();
    machine.begin(Direction::Up, &entry, t0);
    machine.tick(t0 + 200 * MS, &entry);

    let start = machine.frame(t0 + 200 * MS);
    assert_eq!(start.axis, Some(Axis::Vertical));
    assert!((start.offset - 1.0).abs() < 1e-3, "enters from below");
    assert!(start.opacity.abs() < 1e-3);

    let end = machine.frame(t0 + 400 * MS);
    assert!(end.offset.abs() < 1e-3);
    assert!((end.opacity - 1.0).abs() < 1e-3);
}
