//! Session tests - run/pause cadence, action gating, and determinism

use tui_life::core::LifeSession;
use tui_life::types::{SimAction, MAX_STEP_MS, MIN_STEP_MS};

#[test]
fn test_new_session_starts_paused_with_a_seeded_board() {
    let session = LifeSession::new(20, 10, 99).unwrap();
    assert!(!session.running());
    assert_eq!(session.generation(), 0);
    assert_eq!(session.seed(), 99);

    let live = session.grid().live_count();
    assert!(live > 0, "randomized board came up empty");
    assert!(live < 200, "randomized board came up full");
}

#[test]
fn test_paused_session_ignores_time() {
    let mut session = LifeSession::new(10, 10, 1).unwrap();
    assert!(!session.tick(10_000));
    assert_eq!(session.generation(), 0);
}

#[test]
fn test_running_session_steps_on_the_interval() {
    let mut session = LifeSession::new(10, 10, 1).unwrap();
    session.set_step_interval(100);
    session.handle_action(SimAction::ToggleRun);

    assert!(!session.tick(99));
    assert!(session.tick(1));
    assert_eq!(session.generation(), 1);

    // One long stall still yields a single generation.
    assert!(session.tick(10_000));
    assert_eq!(session.generation(), 2);
    assert!(!session.tick(99));
}

#[test]
fn test_step_once_works_only_while_paused() {
    let mut session = LifeSession::new(10, 10, 1).unwrap();

    assert!(session.handle_action(SimAction::StepOnce));
    assert_eq!(session.generation(), 1);

    session.handle_action(SimAction::ToggleRun);
    assert!(!session.handle_action(SimAction::StepOnce));
    assert_eq!(session.generation(), 1);
}

#[test]
fn test_board_edits_are_ignored_while_running() {
    let mut session = LifeSession::new(10, 10, 1).unwrap();
    session.handle_action(SimAction::ToggleRun);

    let before = session.grid().clone();
    assert!(!session.handle_action(SimAction::Randomize));
    assert!(!session.handle_action(SimAction::Clear));
    assert!(!session.handle_action(SimAction::NextPattern));
    assert_eq!(session.grid(), &before);
}

#[test]
fn test_clear_requires_pause_and_empties_the_board() {
    let mut session = LifeSession::new(10, 10, 1).unwrap();
    assert!(session.handle_action(SimAction::Clear));
    assert_eq!(session.grid().live_count(), 0);
    assert_eq!(session.generation(), 0);
}

#[test]
fn test_speed_changes_apply_any_time_and_clamp() {
    let mut session = LifeSession::new(10, 10, 1).unwrap();
    session.handle_action(SimAction::ToggleRun);

    for _ in 0..200 {
        assert!(session.handle_action(SimAction::SlowDown));
    }
    assert_eq!(session.step_interval_ms(), MAX_STEP_MS);

    for _ in 0..200 {
        assert!(session.handle_action(SimAction::SpeedUp));
    }
    assert_eq!(session.step_interval_ms(), MIN_STEP_MS);
}

#[test]
fn test_equal_seeds_replay_identical_runs() {
    let mut a = LifeSession::new(30, 20, 4242).unwrap();
    let mut b = LifeSession::new(30, 20, 4242).unwrap();

    for session in [&mut a, &mut b] {
        session.handle_action(SimAction::StepOnce);
        session.handle_action(SimAction::Randomize);
        session.set_step_interval(50);
        session.handle_action(SimAction::ToggleRun);
        for _ in 0..20 {
            session.tick(50);
        }
    }

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.generation(), b.generation());
}

#[test]
fn test_different_seeds_produce_different_boards() {
    let a = LifeSession::new(30, 20, 1).unwrap();
    let b = LifeSession::new(30, 20, 2).unwrap();
    assert_ne!(a.grid(), b.grid());
}

#[test]
fn test_randomize_to_rebuilds_with_new_dimensions() {
    let mut session = LifeSession::new(10, 10, 7).unwrap();
    session.handle_action(SimAction::StepOnce);
    assert_eq!(session.generation(), 1);

    session.randomize_to(16, 8).unwrap();
    assert_eq!(session.grid().columns(), 16);
    assert_eq!(session.grid().rows(), 8);
    assert_eq!(session.generation(), 0);

    assert!(session.randomize_to(-1, 8).is_err());
}
