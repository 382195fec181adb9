//! Session flow tests: lifecycle, gravity, scoring and game over

use blockdrop::core::{GameConfig, GameState, SequenceSource};
use blockdrop::types::{GameAction, Phase, PieceKind};

fn scripted(config: GameConfig, kinds: &[PieceKind]) -> GameState {
    GameState::with_source(config, Box::new(SequenceSource::new(kinds.to_vec()))).unwrap()
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::NotStarted);
    assert!(state.active().is_none());

    assert!(state.start());
    assert!(state.is_running());
    assert!(state.active().is_some());
    assert!(state.next().is_some());

    // Start is only accepted from NotStarted.
    assert!(!state.start());
}

#[test]
fn test_movement_ignored_unless_running() {
    let mut state = GameState::new(1);
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::PauseOrResume,
    ] {
        assert!(!state.apply_action(action), "{:?}", action);
    }
    assert_eq!(state.score(), 0);

    state.start();
    state.pause();
    let before = state.active();
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::HardDrop));
    assert_eq!(state.active(), before);
}

#[test]
fn test_gravity_needs_more_than_interval() {
    let mut state = scripted(GameConfig::default(), &[PieceKind::T]);
    state.start();

    // First frame only records the baseline.
    assert!(!state.update(5_000));
    assert!(!state.update(6_000));
    assert_eq!(state.active().unwrap().y, 0);

    assert!(state.update(6_001));
    assert_eq!(state.active().unwrap().y, 1);
}

#[test]
fn test_resume_rearms_baseline() {
    let mut state = scripted(GameConfig::default(), &[PieceKind::T]);
    state.start();
    state.update(0);
    state.pause();
    state.resume();

    // A long pause does not turn into an immediate drop.
    assert!(!state.update(60_000));
    assert_eq!(state.active().unwrap().y, 0);
    assert!(state.update(61_001));
    assert_eq!(state.active().unwrap().y, 1);
}

#[test]
fn test_wall_kick_off_left_wall() {
    let mut state = scripted(GameConfig::default(), &[PieceKind::T]);
    state.start();

    assert!(state.rotate());
    while state.move_left() {}
    assert_eq!(state.active().unwrap().x, -1);

    // Flat orientation overlaps the wall and needs the +1 kick.
    assert!(state.rotate());
    assert_eq!(state.active().unwrap().x, 0);
}

#[test]
fn test_stacking_o_pieces_ends_game() {
    let mut state = scripted(GameConfig::default(), &[PieceKind::O]);
    state.start();

    for _ in 0..10 {
        assert!(state.hard_drop());
    }

    // Drops of 18, 16, ..., 0 rows.
    assert_eq!(state.score(), 90);
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.take_last_event().unwrap().topped_out);
    assert!(!state.hard_drop());
    assert!(!state.pause_or_resume());
}

#[test]
fn test_narrow_board_line_clears_and_level() {
    let mut state = scripted(GameConfig::new(4, 6), &[PieceKind::I]);
    state.start();

    // Each I spans the full width, drops 4 rows and clears one line.
    for n in 1..=10 {
        assert!(state.hard_drop());
        assert_eq!(state.lines(), n);
        assert_eq!(state.board().filled_count(), 0);
    }
    assert_eq!(state.score(), 10 * (4 + 40));
    assert_eq!(state.level(), 2);

    state.hard_drop();
    assert_eq!(state.score(), 440 + 4 + 80);
}

#[test]
fn test_soft_drop_scores_and_locks() {
    let mut state = scripted(GameConfig::new(4, 4), &[PieceKind::O]);
    state.start();

    // O at rows 0-1 falls to rows 2-3 in two steps, the third locks.
    assert!(state.soft_drop());
    assert!(state.soft_drop());
    assert_eq!(state.active().unwrap().y, 2);
    assert!(state.soft_drop());
    assert_eq!(state.score(), 3);
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.active().unwrap().y, 0);
}

#[test]
fn test_reset_and_cycle() {
    let mut state = GameState::new(5);
    assert!(state.cycle());
    assert_eq!(state.phase(), Phase::Running);
    state.hard_drop();
    assert!(state.score() > 0);

    assert!(state.cycle());
    assert_eq!(state.phase(), Phase::Paused);
    assert!(state.cycle());
    assert_eq!(state.phase(), Phase::Running);

    assert!(state.reset());
    assert_eq!(state.phase(), Phase::NotStarted);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
    assert!(state.active().is_none());
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_cycle_after_game_over_resets() {
    let mut state = scripted(GameConfig::default(), &[PieceKind::O]);
    state.start();
    while state.hard_drop() {}
    assert_eq!(state.phase(), Phase::GameOver);

    assert!(state.cycle());
    assert_eq!(state.phase(), Phase::NotStarted);
    assert!(state.cycle());
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    a.start();
    b.start();
    for _ in 0..20 {
        assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
        a.hard_drop();
        b.hard_drop();
    }
    assert_eq!(a.score(), b.score());
}
