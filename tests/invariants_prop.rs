//! Property tests: random command and frame streams keep the session consistent.
//!
//! Invariants covered:
//! - A running game's active piece never overlaps the board or its walls.
//! - Score, lines and level only grow between resets, and level tracks lines.
//! - Every locked cell carries a valid piece tag.
//! - The engine never holds more than one outstanding tick, and holds none
//!   unless the game is running.

use proptest::prelude::*;

use blockdrop::core::{
    is_blocked, level_for_lines, GameConfig, GameSnapshot, GameState, ScoreSnapshot,
};
use blockdrop::engine::{Clock, GameEngine, RenderSink, ScoreSink};
use blockdrop::types::{GameAction, Phase, PieceKind};

#[derive(Debug, Clone, Copy)]
enum Step {
    Act(GameAction),
    Frame(u16),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0..GameAction::ALL.len()).prop_map(|i| Step::Act(GameAction::ALL[i])),
        2 => (1u16..1500).prop_map(Step::Frame),
    ]
}

fn assert_consistent(state: &GameState) {
    if state.is_running() {
        let active = state.active().expect("running game has an active piece");
        assert!(!is_blocked(&active.matrix, active.x, active.y, state.board()));
        assert!(state.next().is_some());
    }
    assert_eq!(state.level(), level_for_lines(state.lines()));
    let snap = state.snapshot();
    assert!(snap.board.iter().all(|&tag| tag == 0 || PieceKind::from_tag(tag).is_some()));
}

#[derive(Debug, Default)]
struct OneShot {
    armed: bool,
}

impl Clock for OneShot {
    fn request_tick(&mut self) {
        assert!(!self.armed, "two outstanding ticks");
        self.armed = true;
    }

    fn cancel_tick(&mut self) {
        self.armed = false;
    }
}

#[derive(Debug, Default)]
struct Discard;

impl RenderSink for Discard {
    fn render(&mut self, _: &GameSnapshot) {}
}

impl ScoreSink for Discard {
    fn publish(&mut self, _: ScoreSnapshot) {}
}

proptest! {
    #[test]
    fn random_sessions_keep_invariants(
        seed in any::<u32>(),
        width in 4u8..12,
        height in 4u8..24,
        steps in prop::collection::vec(step_strategy(), 1..300),
    ) {
        let config = GameConfig::new(width, height).with_seed(seed);
        let mut state = GameState::with_config(config).unwrap();
        let mut now = 0u64;
        let mut last = state.scores();

        for step in steps {
            match step {
                Step::Act(action) => {
                    state.apply_action(action);
                }
                Step::Frame(dt) => {
                    now += u64::from(dt);
                    state.update(now);
                }
            }
            assert_consistent(&state);

            let scores = state.scores();
            if state.phase() == Phase::NotStarted {
                prop_assert_eq!(scores, ScoreSnapshot::default());
            } else {
                prop_assert!(scores.score >= last.score);
                prop_assert!(scores.lines >= last.lines);
                prop_assert!(scores.level >= last.level);
            }
            last = scores;
        }
    }

    #[test]
    fn engine_tick_bookkeeping_matches_phase(
        seed in any::<u32>(),
        steps in prop::collection::vec(step_strategy(), 1..200),
    ) {
        let mut engine = GameEngine::new(GameState::new(seed), OneShot::default(), Discard, Discard);
        let mut now = 0u64;

        for step in steps {
            match step {
                Step::Act(action) => {
                    engine.command(action);
                }
                Step::Frame(dt) => {
                    now += u64::from(dt);
                    if std::mem::take(&mut engine.clock_mut().armed) {
                        engine.update(now);
                    }
                }
            }
            prop_assert_eq!(engine.clock().armed, engine.phase() == Phase::Running);
            prop_assert_eq!(engine.tick_pending(), engine.clock().armed);
        }
    }
}
