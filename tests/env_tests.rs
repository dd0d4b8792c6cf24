//! Environment integration tests.
//!
//! These drive `SlidingPuzzleEnv` the way a host framework would.

use std::sync::{Arc, Mutex};

use sliding_puzzle_env::core::{Board, Direction, PuzzleConfig, NO_PREV_ACTION};
use sliding_puzzle_env::env::{Environment, SlidingPuzzleEnv};
use sliding_puzzle_env::puzzle::{MoveOutcome, PuzzleCore};
use sliding_puzzle_env::render::{RenderMode, Renderer};
use sliding_puzzle_env::{Observation, PuzzleError};

/// Renderer that records the boards it was asked to draw.
#[derive(Clone, Default)]
struct RecordingRenderer {
    frames: Arc<Mutex<Vec<Observation>>>,
    open: bool,
    closes: Arc<Mutex<usize>>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, observation: &Observation) -> sliding_puzzle_env::Result<()> {
        self.open = true;
        self.frames.lock().unwrap().push(*observation);
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            *self.closes.lock().unwrap() += 1;
        }
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

fn env_with_recorder(seed: u64) -> (SlidingPuzzleEnv, RecordingRenderer) {
    let recorder = RecordingRenderer::default();
    let env = SlidingPuzzleEnv::with_renderer(
        PuzzleConfig::default(),
        Some(seed),
        Box::new(recorder.clone()),
    );
    (env, recorder)
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_right_on_goal_board_is_illegal() {
    let (mut env, _) = env_with_recorder(1);

    // Before any reset the board is solved with no previous action.
    let result = env.step(1).unwrap();

    assert_eq!(result.observation.board, Board::goal());
    assert_eq!(result.reward, -20.0);
    assert!(!result.done);
    assert_eq!(result.observation.prev_action, Some(Direction::Right));
    assert_eq!(result.observation.to_array()[9], 1);
}

#[test]
fn test_up_on_goal_board() {
    let (mut env, _) = env_with_recorder(1);

    let result = env.step(2).unwrap();

    assert_eq!(result.observation.board.tiles(), &[0, 1, 2, 3, 4, 8, 6, 7, 5]);
    assert_eq!(result.reward, -1.0);
    assert!(!result.done);
}

#[test]
fn test_reversal_from_left() {
    let mut core = PuzzleCore::from_parts(
        PuzzleConfig::default(),
        Board::from_tiles([0, 1, 2, 3, 4, 5, 8, 6, 7]).unwrap(),
        Some(Direction::Left),
    );

    let t = core.step(1).unwrap();
    assert_eq!(t.outcome, MoveOutcome::Reversal);
    assert_eq!(t.reward, -10.0);
    assert!(!t.done);
}

#[test]
fn test_solving_reversal_pays_solved_reward() {
    let mut core = PuzzleCore::from_parts(
        PuzzleConfig::default(),
        Board::from_tiles([0, 1, 2, 3, 4, 8, 6, 7, 5]).unwrap(),
        Some(Direction::Up),
    );

    let t = core.step(3).unwrap();
    assert!(t.done);
    assert_eq!(t.reward, 100.0);
}

#[test]
fn test_step_up_then_down_solves_from_goal() {
    let (mut env, _) = env_with_recorder(1);

    env.step(2).unwrap();
    let result = env.step(3).unwrap();
    assert!(result.done);
    assert_eq!(result.reward, 100.0);
}

// =============================================================================
// Host Contract
// =============================================================================

#[test]
fn test_reset_postconditions() {
    let (mut env, _) = env_with_recorder(2024);

    for _ in 0..100 {
        let obs = env.reset();
        assert!(!obs.board.is_solved());
        assert_eq!(obs.prev_action, None);
        assert_eq!(obs.to_array()[9], NO_PREV_ACTION);
        assert!(env.observation_space().contains(&obs.to_array()));
    }
}

#[test]
fn test_first_step_after_reset_is_never_reversal() {
    let (mut env, _) = env_with_recorder(8);

    for _ in 0..50 {
        env.reset();
        for direction in env.core().legal_directions() {
            let mut probe = env.core().clone();
            let t = probe.step_direction(direction);
            assert_ne!(t.outcome, MoveOutcome::Reversal);
        }
    }
}

#[test]
fn test_invalid_actions_rejected() {
    let (mut env, _) = env_with_recorder(3);
    let before = env.reset();

    for action in [-10, -1, 4, 5, 1000] {
        match env.step(action) {
            Err(PuzzleError::InvalidAction(a)) => assert_eq!(a, action),
            other => panic!("expected InvalidAction, got {:?}", other.map(|r| r.reward)),
        }
        assert!(!env.action_space().contains(action));
    }
    assert_eq!(env.observation(), before);
}

#[test]
fn test_seed_controls_episodes() {
    let (mut a, _) = env_with_recorder(1);
    let (mut b, _) = env_with_recorder(2);

    assert_eq!(a.seed(Some(31337)), vec![31337]);
    assert_eq!(b.seed(Some(31337)), vec![31337]);

    let episodes_a: Vec<_> = (0..5).map(|_| a.reset()).collect();
    let episodes_b: Vec<_> = (0..5).map(|_| b.reset()).collect();
    assert_eq!(episodes_a, episodes_b);
}

#[test]
fn test_instances_do_not_share_rng() {
    let (mut a, _) = env_with_recorder(50);
    let (mut b, _) = env_with_recorder(50);
    let (mut noisy, _) = env_with_recorder(50);

    // Resetting a third instance must not perturb the others.
    for _ in 0..7 {
        noisy.reset();
    }
    assert_eq!(a.reset(), b.reset());
}

#[test]
fn test_render_delegates_and_closes() {
    let (mut env, recorder) = env_with_recorder(4);
    let obs = env.reset();

    env.render(RenderMode::Human, false).unwrap();
    env.step(0).unwrap();
    env.render(RenderMode::Human, false).unwrap();

    {
        let frames = recorder.frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], obs);
    }

    env.render(RenderMode::Human, true).unwrap();
    assert_eq!(*recorder.closes.lock().unwrap(), 1);

    // Closing draws nothing.
    assert_eq!(recorder.frames.lock().unwrap().len(), 2);
}

#[test]
fn test_ansi_render_skips_renderer() {
    let (mut env, recorder) = env_with_recorder(4);
    env.reset();

    let text = env.render(RenderMode::Ansi, false).unwrap();
    assert!(text.is_some());
    assert!(recorder.frames.lock().unwrap().is_empty());
}

#[test]
fn test_restored_near_goal_episode_ends_with_solved_reward() {
    let (mut env, _) = env_with_recorder(77);
    env.reset();

    let mut snapshot = env.snapshot();
    snapshot.observation = Observation::new(
        Board::from_tiles([0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap(),
        Some(Direction::Up),
    );
    env.restore(&snapshot);

    let result = env.step(Direction::Right.code().into()).unwrap();
    assert!(result.done);
    assert_eq!(result.reward, 100.0);
    assert!(result.observation.board.is_solved());
    assert_eq!(result.observation.prev_action, Some(Direction::Right));
}
