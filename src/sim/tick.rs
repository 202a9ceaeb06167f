//! Fixed-cadence simulation step
//!
//! One call advances the world by exactly one step. Step order within a
//! PLAYING tick: jump input, gravity integration, obstacle advance/recycle,
//! ground scroll, score, frame counter, collision. An activate that enters
//! PLAYING consumes its tick; simulation begins on the next one.

use rand::Rng;

use super::collision::player_hits_obstacle;
use super::state::{GamePhase, GameState, ObstacleKind};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// The one discrete input: jump while playing, (re)start otherwise
    pub activate: bool,
}

/// Notifications produced by a tick, returned by value so external
/// consumers can never re-enter loop-owned state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Live score sample, emitted at a fixed cadence while playing
    ScoreUpdate(u64),
    /// Emitted exactly once per session, on the collision step
    GameOver { final_score: u64, high_score: u64 },
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => {
            if input.activate {
                state.reset_session();
                state.phase = GamePhase::Playing;
                // The host UI is told about the reset score, as on every
                // later sampling instant.
                return vec![GameEvent::ScoreUpdate(0)];
            }
            Vec::new()
        }
        GamePhase::Playing => step(state, input),
    }
}

fn step(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.activate {
        state.player.try_jump(state.tuning.jump_strength);
    }

    state.player.integrate(state.tuning.gravity);
    advance_obstacle(state);
    state.ground_offset += state.speed;

    state.score += 1;
    if state.frame_count % SCORE_EMIT_PERIOD == 0 {
        events.push(GameEvent::ScoreUpdate(state.score));
    }
    state.frame_count += 1;

    if player_hits_obstacle(&state.player, &state.obstacle) {
        state.final_score = state.score;
        state.high_score = state.high_score.max(state.score);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver {
            final_score: state.final_score,
            high_score: state.high_score,
        });
    }

    events
}

/// Scroll the obstacle and recycle it once fully off-screen-left: new
/// jittered position past the right edge, new uniform-random kind, and the
/// speed progression check. Speed-ups are evaluated only here, so at most
/// one step fires per recycle even if several thresholds were crossed.
fn advance_obstacle(state: &mut GameState) {
    state.obstacle.x -= state.speed;

    if state.obstacle.x < -state.obstacle.kind.width() {
        let jitter = if state.tuning.spawn_jitter > 0.0 {
            state.rng.random_range(0.0..state.tuning.spawn_jitter)
        } else {
            0.0
        };
        state.obstacle.x = GAME_WIDTH + jitter;

        let index = state.rng.random_range(0..ObstacleKind::CATALOG.len());
        state.obstacle.kind = ObstacleKind::CATALOG[index];

        if state.score > 0 && state.score % state.tuning.speed_threshold == 0 {
            state.speed += state.tuning.speed_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        let events = tick(&mut state, &TickInput { activate: true });
        assert_eq!(events, vec![GameEvent::ScoreUpdate(0)]);
        state
    }

    #[test]
    fn activate_starts_a_session_from_idle() {
        let mut state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);

        // No input - nothing moves
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);

        tick(&mut state, &TickInput { activate: true });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.player.grounded());
    }

    #[test]
    fn score_counts_steps_and_samples_every_tenth() {
        let mut state = playing_state(2);
        let mut updates = Vec::new();
        for _ in 0..30 {
            for event in tick(&mut state, &TickInput::default()) {
                if let GameEvent::ScoreUpdate(score) = event {
                    updates.push(score);
                }
            }
        }
        assert_eq!(state.score, 30);
        // frame_count 0, 10, 20 sampled; score had already incremented
        assert_eq!(updates, vec![1, 11, 21]);
    }

    #[test]
    fn obstacle_scrolls_by_speed_each_step() {
        let mut state = playing_state(3);
        let x0 = state.obstacle.x;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacle.x, x0 - state.speed);
    }

    #[test]
    fn recycle_respawns_past_right_edge() {
        let mut state = playing_state(4);
        state.obstacle.x = -state.obstacle.kind.width() + 1.0;
        tick(&mut state, &TickInput::default());

        assert!(state.obstacle.x >= GAME_WIDTH);
        assert!(state.obstacle.x < GAME_WIDTH + state.tuning.spawn_jitter);
    }

    #[test]
    fn speed_steps_up_only_at_qualifying_recycles() {
        let mut state = playing_state(5);
        let start = state.speed;

        // Recycle with a non-qualifying score: no change
        state.score = 123;
        state.obstacle.x = -state.obstacle.kind.width();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.speed, start);

        // Recycle with the score sitting on the threshold
        state.score = state.tuning.speed_threshold;
        state.obstacle.x = -state.obstacle.kind.width();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.speed, start + state.tuning.speed_step);

        // Crossing qualifies only while it sits on the multiple, so a
        // plain mid-run recycle leaves the speed alone
        state.obstacle.x = -state.obstacle.kind.width();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.speed, start + state.tuning.speed_step);
    }

    #[test]
    fn collision_freezes_score_and_fires_once() {
        let mut state = playing_state(6);
        state.high_score = 10;
        // Park the obstacle so the very next step overlaps the player band
        state.obstacle.x = PLAYER_X + PLAYER_WIDTH + state.speed - 1.0;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.final_score, 1);
        assert_eq!(state.high_score, 10);
        assert!(events.contains(&GameEvent::GameOver {
            final_score: 1,
            high_score: 10,
        }));

        // GameOver is render-only; no further events without input
        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.final_score, 1);
    }

    #[test]
    fn high_score_tracks_best_final_score() {
        let mut state = playing_state(7);
        state.score = 500;
        state.obstacle.x = PLAYER_X;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.high_score, 501);

        // Next session ends immediately with a lower score
        tick(&mut state, &TickInput { activate: true });
        state.obstacle.x = PLAYER_X;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.final_score, 1);
        assert_eq!(state.high_score, 501);
    }

    #[test]
    fn restart_from_game_over_resets_session() {
        let mut state = playing_state(8);
        state.obstacle.x = PLAYER_X;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        let events = tick(&mut state, &TickInput { activate: true });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(events, vec![GameEvent::ScoreUpdate(0)]);
        assert!(state.player.grounded());
        assert_eq!(state.obstacle.x, GAME_WIDTH);
    }

    #[test]
    fn same_seed_and_inputs_replay_identically() {
        let mut a = GameState::new(99999, Tuning::default());
        let mut b = GameState::new(99999, Tuning::default());

        for step in 0..5000u64 {
            let input = TickInput {
                activate: step == 0 || step % 97 == 0,
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.speed, b.speed);
        assert_eq!(a.obstacle, b.obstacle);
        assert_eq!(a.player, b.player);
    }
}
