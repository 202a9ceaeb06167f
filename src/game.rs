//! The loop harness
//!
//! Owns everything the session touches: game state, asset store, the input
//! source slot, and the leaderboard. The host scheduler calls [`Game::frame`]
//! exactly once per display refresh and requests the next tick only after
//! the call returns; outside PLAYING a frame is render-only, so the host may
//! stop rescheduling until the next input event arrives.

use crate::assets::AssetStore;
use crate::highscores::HighScores;
use crate::input::InputSource;
use crate::render::{Surface, scene};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct Game<B> {
    pub state: GameState,
    pub assets: AssetStore<B>,
    pub scores: HighScores,
    input: Option<Box<dyn InputSource>>,
    pending_activate: bool,
}

impl<B> Game<B> {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("game initialized with seed {seed}");
        Self {
            state: GameState::new(seed, tuning),
            assets: AssetStore::new(),
            scores: HighScores::new(),
            input: None,
            pending_activate: false,
        }
    }

    /// Subscribe an input source for the active lifecycle
    pub fn attach_input(&mut self, source: Box<dyn InputSource>) {
        self.input = Some(source);
    }

    /// Unsubscribe on leaving the active lifecycle
    pub fn detach_input(&mut self) {
        self.input = None;
    }

    /// Inject a single activate event (host event handlers push here);
    /// consumed by the next frame.
    pub fn push_activate(&mut self) {
        self.pending_activate = true;
    }

    /// True while the simulation is advancing; the host scheduler keeps
    /// requesting ticks only in this phase.
    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    /// One update+render pass. Returns the events this tick produced;
    /// consumers are one-way and cannot mutate loop-owned state.
    pub fn frame<S: Surface<Bitmap = B>>(&mut self, surface: &mut S) -> Vec<GameEvent> {
        let mut activate = std::mem::take(&mut self.pending_activate);
        if let Some(source) = self.input.as_mut() {
            let polled = source.poll_activate();
            activate = activate || polled;
        }

        // The state machine holds still until every asset slot has
        // resolved (loaded or failed); until then the pass renders the
        // static idle frame.
        if activate && !self.assets.resolved() {
            log::debug!("activate ignored while assets are pending");
            activate = false;
        }

        let was_playing = self.state.phase == GamePhase::Playing;
        let events = tick(&mut self.state, &TickInput { activate });

        for event in &events {
            if let GameEvent::GameOver {
                final_score,
                high_score,
            } = event
            {
                log::info!("game over: score {final_score}, high score {high_score}");
                self.scores.add_score(*final_score, self.state.speed);
            }
        }
        if !was_playing && self.state.phase == GamePhase::Playing {
            log::info!("session started");
        }

        scene::draw(&self.state, &self.assets, surface);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteId;
    use crate::input::ScriptedInput;
    use crate::render::headless::HeadlessSurface;

    fn resolve_all(game: &mut Game<()>) {
        for id in SpriteId::ALL {
            game.assets.mark_failed(id);
        }
    }

    #[test]
    fn pending_assets_gate_the_state_machine() {
        let mut game = Game::<()>::new(1, Tuning::default());
        let mut surface = HeadlessSurface::default();

        game.push_activate();
        let events = game.frame(&mut surface);
        assert!(events.is_empty());
        assert_eq!(game.state.phase, GamePhase::Idle);
        // The pass still rendered a static frame
        assert_eq!(surface.clears, 1);

        resolve_all(&mut game);
        game.push_activate();
        game.frame(&mut surface);
        assert_eq!(game.state.phase, GamePhase::Playing);
    }

    #[test]
    fn scripted_source_drives_the_session() {
        let mut game = Game::<()>::new(2, Tuning::default());
        resolve_all(&mut game);
        game.attach_input(Box::new(ScriptedInput::at_steps(&[0])));
        let mut surface = HeadlessSurface::default();

        game.frame(&mut surface);
        assert!(game.is_running());

        game.detach_input();
        for _ in 0..10 {
            game.frame(&mut surface);
        }
        assert_eq!(game.state.score, 10);
    }

    #[test]
    fn game_over_feeds_the_leaderboard() {
        let mut game = Game::<()>::new(3, Tuning::default());
        resolve_all(&mut game);
        let mut surface = HeadlessSurface::default();

        game.push_activate();
        game.frame(&mut surface);

        // Park the obstacle on the player band and let the next frame hit
        game.state.obstacle.x = crate::consts::PLAYER_X;
        let events = game.frame(&mut surface);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );
        assert!(!game.is_running());
        assert_eq!(game.scores.top_score(), Some(game.state.final_score));
    }
}
