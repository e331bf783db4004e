//! The state of one play session: screen, scores and entity lists.

use super::screen::{Screen, ScreenEvent};
use super::types::{EndCause, Hostile, ObstaclePair, Player, Projectile};
use crate::core::config::WorldConfig;

/// Everything the input handler, simulation step and renderer share.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub world: WorldConfig,
    pub screen: Screen,
    pub score: u32,
    /// Best score across runs, loaded from disk at startup.
    pub high_score: u32,
    /// Frames simulated in the current run.
    pub frames: u64,
    pub player: Player,
    pub obstacles: Vec<ObstaclePair>,
    pub projectiles: Vec<Projectile>,
    pub hostiles: Vec<Hostile>,
    /// Set when the current run ends.
    pub end_cause: Option<EndCause>,
}

impl GameSession {
    pub fn new(world: WorldConfig, high_score: u32) -> Self {
        let player = Player::spawn(&world);
        Self {
            world,
            screen: Screen::Start,
            score: 0,
            high_score,
            frames: 0,
            player,
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            hostiles: Vec::new(),
            end_cause: None,
        }
    }

    /// Apply a screen event. Returns false (and changes nothing) if the event
    /// is not valid on the current screen.
    pub fn transition(&mut self, event: ScreenEvent) -> bool {
        let Some(next) = self.screen.next(event) else {
            return false;
        };
        log::debug!("Screen {} -> {}", self.screen.name(), next.name());
        self.screen = next;
        if next == Screen::Start {
            self.clear_entities();
        }
        true
    }

    /// Reset the run and switch to playing. Only valid from the start screen.
    pub fn start_run(&mut self) -> bool {
        if self.screen != Screen::Start {
            return false;
        }
        self.reset();
        self.transition(ScreenEvent::Jump)
    }

    /// Fresh player, empty lists, zero score and frame counter.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.world);
        self.clear_entities();
        self.score = 0;
        self.frames = 0;
        self.end_cause = None;
    }

    fn clear_entities(&mut self) {
        self.obstacles.clear();
        self.projectiles.clear();
        self.hostiles.clear();
    }

    /// Freeze the run and move to game-over. Returns true if the final score
    /// strictly beat the previous high score (which is then updated).
    pub fn end_run(&mut self, cause: EndCause) -> bool {
        if !self.transition(ScreenEvent::RunEnded) {
            return false;
        }
        self.end_cause = Some(cause);
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
