//! Top-level app state: the game session plus the leaderboard flow.
//!
//! The frame loop in `main` feeds inputs to `handle_input` and calls `update`
//! once per frame. Leaderboard calls run in the background and are picked up
//! by `update` when they finish.

use crate::core::config::Config;
use crate::core::high_score::HighScoreStore;
use crate::game::{
    process_input, process_tick, GameInput, GameSession, InputEffect, Screen, ScreenEvent,
    TickResult,
};
use crate::input::AppInput;
use crate::leaderboard::{
    LeaderboardBackend, LeaderboardEntry, LeaderboardError, LeaderboardView, NameEntry,
    PendingRequest,
};
use rand::Rng;
use std::sync::Arc;

pub struct App {
    pub session: GameSession,
    pub name_entry: NameEntry,
    pub board: LeaderboardView,
    pub leaderboard_rows: usize,
    /// Best score on the leaderboard, from the most recent fetch.
    pub leader_score: Option<u32>,
    /// The run that just ended set a new high score.
    pub new_high_score: bool,
    pub should_quit: bool,
    backend: Arc<dyn LeaderboardBackend>,
    store: HighScoreStore,
    submit: Option<PendingRequest<()>>,
    fetch: Option<PendingRequest<Vec<LeaderboardEntry>>>,
}

impl App {
    /// Build the app, reading the persisted high score once.
    pub fn new(config: &Config, backend: Arc<dyn LeaderboardBackend>, store: HighScoreStore) -> Self {
        let high_score = store.load();
        log::info!("Loaded high score {}", high_score);
        Self {
            session: GameSession::new(config.world.clone(), high_score),
            name_entry: NameEntry::new(),
            board: LeaderboardView::Idle,
            leaderboard_rows: config.leaderboard_rows,
            leader_score: None,
            new_high_score: false,
            should_quit: false,
            backend,
            store,
            submit: None,
            fetch: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_some()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_some()
    }

    /// Route one input according to the current screen.
    pub fn handle_input(&mut self, input: AppInput) {
        match input {
            AppInput::Quit => self.should_quit = true,
            AppInput::Jump => self.game_input(GameInput::Jump),
            AppInput::Fire => self.game_input(GameInput::Fire),
            AppInput::Char(c) => {
                if self.session.screen == Screen::Over {
                    self.name_entry.handle_char_input(c);
                }
            }
            AppInput::Backspace => {
                if self.session.screen == Screen::Over {
                    self.name_entry.handle_backspace();
                }
            }
            AppInput::Submit => self.submit_score(),
            AppInput::Continue => {
                // Game-over stays put until the pending submission settles
                if self.session.screen == Screen::Over && self.is_submitting() {
                    return;
                }
                if self.session.transition(ScreenEvent::Continue) {
                    self.new_high_score = false;
                }
            }
        }
    }

    fn game_input(&mut self, input: GameInput) {
        if process_input(&mut self.session, input) == InputEffect::RunStarted {
            log::info!("Run started");
            self.new_high_score = false;
        }
    }

    /// Validate the typed name and, if valid, send the score in the
    /// background. Invalid names never reach the backend.
    pub fn submit_score(&mut self) {
        if self.session.screen != Screen::Over || self.submit.is_some() {
            return;
        }
        let Some(name) = self.name_entry.validated_name() else {
            return;
        };

        let score = self.session.score;
        log::info!("Submitting score {} for {}", score, name);
        let backend = Arc::clone(&self.backend);
        self.submit = Some(PendingRequest::spawn(move || backend.submit(&name, score)));
    }

    /// Start fetching the ranked list, replacing any fetch in flight.
    pub fn refresh_leaderboard(&mut self) {
        let backend = Arc::clone(&self.backend);
        self.fetch = Some(PendingRequest::spawn(move || backend.fetch()));
    }

    /// Advance one frame: collect finished requests, then simulate.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> TickResult {
        self.poll_requests();

        let result = process_tick(&mut self.session, rng);
        if let Some(cause) = result.ended {
            log::info!(
                "Run ended ({}) with score {} after {} frames",
                cause.describe(),
                self.session.score,
                self.session.frames
            );
            self.name_entry.message = None;
            if result.new_high_score {
                self.new_high_score = true;
                self.save_high_score();
            }
        }
        result
    }

    fn save_high_score(&self) {
        let high_score = self.session.high_score;
        match self.store.save(high_score) {
            Ok(()) => log::info!("New high score {}", high_score),
            Err(e) => log::warn!("Could not save high score {}: {}", high_score, e),
        }
    }

    /// Pick up results from finished background requests.
    pub fn poll_requests(&mut self) {
        if let Some(result) = self.submit.as_mut().and_then(PendingRequest::poll) {
            self.submit = None;
            self.on_submit_finished(result);
        }
        if let Some(result) = self.fetch.as_mut().and_then(PendingRequest::poll) {
            self.fetch = None;
            self.on_fetch_finished(result);
        }
    }

    /// Block until every request in flight, including any fetch started by
    /// a finished submission, has been handled.
    pub fn settle_requests(&mut self) {
        while self.submit.is_some() || self.fetch.is_some() {
            if let Some(pending) = self.submit.take() {
                self.on_submit_finished(pending.wait());
            }
            if let Some(pending) = self.fetch.take() {
                self.on_fetch_finished(pending.wait());
            }
        }
    }

    fn on_submit_finished(&mut self, result: Result<(), LeaderboardError>) {
        match result {
            Ok(()) => {
                log::info!("Score {} submitted", self.session.score);
                if self.session.transition(ScreenEvent::ScoreSubmitted) {
                    self.name_entry.clear();
                    self.board = LeaderboardView::Loading;
                    self.refresh_leaderboard();
                }
            }
            Err(e) => {
                log::warn!("Score submission failed: {}", e);
                self.name_entry.message = Some(format!("Error submitting score: {}", e));
            }
        }
    }

    fn on_fetch_finished(&mut self, result: Result<Vec<LeaderboardEntry>, LeaderboardError>) {
        match result {
            Ok(entries) => {
                log::info!("Fetched {} leaderboard entries", entries.len());
                self.board = LeaderboardView::Loaded(entries);
                self.leader_score = self.board.leader_score();
            }
            Err(e) => {
                log::warn!("Leaderboard fetch failed: {}", e);
                self.board = LeaderboardView::Failed;
            }
        }
    }

    /// The score is ahead of the current leaderboard leader.
    pub fn beating_leader(&self) -> bool {
        matches!(self.leader_score, Some(leader) if leader > 0 && self.session.score > leader)
    }
}
