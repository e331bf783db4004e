//! Integration test: game-over name entry, score submission and the
//! leaderboard screen, against an in-memory backend.
//!
//! Also covers high score persistence across app restarts.

use fireflap::app::App;
use fireflap::core::{Config, HighScoreStore};
use fireflap::game::{EndCause, Screen};
use fireflap::input::AppInput;
use fireflap::leaderboard::{
    LeaderboardBackend, LeaderboardEntry, LeaderboardError, LeaderboardView,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Backend that records submissions and serves them back sorted.
#[derive(Default)]
struct MemoryBackend {
    entries: Mutex<Vec<LeaderboardEntry>>,
    submit_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    reject_with: Option<String>,
    fail_fetch: bool,
}

impl LeaderboardBackend for MemoryBackend {
    fn submit(&self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.reject_with {
            return Err(LeaderboardError::Rejected(reason.clone()));
        }
        let mut entries = self.entries.lock().unwrap();
        entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            date: "2024-03-01 12:00:00".to_string(),
        });
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(())
    }

    fn fetch(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(LeaderboardError::Network("connection refused".to_string()));
        }
        Ok(self.entries.lock().unwrap().iter().take(10).cloned().collect())
    }
}

/// Backend whose submissions wait for a signal before completing.
struct GatedBackend {
    gate: Mutex<Receiver<()>>,
    submitted: Mutex<Vec<(String, u32)>>,
}

impl GatedBackend {
    fn new() -> (Arc<Self>, mpsc::Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let backend = Arc::new(Self {
            gate: Mutex::new(rx),
            submitted: Mutex::new(Vec::new()),
        });
        (backend, tx)
    }
}

impl LeaderboardBackend for GatedBackend {
    fn submit(&self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        let _ = self.gate.lock().unwrap().recv();
        self.submitted
            .lock()
            .unwrap()
            .push((name.to_string(), score));
        Ok(())
    }

    fn fetch(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(Vec::new())
    }
}

fn entry(name: &str, score: u32) -> LeaderboardEntry {
    LeaderboardEntry {
        name: name.to_string(),
        score,
        date: "2024-01-01 09:30:00".to_string(),
    }
}

fn app_with(backend: Arc<MemoryBackend>, dir: &TempDir) -> App {
    let store = HighScoreStore::new(dir.path().join("storage.json"));
    App::new(&Config::default(), backend, store)
}

/// Play a run that scores `score` and then falls out of the field.
fn finish_run(app: &mut App, score: u32) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    app.handle_input(AppInput::Jump);
    assert_eq!(app.session.screen, Screen::Playing);
    app.session.score = score;
    app.session.player.y = 590.0;
    let tick = app.update(&mut rng);
    assert_eq!(tick.ended, Some(EndCause::OutOfBounds));
    assert_eq!(app.session.screen, Screen::Over);
}

fn type_name(app: &mut App, name: &str) {
    for c in name.chars() {
        app.handle_input(AppInput::Char(c));
    }
}

#[test]
fn test_short_name_is_never_sent() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MemoryBackend::default());
    let mut app = app_with(Arc::clone(&backend), &dir);
    finish_run(&mut app, 3);

    type_name(&mut app, "ab");
    app.handle_input(AppInput::Submit);
    app.settle_requests();

    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 0);
    assert_eq!(app.session.screen, Screen::Over);
    assert_eq!(
        app.name_entry.message.as_deref(),
        Some("Please enter a name with at least 3 characters")
    );

    // Padding with spaces doesn't help
    type_name(&mut app, "  ");
    app.handle_input(AppInput::Submit);
    app.settle_requests();
    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_successful_submit_shows_leaderboard() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MemoryBackend {
        entries: Mutex::new(vec![entry("alice", 10), entry("bob", 2)]),
        ..Default::default()
    });
    let mut app = app_with(Arc::clone(&backend), &dir);
    finish_run(&mut app, 5);

    type_name(&mut app, " carol ");
    app.handle_input(AppInput::Submit);
    assert!(app.is_submitting());
    app.settle_requests();

    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.session.screen, Screen::Leaderboard);
    assert!(app.name_entry.name_input.is_empty());

    let LeaderboardView::Loaded(entries) = &app.board else {
        panic!("expected a loaded leaderboard, got {:?}", app.board);
    };
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "carol", "bob"]);
    assert_eq!(app.leader_score, Some(10));

    let lines = app.board.lines(app.leaderboard_rows);
    assert_eq!(lines.len(), 4);
    assert!(lines[2].contains("carol"));
    assert!(lines[2].contains("2024-03-01"));
    assert!(!lines[2].contains("12:00"));

    app.handle_input(AppInput::Continue);
    assert_eq!(app.session.screen, Screen::Start);
}

#[test]
fn test_rejected_submit_stays_on_game_over() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MemoryBackend {
        reject_with: Some("Invalid score".to_string()),
        ..Default::default()
    });
    let mut app = app_with(Arc::clone(&backend), &dir);
    finish_run(&mut app, 5);

    type_name(&mut app, "dave");
    app.handle_input(AppInput::Submit);
    app.settle_requests();

    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);
    assert_eq!(app.session.screen, Screen::Over);
    assert_eq!(
        app.name_entry.message.as_deref(),
        Some("Error submitting score: Invalid score")
    );
    // The typed name survives for a retry
    assert_eq!(app.name_entry.name_input, "dave");
}

#[test]
fn test_second_submit_while_pending_is_ignored() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MemoryBackend::default());
    let mut app = app_with(Arc::clone(&backend), &dir);
    finish_run(&mut app, 1);

    type_name(&mut app, "erin");
    app.handle_input(AppInput::Submit);
    app.handle_input(AppInput::Submit);
    app.settle_requests();

    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_play_again_waits_for_pending_submit() {
    let dir = TempDir::new().unwrap();
    let (backend, release) = GatedBackend::new();
    let store = HighScoreStore::new(dir.path().join("storage.json"));
    let mut app = App::new(&Config::default(), backend.clone(), store);
    finish_run(&mut app, 5);

    type_name(&mut app, "alice");
    app.handle_input(AppInput::Submit);
    assert!(app.is_submitting());

    // Neither play-again nor jump can leave game-over mid-submission
    app.handle_input(AppInput::Continue);
    assert_eq!(app.session.screen, Screen::Over);
    app.handle_input(AppInput::Jump);
    assert_eq!(app.session.screen, Screen::Over);

    release.send(()).unwrap();
    app.settle_requests();
    assert_eq!(app.session.screen, Screen::Leaderboard);

    // The next run's score goes out on its own submission
    app.handle_input(AppInput::Continue);
    finish_run(&mut app, 42);
    type_name(&mut app, "bobby");
    app.handle_input(AppInput::Submit);
    assert!(app.is_submitting());
    release.send(()).unwrap();
    app.settle_requests();

    assert_eq!(app.session.screen, Screen::Leaderboard);
    assert_eq!(
        *backend.submitted.lock().unwrap(),
        vec![("alice".to_string(), 5), ("bobby".to_string(), 42)]
    );
}

#[test]
fn test_failed_fetch_shows_error_line() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MemoryBackend {
        fail_fetch: true,
        ..Default::default()
    });
    let mut app = app_with(Arc::clone(&backend), &dir);
    finish_run(&mut app, 2);

    type_name(&mut app, "frank");
    app.handle_input(AppInput::Submit);
    app.settle_requests();

    assert_eq!(app.session.screen, Screen::Leaderboard);
    assert_eq!(app.board, LeaderboardView::Failed);
    assert_eq!(
        app.board.lines(app.leaderboard_rows),
        vec!["Error loading leaderboard".to_string()]
    );
    assert_eq!(app.leader_score, None);
}

#[test]
fn test_startup_fetch_sets_leader_score() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MemoryBackend {
        entries: Mutex::new(vec![entry("alice", 7)]),
        ..Default::default()
    });
    let mut app = app_with(Arc::clone(&backend), &dir);
    assert_eq!(app.leader_score, None);

    app.refresh_leaderboard();
    app.settle_requests();
    assert_eq!(app.leader_score, Some(7));

    app.handle_input(AppInput::Jump);
    app.session.score = 8;
    assert!(app.beating_leader());
    app.session.score = 7;
    assert!(!app.beating_leader());
}

#[test]
fn test_high_score_persists_only_when_beaten() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MemoryBackend::default());
    let path = dir.path().join("storage.json");

    let mut app = app_with(Arc::clone(&backend), &dir);
    assert_eq!(app.session.high_score, 0);
    finish_run(&mut app, 6);
    assert!(app.new_high_score);
    assert_eq!(HighScoreStore::new(path.clone()).load(), 6);

    // Hand-written contents that a save would never produce byte for byte
    let untouched = " {\"fireflapHighScore\": 6, \"volume\": 3}\n";
    fs::write(&path, untouched).unwrap();

    // Equal score: not a new high score, nothing rewritten
    app.handle_input(AppInput::Continue);
    finish_run(&mut app, 6);
    assert!(!app.new_high_score);
    assert_eq!(fs::read_to_string(&path).unwrap(), untouched);

    // Lower score leaves the file alone too
    app.handle_input(AppInput::Continue);
    finish_run(&mut app, 2);
    assert!(!app.new_high_score);
    assert_eq!(fs::read_to_string(&path).unwrap(), untouched);

    // A fresh app picks the stored value up
    let app = app_with(backend, &dir);
    assert_eq!(app.session.high_score, 6);
}
