//! Background leaderboard requests polled from the frame loop.

use super::client::LeaderboardError;
use std::thread::{self, JoinHandle};

/// A leaderboard call running on its own thread.
///
/// The frame loop calls `poll` once per frame; it never blocks.
pub struct PendingRequest<T> {
    handle: Option<JoinHandle<Result<T, LeaderboardError>>>,
}

impl<T: Send + 'static> PendingRequest<T> {
    pub fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<T, LeaderboardError> + Send + 'static,
    {
        Self {
            handle: Some(thread::spawn(job)),
        }
    }

    /// Take the result if the request has finished. Returns `None` while it
    /// is still running, and after the result has been taken.
    pub fn poll(&mut self) -> Option<Result<T, LeaderboardError>> {
        let handle = self.handle.take()?;
        if handle.is_finished() {
            Some(join(handle))
        } else {
            self.handle = Some(handle);
            None
        }
    }

    /// Block until the request finishes.
    pub fn wait(mut self) -> Result<T, LeaderboardError> {
        match self.handle.take() {
            Some(handle) => join(handle),
            None => Err(LeaderboardError::Network(
                "request result already taken".to_string(),
            )),
        }
    }
}

fn join<T>(handle: JoinHandle<Result<T, LeaderboardError>>) -> Result<T, LeaderboardError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(LeaderboardError::Network("request thread panicked".into())))
}
