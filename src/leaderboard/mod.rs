//! Score submission and the ranked leaderboard.

pub mod client;
pub mod form;
pub mod request;
pub mod types;
pub mod view;

pub use client::{validate_name, HttpLeaderboard, LeaderboardBackend, LeaderboardError};
pub use form::NameEntry;
pub use request::PendingRequest;
pub use types::LeaderboardEntry;
pub use view::LeaderboardView;
