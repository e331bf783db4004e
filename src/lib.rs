//! Fireflap - terminal side-scroller with an online leaderboard.
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some helpers are only used by the binary or tests
#![allow(dead_code)]

pub mod app;
pub mod core;
pub mod game;
pub mod input;
pub mod leaderboard;
pub mod ui;
pub mod utils;
