//! The arcade game: a flyer dodging obstacle pairs and shooting hostiles.
//!
//! Gravity pulls the player down every frame and a jump sets an upward
//! velocity. Obstacle pairs and hostiles scroll in from the right; passing a
//! pair or shooting a hostile scores, touching either ends the run.

pub mod logic;
pub mod screen;
pub mod session;
pub mod types;

pub use logic::{process_input, process_tick, GameInput, InputEffect, TickResult};
pub use screen::{Panel, Screen, ScreenEvent};
pub use session::GameSession;
pub use types::*;
