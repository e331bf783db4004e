pub mod game_common;
pub mod panels;
pub mod play_scene;
pub mod raster;

use crate::app::App;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.size();
    play_scene::render_game(frame, size, app);
}
