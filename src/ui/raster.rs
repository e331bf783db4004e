//! The play field as a grid of terminal cells.
//!
//! `render_world` maps world coordinates onto however many cells are
//! available. It only reads the session; drawing the result to the terminal
//! is left to `play_scene`.

use crate::game::{Aabb, GameSession, Screen};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub const SKY: Color = Color::Rgb(135, 206, 235);
pub const OBSTACLE_COLOR: Color = Color::Rgb(0, 200, 0);
pub const PROJECTILE_COLOR: Color = Color::Rgb(255, 69, 0);
pub const HOSTILE_COLOR: Color = Color::Rgb(220, 0, 0);
pub const PLAYER_COLOR: Color = Color::Rgb(255, 255, 0);
pub const TEXT_COLOR: Color = Color::Black;

const SOLID: char = '█';
const ROUND: char = '●';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub const fn blank() -> Self {
        Self {
            symbol: ' ',
            fg: TEXT_COLOR,
            bg: SKY,
        }
    }

    const fn solid(fg: Color) -> Self {
        Self {
            symbol: SOLID,
            fg,
            bg: SKY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
}

impl Raster {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width as usize * height as usize],
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    fn set(&mut self, col: i64, row: i64, cell: Cell) {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return;
        }
        let index = row as usize * self.width as usize + col as usize;
        self.cells[index] = cell;
    }

    /// Write text left to right, clipped at the right edge.
    pub fn put_text(&mut self, col: u16, row: u16, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            let cell = Cell {
                symbol: ch,
                fg,
                bg: SKY,
            };
            self.set(col as i64 + i as i64, row as i64, cell);
        }
    }

    /// The symbols of one row as a string.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.width)
            .filter_map(|col| self.get(col, row))
            .map(|c| c.symbol)
            .collect()
    }

    pub fn count(&self, symbol: char, fg: Color) -> usize {
        self.cells
            .iter()
            .filter(|c| c.symbol == symbol && c.fg == fg)
            .count()
    }

    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..self.width)
                    .filter_map(|col| self.get(col, row))
                    .map(|c| Span::styled(c.symbol.to_string(), Style::default().fg(c.fg).bg(c.bg)))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// World-to-cell scale.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    /// Cells per world unit, horizontally and vertically.
    sx: f64,
    sy: f64,
}

impl Viewport {
    fn new(world_width: f64, world_height: f64, cols: u16, rows: u16) -> Self {
        Self {
            sx: cols as f64 / world_width,
            sy: rows as f64 / world_height,
        }
    }

    /// World coordinates of a cell's centre.
    fn cell_center(&self, col: i64, row: i64) -> (f64, f64) {
        ((col as f64 + 0.5) / self.sx, (row as f64 + 0.5) / self.sy)
    }

    /// Cell containing a world point.
    fn cell_at(&self, x: f64, y: f64) -> (i64, i64) {
        ((x * self.sx).floor() as i64, (y * self.sy).floor() as i64)
    }
}

/// Fill every cell whose centre lies in the box. A box too small to cover
/// any centre still paints the cell under its own centre.
fn fill_rect(raster: &mut Raster, vp: &Viewport, rect: &Aabb, cell: Cell) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let (c0, r0) = vp.cell_at(rect.x, rect.y);
    let (c1, r1) = vp.cell_at(rect.right(), rect.bottom());
    let mut painted = false;
    for row in r0..=r1 {
        for col in c0..=c1 {
            let (cx, cy) = vp.cell_center(col, row);
            if rect.contains_point(cx, cy) {
                raster.set(col, row, cell);
                painted = true;
            }
        }
    }
    if !painted {
        let (col, row) = vp.cell_at(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        raster.set(col, row, cell);
    }
}

/// Fill every cell whose centre lies within `radius` of the centre, with the
/// same small-shape fallback as `fill_rect`.
fn fill_circle(raster: &mut Raster, vp: &Viewport, center: (f64, f64), radius: f64, cell: Cell) {
    let (x, y) = center;
    let (c0, r0) = vp.cell_at(x - radius, y - radius);
    let (c1, r1) = vp.cell_at(x + radius, y + radius);
    let mut painted = false;
    for row in r0..=r1 {
        for col in c0..=c1 {
            let (cx, cy) = vp.cell_center(col, row);
            if (cx - x).powi(2) + (cy - y).powi(2) <= radius * radius {
                raster.set(col, row, cell);
                painted = true;
            }
        }
    }
    if !painted {
        let (col, row) = vp.cell_at(x, y);
        raster.set(col, row, cell);
    }
}

/// Draw the session into a `cols` x `rows` raster.
///
/// The sky is always drawn. Entities and the score overlay appear only while
/// playing or on the game-over screen.
pub fn render_world(
    session: &GameSession,
    leader_score: Option<u32>,
    cols: u16,
    rows: u16,
) -> Raster {
    let mut raster = Raster::new(cols, rows);
    if cols == 0 || rows == 0 || !session.screen.shows_world() {
        return raster;
    }

    let vp = Viewport::new(session.world.width, session.world.height, cols, rows);

    for pair in &session.obstacles {
        fill_rect(&mut raster, &vp, &pair.top(), Cell::solid(OBSTACLE_COLOR));
        fill_rect(&mut raster, &vp, &pair.bottom(), Cell::solid(OBSTACLE_COLOR));
    }

    let round = Cell {
        symbol: ROUND,
        fg: PROJECTILE_COLOR,
        bg: SKY,
    };
    for shot in &session.projectiles {
        fill_circle(&mut raster, &vp, shot.center(), shot.size / 2.0, round);
    }

    for hostile in &session.hostiles {
        fill_rect(&mut raster, &vp, &hostile.bounds(), Cell::solid(HOSTILE_COLOR));
    }

    fill_rect(
        &mut raster,
        &vp,
        &session.player.bounds(),
        Cell::solid(PLAYER_COLOR),
    );

    // Score overlay
    raster.put_text(1, 0, &format!("Score: {}", session.score), TEXT_COLOR);
    if session.high_score > 0 {
        raster.put_text(
            1,
            1,
            &format!("High Score: {}", session.high_score),
            TEXT_COLOR,
        );
    }

    let beating_leader = session.screen == Screen::Playing
        && matches!(leader_score, Some(leader) if leader > 0 && session.score > leader);
    if beating_leader && rows > 2 {
        let banner = "New leader!";
        let col = cols.saturating_sub(banner.chars().count() as u16 + 1);
        raster.put_text(col, 0, banner, Color::Magenta);
    }

    raster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WorldConfig;
    use crate::game::{EndCause, Hostile, ObstaclePair, Projectile};

    fn playing() -> GameSession {
        let mut s = GameSession::new(WorldConfig::default(), 0);
        s.start_run();
        s
    }

    #[test]
    fn test_start_screen_is_only_sky() {
        let s = GameSession::new(WorldConfig::default(), 10);
        let raster = render_world(&s, None, 80, 30);
        assert!(raster.row_text(0).trim().is_empty());
        assert_eq!(raster.count(SOLID, PLAYER_COLOR), 0);
        assert_eq!(raster.get(0, 0), Some(Cell::blank()));
    }

    #[test]
    fn test_player_drawn_at_scaled_position() {
        let s = playing();
        // 800x600 world on 80x30 cells: 10 units per column, 20 per row.
        // The 40x30 player covers four column centres and one row centre.
        let raster = render_world(&s, None, 80, 30);
        assert_eq!(raster.get(20, 15).map(|c| c.fg), Some(PLAYER_COLOR));
        assert_eq!(raster.count(SOLID, PLAYER_COLOR), 4);
    }

    #[test]
    fn test_score_text_and_high_score() {
        let mut s = playing();
        s.score = 3;
        let raster = render_world(&s, None, 80, 30);
        assert!(raster.row_text(0).contains("Score: 3"));
        assert!(!raster.row_text(1).contains("High Score"));

        s.high_score = 9;
        let raster = render_world(&s, None, 80, 30);
        assert!(raster.row_text(1).contains("High Score: 9"));
    }

    #[test]
    fn test_entities_drawn() {
        let mut s = playing();
        s.obstacles.push(ObstaclePair {
            x: 600.0,
            width: 80.0,
            gap_top: 200.0,
            gap: 200.0,
            floor: 600.0,
            passed: false,
        });
        s.hostiles.push(Hostile {
            x: 400.0,
            y: 100.0,
            size: 40.0,
        });
        s.projectiles.push(Projectile {
            x: 300.0,
            y: 300.0,
            size: 15.0,
        });
        let raster = render_world(&s, None, 80, 30);
        assert!(raster.count(SOLID, OBSTACLE_COLOR) > 0);
        assert!(raster.count(SOLID, HOSTILE_COLOR) > 0);
        assert!(raster.count(ROUND, PROJECTILE_COLOR) >= 1);
        // Gap rows stay clear in the obstacle's columns
        assert_eq!(raster.get(64, 15), Some(Cell::blank()));
    }

    #[test]
    fn test_world_still_drawn_on_game_over() {
        let mut s = playing();
        s.end_run(EndCause::Obstacle);
        let raster = render_world(&s, None, 80, 30);
        assert!(raster.count(SOLID, PLAYER_COLOR) > 0);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut s = playing();
        s.projectiles.push(Projectile {
            x: 300.0,
            y: 300.0,
            size: 15.0,
        });
        let before = format!("{:?}", s);
        let _ = render_world(&s, Some(1), 80, 30);
        assert_eq!(format!("{:?}", s), before);
    }

    #[test]
    fn test_leader_banner() {
        let mut s = playing();
        s.score = 5;
        let raster = render_world(&s, Some(4), 80, 30);
        assert!(raster.row_text(0).contains("New leader!"));
        let raster = render_world(&s, Some(5), 80, 30);
        assert!(!raster.row_text(0).contains("New leader!"));
    }

    #[test]
    fn test_zero_size_area() {
        let s = playing();
        let raster = render_world(&s, None, 0, 0);
        assert_eq!(raster.width, 0);
        assert_eq!(raster.get(0, 0), None);
    }
}
