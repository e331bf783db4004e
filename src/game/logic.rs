//! Input handling and the per-frame simulation step.

use super::screen::Screen;
use super::session::GameSession;
use super::types::{EndCause, Hostile, ObstaclePair, Projectile};
use rand::Rng;

/// Discrete player actions, whatever key or click produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Jump,
    Fire,
}

/// What an input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    /// Input not accepted on the current screen.
    Ignored,
    RunStarted,
    Jumped,
    Fired,
}

/// Apply a jump or fire action, gated by the current screen.
pub fn process_input(session: &mut GameSession, input: GameInput) -> InputEffect {
    match (input, session.screen) {
        (GameInput::Jump, Screen::Start) => {
            if session.start_run() {
                InputEffect::RunStarted
            } else {
                InputEffect::Ignored
            }
        }
        (GameInput::Jump, Screen::Playing) => {
            session.player.velocity = session.world.jump_force;
            InputEffect::Jumped
        }
        (GameInput::Fire, Screen::Playing) => {
            let shot = Projectile::from_player(&session.player, session.world.projectile_size);
            session.projectiles.push(shot);
            InputEffect::Fired
        }
        (GameInput::Jump, Screen::Over | Screen::Leaderboard)
        | (GameInput::Fire, Screen::Start | Screen::Over | Screen::Leaderboard) => {
            InputEffect::Ignored
        }
    }
}

/// Result of one simulation step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Points awarded this step.
    pub points: u32,
    pub obstacles_passed: u32,
    pub hostiles_destroyed: u32,
    /// Set if the run ended this step.
    pub ended: Option<EndCause>,
    /// The run ended with a score above the previous high score.
    pub new_high_score: bool,
}

/// Spawn an obstacle pair at the right edge with a random gap position.
pub fn spawn_obstacle<R: Rng>(session: &mut GameSession, rng: &mut R) {
    let world = &session.world;
    let min_top = world.obstacle_margin;
    let max_top = world.height - world.obstacle_gap - world.obstacle_margin;
    let gap_top = if max_top > min_top {
        rng.gen_range(min_top..max_top).floor()
    } else {
        min_top
    };

    session.obstacles.push(ObstaclePair {
        x: world.width,
        width: world.obstacle_width,
        gap_top,
        gap: world.obstacle_gap,
        floor: world.height,
        passed: false,
    });
}

/// Spawn a hostile at the right edge at a random height.
pub fn spawn_hostile<R: Rng>(session: &mut GameSession, rng: &mut R) {
    let world = &session.world;
    let max_y = world.height - world.hostile_size;
    let y = if max_y > 0.0 {
        rng.gen_range(0.0..max_y)
    } else {
        0.0
    };

    session.hostiles.push(Hostile {
        x: world.width,
        y,
        size: world.hostile_size,
    });
}

/// Advance the session by one frame. Does nothing unless playing.
pub fn process_tick<R: Rng>(session: &mut GameSession, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if session.screen != Screen::Playing {
        return result;
    }

    session.frames += 1;

    // Player physics
    session.player.velocity += session.world.gravity;
    session.player.y += session.player.velocity;

    if session.player.out_of_bounds(session.world.height) {
        finish(session, &mut result, EndCause::OutOfBounds);
        return result;
    }

    // Spawning
    if session.frames % session.world.obstacle_spawn_frames == 0 {
        spawn_obstacle(session, rng);
    }
    if session.frames % session.world.hostile_spawn_frames == 0 {
        spawn_hostile(session, rng);
    }

    let player_box = session.player.bounds();
    let player_x = session.player.x;

    // Obstacles: scroll, score, collide
    let obstacle_speed = session.world.obstacle_speed_at(session.score);
    let mut hit_obstacle = false;
    for pair in &mut session.obstacles {
        pair.x -= obstacle_speed;

        if !pair.passed && pair.x + pair.width < player_x {
            pair.passed = true;
            result.obstacles_passed += 1;
            result.points += session.world.points_per_obstacle;
        }

        if pair.collides_with(&player_box) {
            hit_obstacle = true;
            break;
        }
    }
    session.score += result.points;
    if hit_obstacle {
        finish(session, &mut result, EndCause::Obstacle);
        return result;
    }
    session.obstacles.retain(|p| !p.off_screen());

    // Projectiles
    let speed = session.world.projectile_speed;
    let width = session.world.width;
    for shot in &mut session.projectiles {
        shot.x += speed;
    }
    session.projectiles.retain(|p| !p.off_screen(width));

    // Hostiles: scroll, collide with player, collide with projectiles
    let mut consumed = vec![false; session.projectiles.len()];
    let mut destroyed = vec![false; session.hostiles.len()];
    let mut hit_hostile = false;
    for (i, hostile) in session.hostiles.iter_mut().enumerate() {
        hostile.x -= session.world.hostile_speed;
        let hostile_box = hostile.bounds();

        if hostile_box.overlaps(&player_box) {
            hit_hostile = true;
            break;
        }

        let hit = session
            .projectiles
            .iter()
            .enumerate()
            .find(|(j, shot)| !consumed[*j] && shot.bounds().overlaps(&hostile_box))
            .map(|(j, _)| j);
        if let Some(j) = hit {
            consumed[j] = true;
            destroyed[i] = true;
            result.hostiles_destroyed += 1;
            session.score += session.world.points_per_hostile;
            result.points += session.world.points_per_hostile;
        }
    }

    retain_unmarked(&mut session.hostiles, &destroyed);
    retain_unmarked(&mut session.projectiles, &consumed);

    if hit_hostile {
        finish(session, &mut result, EndCause::Hostile);
        return result;
    }
    session.hostiles.retain(|h| !h.off_screen());

    result
}

fn finish(session: &mut GameSession, result: &mut TickResult, cause: EndCause) {
    result.ended = Some(cause);
    result.new_high_score = session.end_run(cause);
}

/// Drop every element whose flag is set.
fn retain_unmarked<T>(items: &mut Vec<T>, marks: &[bool]) {
    let mut marks = marks.iter();
    items.retain(|_| !marks.next().copied().unwrap_or(false));
}
