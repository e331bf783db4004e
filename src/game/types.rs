//! Entity records for a run.
//!
//! Entities are plain values; the session owns them in dense `Vec`s.

use crate::core::config::WorldConfig;

/// Axis-aligned bounding box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap on both axes; touching edges do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }

    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// The player-controlled flyer.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity, positive = downward.
    pub velocity: f64,
}

impl Player {
    /// Fresh player at a quarter of the way across, vertically centred.
    pub fn spawn(world: &WorldConfig) -> Self {
        Self {
            x: world.width / 4.0,
            y: world.height / 2.0,
            width: world.player_width,
            height: world.player_height,
            velocity: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// True if the player touches or passes the ceiling or the floor.
    pub fn out_of_bounds(&self, world_height: f64) -> bool {
        self.y <= 0.0 || self.y + self.height >= world_height
    }
}

/// A top and bottom barrier sharing one x position and a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub x: f64,
    pub width: f64,
    /// Height of the top barrier; the gap starts here.
    pub gap_top: f64,
    pub gap: f64,
    /// Bottom edge of the world, for sizing the bottom barrier.
    pub floor: f64,
    /// Set once the pair has scrolled fully behind the player.
    pub passed: bool,
}

impl ObstaclePair {
    pub fn top(&self) -> Aabb {
        Aabb::new(self.x, 0.0, self.width, self.gap_top)
    }

    pub fn bottom(&self) -> Aabb {
        let y = self.gap_top + self.gap;
        Aabb::new(self.x, y, self.width, (self.floor - y).max(0.0))
    }

    pub fn collides_with(&self, other: &Aabb) -> bool {
        self.top().overlaps(other) || self.bottom().overlaps(other)
    }

    pub fn off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

/// A player-fired shot. Its box is a square of side `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Projectile {
    /// Spawn at the player's leading edge, vertically centred on the player.
    pub fn from_player(player: &Player, size: f64) -> Self {
        Self {
            x: player.x + player.width,
            y: player.y + player.height / 2.0 - size / 2.0,
            size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    pub fn off_screen(&self, world_width: f64) -> bool {
        self.x >= world_width
    }
}

/// A square adversary moving right to left.
#[derive(Debug, Clone, PartialEq)]
pub struct Hostile {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Hostile {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }

    pub fn off_screen(&self) -> bool {
        self.x + self.size <= 0.0
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    OutOfBounds,
    Obstacle,
    Hostile,
}

impl EndCause {
    pub fn describe(self) -> &'static str {
        match self {
            EndCause::OutOfBounds => "flew out of bounds",
            EndCause::Obstacle => "hit an obstacle",
            EndCause::Hostile => "collided with a hostile",
        }
    }
}
