//! Game entity types
//!
//! Plain data for the four entity kinds. All entity state lives in the
//! [`crate::game::Game`] aggregate; nothing here holds references or handles.

use crate::foundation::math::Vec2;

/// Ship sprite width in logical pixels (used for the bullet muzzle offset)
pub const SHIP_SPRITE_WIDTH: f32 = 96.0;

/// Ship sprite height in logical pixels
pub const SHIP_SPRITE_HEIGHT: f32 = 64.0;

/// Per-tick speed decay applied to particles
pub const PARTICLE_DECAY: f32 = 0.1;

/// Number of sprite variants available per asteroid size
pub const SPRITE_VARIANTS: u8 = 3;

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Ship center position
    pub position: Vec2,

    /// Facing direction (unit length)
    pub facing: Vec2,

    /// Accumulated movement direction (unit length). Distinct from `facing`
    /// so the ship drifts along its old heading while turning.
    pub movement_dir: Vec2,

    /// Scalar speed, clamped to `[0, max_speed]`
    pub speed: f32,

    /// Set by the collision pass; consumed by the respawn logic next tick
    pub hit: bool,

    /// Whether thrust was applied this tick (selects the exhaust sprite)
    pub thrusting: bool,
}

impl Player {
    /// Create a ship at rest at the given position, facing right
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            facing: Vec2::new(1.0, 0.0),
            movement_dir: Vec2::new(1.0, 0.0),
            speed: 0.0,
            hit: false,
            thrusting: false,
        }
    }
}

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    /// Large asteroid (splits into medium)
    Large,

    /// Medium asteroid (splits into small)
    Medium,

    /// Small asteroid (destroyed completely)
    Small,
}

impl AsteroidSize {
    /// Sprite width (and height) for this size in logical pixels
    pub fn width(self) -> f32 {
        match self {
            AsteroidSize::Large => 160.0,
            AsteroidSize::Medium => 96.0,
            AsteroidSize::Small => 64.0,
        }
    }

    /// Get the next smaller size when split
    pub fn split_into(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    /// Size category
    pub size: AsteroidSize,

    /// Sprite variant index, `0..SPRITE_VARIANTS`
    pub sprite: u8,

    /// Current position
    pub position: Vec2,

    /// Position at spawn time; displacement from here drives recycling
    pub spawn_origin: Vec2,

    /// Velocity per tick
    pub velocity: Vec2,

    /// Rendering rotation in degrees, unbounded
    pub rotation: f32,

    /// Rotation change per tick in degrees
    pub rotation_speed: f32,

    /// Whether this slot holds a live asteroid
    pub active: bool,
}

impl Asteroid {
    /// Advance one tick: integrate position and rotation
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.rotation += self.rotation_speed;
    }

    /// Displacement from the spawn-origin
    pub fn displacement(&self) -> f32 {
        (self.position - self.spawn_origin).magnitude()
    }
}

impl Default for Asteroid {
    fn default() -> Self {
        Self {
            size: AsteroidSize::Large,
            sprite: 0,
            position: Vec2::zeros(),
            spawn_origin: Vec2::zeros(),
            velocity: Vec2::zeros(),
            rotation: 0.0,
            rotation_speed: 0.0,
            active: false,
        }
    }
}

/// A fired projectile
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Current position
    pub position: Vec2,

    /// Travel direction, fixed at fire time (unit length)
    pub direction: Vec2,

    /// Scalar speed per tick
    pub speed: f32,

    /// Whether this slot holds a live bullet
    pub active: bool,
}

impl Bullet {
    /// Advance one tick along the fixed direction
    pub fn advance(&mut self) {
        self.position += self.direction * self.speed;
    }
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            direction: Vec2::new(1.0, 0.0),
            speed: 0.0,
            active: false,
        }
    }
}

/// A short-lived debris particle
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position
    pub position: Vec2,

    /// Travel direction (unit length)
    pub direction: Vec2,

    /// Scalar speed per tick; decays by [`PARTICLE_DECAY`] each tick
    pub speed: f32,

    /// Whether this slot holds a live particle
    pub active: bool,
}

impl Particle {
    /// Advance one tick, then decay; the particle deactivates on the first
    /// tick its speed would go negative
    pub fn advance(&mut self) {
        self.position += self.direction * self.speed;
        self.speed -= PARTICLE_DECAY;
        if self.speed < 0.0 {
            self.active = false;
        }
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            direction: Vec2::new(0.0, 1.0),
            speed: 0.0,
            active: false,
        }
    }
}
