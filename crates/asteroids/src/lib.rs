//! # Asteroids
//!
//! A fixed-timestep Asteroids simulation core. The crate owns everything
//! that happens between input and pixels: pooled entity lifecycles,
//! kinematics, procedural spawning, collision and combat resolution, and
//! score/lives bookkeeping. Rendering, audio playback and device input are
//! collaborators on the far side of three narrow interfaces:
//!
//! - [`input::InputState`] — logical per-tick input signals in,
//! - the snapshot accessors on [`game::Game`] — entity state out,
//! - [`events::SoundEvent`] — discrete audio triggers out.
//!
//! ## Quick start
//!
//! ```rust
//! use asteroids::prelude::*;
//!
//! let mut game = Game::new(GameConfig::default());
//! let mut clock = FixedTimestep::new(60);
//! let mut tracker = InputTracker::new();
//!
//! // Per presentation frame:
//! let input = tracker.tick(true, false, false, false);
//! for _ in 0..clock.advance(1.0 / 60.0) {
//!     game.update(&input);
//! }
//! for asteroid in game.active_asteroids() {
//!     // hand position/rotation/sprite to the renderer
//!     let _ = (asteroid.position, asteroid.rotation, asteroid.sprite);
//! }
//! for sound in game.drain_sounds() {
//!     let _ = sound; // hand to the audio backend
//! }
//! ```
//!
//! All entity pools are sized once at startup; a running game never
//! allocates entity memory. With a seeded generator
//! ([`game::Game::with_rng`]) every tick is reproducible.

pub mod collision;
pub mod components;
pub mod config;
pub mod events;
pub mod foundation;
pub mod game;
pub mod input;
pub mod player;
pub mod pool;
pub mod spawner;

/// Common imports for crate users
pub mod prelude {
    pub use crate::components::{Asteroid, AsteroidSize, Bullet, Particle, Player};
    pub use crate::config::{Config, ConfigError, GameConfig, GameplayConfig, WorldConfig};
    pub use crate::events::SoundEvent;
    pub use crate::foundation::math::Vec2;
    pub use crate::foundation::time::FixedTimestep;
    pub use crate::game::Game;
    pub use crate::input::{InputState, InputTracker};
}
