//! The `Game` aggregate and per-tick orchestration
//!
//! `Game` exclusively owns every piece of simulation state; renderers, HUDs
//! and audio read it through the snapshot accessors and the drained sound
//! queue, never through references into the pools.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{resolve_bullet_hits, resolve_player_hits};
use crate::components::{Asteroid, Bullet, Particle, Player};
use crate::config::GameConfig;
use crate::events::{SoundEvent, HEARTBEAT_PERIOD};
use crate::input::InputState;
use crate::player::update_player;
use crate::pool::{CursorPool, Pool, MAX_ASTEROIDS, MAX_BULLETS, MAX_PARTICLES};
use crate::spawner::recycle_and_advance;

/// The complete simulation state for one round
pub struct Game {
    config: GameConfig,
    rng: StdRng,

    player: Player,
    asteroids: Pool<Asteroid>,
    bullets: CursorPool<Bullet>,
    particles: CursorPool<Particle>,

    score: u32,
    lives: u32,
    frame: u64,
    game_over: bool,
    paused: bool,

    beat_flip: bool,
    sounds: Vec<SoundEvent>,
}

impl Game {
    /// Create a game with an entropy-seeded generator
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game with a caller-supplied generator; with a fixed seed the
    /// whole simulation is deterministic
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let player = Player::new(config.world.center());
        let lives = config.gameplay.starting_lives;
        Self {
            config,
            rng,
            player,
            asteroids: Pool::new(MAX_ASTEROIDS),
            bullets: CursorPool::new(MAX_BULLETS),
            particles: CursorPool::new(MAX_PARTICLES),
            score: 0,
            lives,
            frame: 0,
            game_over: false,
            paused: false,
            beat_flip: false,
            sounds: Vec::new(),
        }
    }

    /// Run one logical tick.
    ///
    /// Fixed order: player controller, asteroid recycle and advance, bullet
    /// advance, bullet collisions, ship collision, particle decay, heartbeat
    /// cadence. Does nothing while paused or after game over, so skipped
    /// ticks mutate no state at all.
    pub fn update(&mut self, input: &InputState) {
        if self.paused || self.game_over {
            return;
        }
        self.frame += 1;

        update_player(
            &mut self.player,
            input,
            &mut self.bullets,
            self.frame,
            &self.config.gameplay,
            &self.config.world,
            &mut self.lives,
            &mut self.sounds,
        );
        if self.lives == 0 {
            self.game_over = true;
            info!("game over at frame {} with score {}", self.frame, self.score);
            return;
        }

        recycle_and_advance(
            &mut self.rng,
            &mut self.asteroids,
            &self.config.world,
            self.config.gameplay.asteroid_recycle_distance,
        );

        for bullet in self.bullets.slots_mut() {
            if bullet.active {
                bullet.advance();
            }
        }

        resolve_bullet_hits(
            &mut self.rng,
            &mut self.bullets,
            &mut self.asteroids,
            &mut self.particles,
            &self.config.gameplay,
            &mut self.score,
            &mut self.sounds,
        );
        resolve_player_hits(
            &mut self.rng,
            &mut self.player,
            &mut self.asteroids,
            &mut self.particles,
            &self.config.gameplay,
            &mut self.sounds,
        );

        for particle in self.particles.slots_mut() {
            if particle.active {
                particle.advance();
            }
        }

        if self.frame % HEARTBEAT_PERIOD == 0 {
            self.sounds.push(if self.beat_flip {
                SoundEvent::Beat2
            } else {
                SoundEvent::Beat1
            });
            self.beat_flip = !self.beat_flip;
        }
    }

    /// Start a fresh round: entities, score, lives and clocks reset; config
    /// and generator carry over
    pub fn reset(&mut self) {
        info!("starting new round");
        self.player = Player::new(self.config.world.center());
        self.asteroids = Pool::new(MAX_ASTEROIDS);
        self.bullets = CursorPool::new(MAX_BULLETS);
        self.particles = CursorPool::new(MAX_PARTICLES);
        self.score = 0;
        self.lives = self.config.gameplay.starting_lives;
        self.frame = 0;
        self.game_over = false;
        self.paused = false;
        self.beat_flip = false;
        self.sounds.clear();
    }

    /// Toggle the pause flag; a paused game ignores `update`
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// The configuration this game runs with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ship state
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Every asteroid slot; check `active` before drawing
    pub fn asteroids(&self) -> &[Asteroid] {
        self.asteroids.slots()
    }

    /// Every bullet slot
    pub fn bullets(&self) -> &[Bullet] {
        self.bullets.slots()
    }

    /// Every particle slot
    pub fn particles(&self) -> &[Particle] {
        self.particles.slots()
    }

    /// Live asteroids only
    pub fn active_asteroids(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.slots().iter().filter(|a| a.active)
    }

    /// Live bullets only
    pub fn active_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.slots().iter().filter(|b| b.active)
    }

    /// Live particles only
    pub fn active_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.slots().iter().filter(|p| p.active)
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Remaining lives
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Logical frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether the round has ended
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Take all sound events queued since the last drain. The audio
    /// collaborator maps each identifier to playback.
    pub fn drain_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }
}
