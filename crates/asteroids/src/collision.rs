//! Collision detection and combat resolution
//!
//! Two passes run once per tick: bullets against asteroids, then the ship
//! against asteroids. Both use circle overlap tests. The two passes derive
//! the asteroid radius with different divisors (width/3 for bullets,
//! width/4 for the ship); that asymmetry is part of the game's tuning and
//! is kept as-is.

use log::debug;
use rand::Rng;

use crate::components::{Asteroid, AsteroidSize, Bullet, Particle, Player};
use crate::config::GameplayConfig;
use crate::events::SoundEvent;
use crate::foundation::math::Vec2;
use crate::pool::{CursorPool, Pool};
use crate::spawner::{spawn_particle, split_asteroid};

/// Asteroid radius divisor for the bullet pass
const BULLET_PASS_DIVISOR: f32 = 3.0;

/// Asteroid radius divisor for the ship pass
const PLAYER_PASS_DIVISOR: f32 = 4.0;

/// Particle burst sizes per kill kind
const BULLET_BURST_MIN: u32 = 1;
const BULLET_BURST_MAX: u32 = 6;
const PLAYER_BURST_MIN: u32 = 5;
const PLAYER_BURST_MAX: u32 = 19;

/// Circle-circle overlap test (touching counts as overlapping)
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let distance_squared = (center_a - center_b).magnitude_squared();
    let radius_sum = radius_a + radius_b;
    distance_squared <= radius_sum * radius_sum
}

/// Resolve bullet-asteroid hits.
///
/// Each live bullet is tested against every live asteroid and consumes at
/// most one asteroid per tick (the inner scan stops at the first hit). A hit
/// awards score, bursts particles at the asteroid, and either deactivates a
/// small asteroid or replaces it with two split children written into the
/// struck slot and the next slot modulo capacity. That second write may
/// clobber an unrelated live asteroid; the fixed-pool design accepts this.
pub fn resolve_bullet_hits<R: Rng + ?Sized>(
    rng: &mut R,
    bullets: &mut CursorPool<Bullet>,
    asteroids: &mut Pool<Asteroid>,
    particles: &mut CursorPool<Particle>,
    gameplay: &GameplayConfig,
    score: &mut u32,
    sounds: &mut Vec<SoundEvent>,
) {
    for bullet in bullets.slots_mut() {
        if !bullet.active {
            continue;
        }
        for index in 0..asteroids.capacity() {
            let (size, position) = {
                let asteroid = &asteroids.slots()[index];
                if !asteroid.active {
                    continue;
                }
                let radius = asteroid.size.width() / BULLET_PASS_DIVISOR;
                if !circles_overlap(
                    bullet.position,
                    gameplay.bullet_radius,
                    asteroid.position,
                    radius,
                ) {
                    continue;
                }
                (asteroid.size, asteroid.position)
            };

            *score += gameplay.score_per_asteroid;
            bullet.active = false;

            let burst = rng.gen_range(BULLET_BURST_MIN..=BULLET_BURST_MAX);
            for _ in 0..burst {
                particles.push_overwrite(spawn_particle(rng, position));
            }

            if size == AsteroidSize::Small {
                asteroids.slots_mut()[index].active = false;
                sounds.push(SoundEvent::BangSmall);
            } else {
                sounds.push(match size {
                    AsteroidSize::Large => SoundEvent::BangLarge,
                    _ => SoundEvent::BangMedium,
                });
                let parent = asteroids.slots()[index].clone();
                if let Some((first, second)) = split_asteroid(rng, &parent) {
                    asteroids.put(index, first);
                    asteroids.put(index + 1, second);
                }
            }
            debug!("bullet destroyed {size:?} asteroid at ({:.0}, {:.0})", position.x, position.y);

            // One asteroid per bullet per tick.
            break;
        }
    }
}

/// Resolve ship-asteroid hits.
///
/// Every overlapping asteroid is deactivated and bursts particles at the
/// ship. The hit flag is idempotent, so colliding with several asteroids in
/// one tick still costs a single life.
pub fn resolve_player_hits<R: Rng + ?Sized>(
    rng: &mut R,
    player: &mut Player,
    asteroids: &mut Pool<Asteroid>,
    particles: &mut CursorPool<Particle>,
    gameplay: &GameplayConfig,
    sounds: &mut Vec<SoundEvent>,
) {
    for asteroid in asteroids.slots_mut() {
        if !asteroid.active {
            continue;
        }
        let radius = asteroid.size.width() / PLAYER_PASS_DIVISOR;
        if !circles_overlap(player.position, gameplay.player_radius, asteroid.position, radius) {
            continue;
        }

        player.hit = true;
        asteroid.active = false;
        sounds.push(SoundEvent::BangLarge);
        debug!(
            "ship struck by {:?} asteroid at ({:.0}, {:.0})",
            asteroid.size, asteroid.position.x, asteroid.position.y
        );

        let burst = rng.gen_range(PLAYER_BURST_MIN..=PLAYER_BURST_MAX);
        for _ in 0..burst {
            particles.push_overwrite(spawn_particle(rng, player.position));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{MAX_ASTEROIDS, MAX_BULLETS, MAX_PARTICLES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn live_asteroid(size: AsteroidSize, position: Vec2) -> Asteroid {
        Asteroid {
            size,
            position,
            spawn_origin: position,
            velocity: Vec2::new(1.0, 0.0),
            active: true,
            ..Asteroid::default()
        }
    }

    fn live_bullet(position: Vec2) -> Bullet {
        Bullet {
            position,
            direction: Vec2::new(1.0, 0.0),
            speed: 5.0,
            active: true,
        }
    }

    #[test]
    fn test_circles_overlap_boundary() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(circles_overlap(a, 5.0, b, 5.0));
        assert!(!circles_overlap(a, 4.9, b, 5.0));
    }

    #[test]
    fn test_bullet_splits_large_asteroid_into_two_mediums() {
        let mut rng = rng();
        let mut bullets: CursorPool<Bullet> = CursorPool::new(MAX_BULLETS);
        let mut asteroids: Pool<Asteroid> = Pool::new(MAX_ASTEROIDS);
        let mut particles: CursorPool<Particle> = CursorPool::new(MAX_PARTICLES);
        let gameplay = GameplayConfig::default();
        let mut score = 0;
        let mut sounds = Vec::new();

        // Radius 160/3 ~= 53 against bullet radius 5: distance 8 collides.
        bullets.push_overwrite(live_bullet(Vec2::new(100.0, 100.0)));
        asteroids.put(3, live_asteroid(AsteroidSize::Large, Vec2::new(108.0, 100.0)));

        resolve_bullet_hits(
            &mut rng,
            &mut bullets,
            &mut asteroids,
            &mut particles,
            &gameplay,
            &mut score,
            &mut sounds,
        );

        assert_eq!(score, 10);
        assert!(!bullets.slots()[0].active);
        assert_eq!(asteroids.slots()[3].size, AsteroidSize::Medium);
        assert_eq!(asteroids.slots()[4].size, AsteroidSize::Medium);
        assert!(asteroids.slots()[3].active);
        assert!(asteroids.slots()[4].active);
        assert_eq!(asteroids.slots()[3].position, Vec2::new(108.0, 100.0));
        assert_eq!(sounds, vec![SoundEvent::BangLarge]);
        let burst = particles.slots().iter().filter(|p| p.active).count();
        assert!((1..=6).contains(&burst));
    }

    #[test]
    fn test_small_asteroid_is_destroyed_not_split() {
        let mut rng = rng();
        let mut bullets: CursorPool<Bullet> = CursorPool::new(MAX_BULLETS);
        let mut asteroids: Pool<Asteroid> = Pool::new(MAX_ASTEROIDS);
        let mut particles: CursorPool<Particle> = CursorPool::new(MAX_PARTICLES);
        let gameplay = GameplayConfig::default();
        let mut score = 0;
        let mut sounds = Vec::new();

        bullets.push_overwrite(live_bullet(Vec2::new(100.0, 100.0)));
        asteroids.put(0, live_asteroid(AsteroidSize::Small, Vec2::new(110.0, 100.0)));

        resolve_bullet_hits(
            &mut rng,
            &mut bullets,
            &mut asteroids,
            &mut particles,
            &gameplay,
            &mut score,
            &mut sounds,
        );

        assert_eq!(score, 10);
        assert!(!asteroids.slots()[0].active);
        assert!(asteroids.slots().iter().filter(|a| a.active).count() == 0);
        assert_eq!(sounds, vec![SoundEvent::BangSmall]);
    }

    #[test]
    fn test_split_children_wrap_to_first_slot() {
        let mut rng = rng();
        let mut bullets: CursorPool<Bullet> = CursorPool::new(MAX_BULLETS);
        let mut asteroids: Pool<Asteroid> = Pool::new(MAX_ASTEROIDS);
        let mut particles: CursorPool<Particle> = CursorPool::new(MAX_PARTICLES);
        let gameplay = GameplayConfig::default();
        let mut score = 0;
        let mut sounds = Vec::new();

        let last = MAX_ASTEROIDS - 1;
        bullets.push_overwrite(live_bullet(Vec2::new(100.0, 100.0)));
        asteroids.put(last, live_asteroid(AsteroidSize::Large, Vec2::new(108.0, 100.0)));

        resolve_bullet_hits(
            &mut rng,
            &mut bullets,
            &mut asteroids,
            &mut particles,
            &gameplay,
            &mut score,
            &mut sounds,
        );

        // Second child wraps around to slot 0, clobbering whatever was there.
        assert!(asteroids.slots()[last].active);
        assert!(asteroids.slots()[0].active);
        assert_eq!(asteroids.slots()[0].size, AsteroidSize::Medium);
    }

    #[test]
    fn test_bullet_destroys_at_most_one_asteroid_per_tick() {
        let mut rng = rng();
        let mut bullets: CursorPool<Bullet> = CursorPool::new(MAX_BULLETS);
        let mut asteroids: Pool<Asteroid> = Pool::new(MAX_ASTEROIDS);
        let mut particles: CursorPool<Particle> = CursorPool::new(MAX_PARTICLES);
        let gameplay = GameplayConfig::default();
        let mut score = 0;
        let mut sounds = Vec::new();

        bullets.push_overwrite(live_bullet(Vec2::new(100.0, 100.0)));
        // Two overlapping small asteroids; only the first is consumed.
        asteroids.put(0, live_asteroid(AsteroidSize::Small, Vec2::new(105.0, 100.0)));
        asteroids.put(1, live_asteroid(AsteroidSize::Small, Vec2::new(95.0, 100.0)));

        resolve_bullet_hits(
            &mut rng,
            &mut bullets,
            &mut asteroids,
            &mut particles,
            &gameplay,
            &mut score,
            &mut sounds,
        );

        assert_eq!(score, 10);
        assert!(!asteroids.slots()[0].active);
        assert!(asteroids.slots()[1].active);
    }

    #[test]
    fn test_player_hit_by_small_asteroid() {
        let mut rng = rng();
        let mut player = Player::new(Vec2::new(800.0, 500.0));
        let mut asteroids: Pool<Asteroid> = Pool::new(MAX_ASTEROIDS);
        let mut particles: CursorPool<Particle> = CursorPool::new(MAX_PARTICLES);
        let gameplay = GameplayConfig::default();
        let mut sounds = Vec::new();

        // Radius 64/4 = 16 against ship radius 25: distance 10 collides.
        asteroids.put(0, live_asteroid(AsteroidSize::Small, Vec2::new(810.0, 500.0)));

        resolve_player_hits(
            &mut rng,
            &mut player,
            &mut asteroids,
            &mut particles,
            &gameplay,
            &mut sounds,
        );

        assert!(player.hit);
        assert!(!asteroids.slots()[0].active);
        assert_eq!(sounds, vec![SoundEvent::BangLarge]);
        let burst = particles.slots().iter().filter(|p| p.active).count();
        assert!((5..=19).contains(&burst));
        assert!(particles
            .slots()
            .iter()
            .filter(|p| p.active)
            .all(|p| p.position == Vec2::new(800.0, 500.0)));
    }

    #[test]
    fn test_player_pass_deactivates_every_overlapping_asteroid() {
        let mut rng = rng();
        let mut player = Player::new(Vec2::new(800.0, 500.0));
        let mut asteroids: Pool<Asteroid> = Pool::new(MAX_ASTEROIDS);
        let mut particles: CursorPool<Particle> = CursorPool::new(MAX_PARTICLES);
        let gameplay = GameplayConfig::default();
        let mut sounds = Vec::new();

        asteroids.put(0, live_asteroid(AsteroidSize::Small, Vec2::new(810.0, 500.0)));
        asteroids.put(1, live_asteroid(AsteroidSize::Small, Vec2::new(790.0, 500.0)));

        resolve_player_hits(
            &mut rng,
            &mut player,
            &mut asteroids,
            &mut particles,
            &gameplay,
            &mut sounds,
        );

        assert!(player.hit);
        assert!(!asteroids.slots()[0].active);
        assert!(!asteroids.slots()[1].active);
        assert_eq!(sounds.len(), 2);
    }

    #[test]
    fn test_passes_use_different_asteroid_radii() {
        // Large asteroid, 60 units away. Bullet pass reach is 5 + 160/3
        // (~58.3), ship pass reach is 25 + 160/4 (= 65): only the ship
        // pass registers a hit at this distance.
        let asteroid_pos = Vec2::new(60.0, 0.0);
        let probe = Vec2::new(0.0, 0.0);
        assert!(!circles_overlap(probe, 5.0, asteroid_pos, 160.0 / 3.0));
        assert!(circles_overlap(probe, 25.0, asteroid_pos, 160.0 / 4.0));
    }
}
