//! Procedural generation of asteroids and particles
//!
//! Everything here is a pure function of an [`Rng`] plus the world geometry,
//! so the whole spawn path is deterministic under a seeded generator.

use rand::Rng;

use crate::components::{Asteroid, AsteroidSize, Particle, SPRITE_VARIANTS};
use crate::config::WorldConfig;
use crate::foundation::math::{utils, Vec2};
use crate::pool::Pool;

/// Asteroid drift speed range per tick
const ASTEROID_SPEED_MIN: f32 = 0.5;
const ASTEROID_SPEED_MAX: f32 = 2.5;

/// Particle burst speed range per tick
const PARTICLE_SPEED_MIN: f32 = 0.5;
const PARTICLE_SPEED_MAX: f32 = 5.5;

/// Generate a fresh asteroid just outside the visible screen, drifting
/// through it.
///
/// X is drawn over the widened band `[-margin, screen_width + margin)`. When
/// that X lands over the screen, Y is forced off-screen (above or below,
/// 50/50); otherwise Y ranges over the same widened band as X. The velocity
/// aims at a uniformly random on-screen point.
pub fn spawn_asteroid<R: Rng + ?Sized>(rng: &mut R, world: &WorldConfig) -> Asteroid {
    let size = match rng.gen_range(0..3) {
        0 => AsteroidSize::Large,
        1 => AsteroidSize::Medium,
        _ => AsteroidSize::Small,
    };
    let sprite = rng.gen_range(0..SPRITE_VARIANTS);

    let margin = world.spawn_margin;
    let x = rng.gen_range(-margin..world.screen_width + margin);
    let y = if x >= world.onscreen_band_min_x && x <= world.onscreen_band_max_x {
        if rng.gen_bool(0.5) {
            -rng.gen_range(0.0..margin)
        } else {
            world.screen_height + rng.gen_range(0.0..margin)
        }
    } else {
        rng.gen_range(-margin..world.screen_width + margin)
    };
    let position = Vec2::new(x, y);

    // Aim through the visible screen so off-screen spawns still matter.
    let target = Vec2::new(
        rng.gen_range(0.0..world.screen_width),
        rng.gen_range(0.0..world.screen_height),
    );
    let speed = rng.gen_range(ASTEROID_SPEED_MIN..ASTEROID_SPEED_MAX);
    let velocity = (target - position).normalize() * speed;

    Asteroid {
        size,
        sprite,
        position,
        spawn_origin: position,
        velocity,
        rotation: rng.gen_range(0..=360) as f32,
        rotation_speed: rng.gen_range(0..5) as f32,
        active: true,
    }
}

/// Split an asteroid into two children of the next smaller size.
///
/// Both children start at the parent's position, which also becomes their
/// spawn-origin. The first child's velocity is the parent's velocity plus a
/// small random jitter, renormalized to a fresh drift speed; the second
/// child moves exactly opposite. Returns `None` for small asteroids, which
/// are destroyed outright instead of splitting.
pub fn split_asteroid<R: Rng + ?Sized>(
    rng: &mut R,
    parent: &Asteroid,
) -> Option<(Asteroid, Asteroid)> {
    let child_size = parent.size.split_into()?;

    let jitter = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());
    let speed = rng.gen_range(ASTEROID_SPEED_MIN..ASTEROID_SPEED_MAX);
    let velocity = (parent.velocity + jitter).normalize() * speed;

    let first = Asteroid {
        size: child_size,
        sprite: rng.gen_range(0..SPRITE_VARIANTS),
        position: parent.position,
        spawn_origin: parent.position,
        velocity,
        rotation: rng.gen_range(0..=360) as f32,
        rotation_speed: rng.gen_range(0..5) as f32,
        active: true,
    };
    let second = Asteroid {
        sprite: rng.gen_range(0..SPRITE_VARIANTS),
        velocity: -velocity,
        rotation: rng.gen_range(0..=360) as f32,
        rotation_speed: rng.gen_range(0..5) as f32,
        ..first.clone()
    };
    Some((first, second))
}

/// Generate one debris particle at `origin`, moving in a random direction
pub fn spawn_particle<R: Rng + ?Sized>(rng: &mut R, origin: Vec2) -> Particle {
    let direction = utils::rotate(Vec2::new(0.0, 1.0), rng.gen::<f32>() * 361.0).normalize();
    Particle {
        position: origin,
        direction,
        speed: rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX),
        active: true,
    }
}

/// Advance every live asteroid and recycle the rest.
///
/// A slot is recycled (replaced in place by a fresh spawn) when it is
/// inactive or has drifted `recycle_distance` or more from its spawn-origin.
/// This same rule populates the field on the first tick, since every slot
/// starts inactive.
pub fn recycle_and_advance<R: Rng + ?Sized>(
    rng: &mut R,
    asteroids: &mut Pool<Asteroid>,
    world: &WorldConfig,
    recycle_distance: f32,
) {
    for slot in asteroids.slots_mut() {
        if slot.active && slot.displacement() < recycle_distance {
            slot.advance();
        } else {
            *slot = spawn_asteroid(rng, world);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_spawned_asteroids_start_off_screen() {
        let mut rng = rng();
        let world = WorldConfig::default();
        for _ in 0..500 {
            let a = spawn_asteroid(&mut rng, &world);
            assert!(a.active);
            assert!(a.position.x >= -world.spawn_margin);
            assert!(a.position.x < world.screen_width + world.spawn_margin);
            if a.position.x >= world.onscreen_band_min_x
                && a.position.x <= world.onscreen_band_max_x
            {
                // Over the screen horizontally, so Y must be off-screen.
                assert!(a.position.y <= 0.0 || a.position.y >= world.screen_height);
            }
            assert_eq!(a.position, a.spawn_origin);
        }
    }

    #[test]
    fn test_spawned_asteroid_speed_in_range() {
        let mut rng = rng();
        let world = WorldConfig::default();
        for _ in 0..500 {
            let a = spawn_asteroid(&mut rng, &world);
            let speed = a.velocity.magnitude();
            assert!((ASTEROID_SPEED_MIN..ASTEROID_SPEED_MAX).contains(&speed));
            assert!((0.0..=360.0).contains(&a.rotation));
            assert!((0.0..=4.0).contains(&a.rotation_speed));
            assert!(a.sprite < SPRITE_VARIANTS);
        }
    }

    #[test]
    fn test_split_children_move_in_exact_opposition() {
        let mut rng = rng();
        let parent = Asteroid {
            size: AsteroidSize::Large,
            position: Vec2::new(108.0, 100.0),
            velocity: Vec2::new(1.5, -0.5),
            active: true,
            ..Asteroid::default()
        };
        let (first, second) = split_asteroid(&mut rng, &parent).unwrap();

        assert_eq!(first.size, AsteroidSize::Medium);
        assert_eq!(second.size, AsteroidSize::Medium);
        assert_eq!(first.velocity, -second.velocity);
        let speed = first.velocity.magnitude();
        assert!((ASTEROID_SPEED_MIN..ASTEROID_SPEED_MAX).contains(&speed));
        assert_eq!(first.position, parent.position);
        assert_eq!(second.spawn_origin, parent.position);
    }

    #[test]
    fn test_medium_splits_into_small_and_small_does_not_split() {
        let mut rng = rng();
        let medium = Asteroid {
            size: AsteroidSize::Medium,
            velocity: Vec2::new(1.0, 0.0),
            active: true,
            ..Asteroid::default()
        };
        let (first, _) = split_asteroid(&mut rng, &medium).unwrap();
        assert_eq!(first.size, AsteroidSize::Small);

        let small = Asteroid {
            size: AsteroidSize::Small,
            active: true,
            ..Asteroid::default()
        };
        assert!(split_asteroid(&mut rng, &small).is_none());
    }

    #[test]
    fn test_particles_spawn_at_origin_with_unit_direction() {
        let mut rng = rng();
        let origin = Vec2::new(800.0, 500.0);
        for _ in 0..100 {
            let p = spawn_particle(&mut rng, origin);
            assert!(p.active);
            assert_eq!(p.position, origin);
            assert_relative_eq!(p.direction.magnitude(), 1.0, epsilon = 1e-5);
            assert!((PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX).contains(&p.speed));
        }
    }

    #[test]
    fn test_recycle_replaces_drifted_and_inactive_slots() {
        let mut rng = rng();
        let world = WorldConfig::default();
        let mut pool: Pool<Asteroid> = Pool::new(3);

        // Slot 0: live and in range, should just advance.
        pool.put(
            0,
            Asteroid {
                position: Vec2::new(100.0, 100.0),
                spawn_origin: Vec2::new(90.0, 100.0),
                velocity: Vec2::new(1.0, 0.0),
                active: true,
                ..Asteroid::default()
            },
        );
        // Slot 1: drifted past the recycle distance.
        pool.put(
            1,
            Asteroid {
                position: Vec2::new(6000.0, 0.0),
                spawn_origin: Vec2::zeros(),
                active: true,
                ..Asteroid::default()
            },
        );
        // Slot 2: inactive, gets repopulated.

        recycle_and_advance(&mut rng, &mut pool, &world, 5000.0);

        assert_eq!(pool.slots()[0].position, Vec2::new(101.0, 100.0));
        assert!(pool.slots()[1].active);
        assert!(pool.slots()[1].displacement() < 1.0);
        assert!(pool.slots()[2].active);
    }
}
