//! Player controller
//!
//! Turns logical input into ship state once per tick: thrust and drag on the
//! scalar speed, facing rotation, the facing-into-movement blend that gives
//! the ship its drift, firing, position integration and screen wrap, and the
//! respawn that consumes a hit flag set by the collision pass.

use log::info;

use crate::components::{Bullet, Player, SHIP_SPRITE_HEIGHT, SHIP_SPRITE_WIDTH};
use crate::config::{GameplayConfig, WorldConfig, WrapBounds};
use crate::events::{SoundEvent, THRUST_SOUND_PERIOD};
use crate::foundation::math::{utils, Vec2};
use crate::input::InputState;
use crate::pool::CursorPool;

/// Advance the ship one tick.
///
/// While alive this applies thrust/drag, turning, firing and movement. When
/// the hit flag is set the tick is spent respawning instead: one life is
/// deducted, the ship returns to screen center and the flag clears. Speed
/// and direction survive the respawn untouched; the ship re-enters moving
/// exactly as it died.
pub fn update_player(
    player: &mut Player,
    input: &InputState,
    bullets: &mut CursorPool<Bullet>,
    frame: u64,
    gameplay: &GameplayConfig,
    world: &WorldConfig,
    lives: &mut u32,
    sounds: &mut Vec<SoundEvent>,
) {
    if player.hit {
        player.position = world.center();
        *lives = lives.saturating_sub(1);
        player.hit = false;
        info!("ship destroyed; {lives} lives remain");
        return;
    }

    player.thrusting = input.thrust;
    if input.thrust {
        player.speed = (player.speed + gameplay.thrust_accel).min(gameplay.max_speed);
        // Blend the facing into the travel direction; repeated ticks pull
        // the drift around toward where the ship points.
        player.movement_dir = (player.facing + player.movement_dir).normalize();
        if frame % THRUST_SOUND_PERIOD == 0 {
            sounds.push(SoundEvent::Thrust);
        }
    } else {
        player.speed = (player.speed - gameplay.drag).max(0.0);
    }

    if input.turn_left {
        player.facing = utils::rotate(player.facing, -gameplay.turn_rate).normalize();
    }
    if input.turn_right {
        player.facing = utils::rotate(player.facing, gameplay.turn_rate).normalize();
    }

    if input.fire {
        bullets.push_overwrite(new_bullet(player, gameplay));
        sounds.push(SoundEvent::Fire);
    }

    player.position += player.movement_dir * player.speed;
    wrap_position(&mut player.position, &world.wrap);
}

/// Build a bullet leaving the ship's nose: offset half the ship sprite from
/// center along the facing angle, inheriting the ship's speed plus a boost
fn new_bullet(player: &Player, gameplay: &GameplayConfig) -> Bullet {
    let angle = player.facing.y.atan2(player.facing.x);
    let position = Vec2::new(
        player.position.x + angle.cos() * (SHIP_SPRITE_WIDTH / 2.0),
        player.position.y + angle.sin() * (SHIP_SPRITE_HEIGHT / 2.0) + 3.0,
    );
    Bullet {
        position,
        direction: player.facing,
        speed: player.speed + gameplay.bullet_speed_boost,
        active: true,
    }
}

/// Teleport a position that has left the wrap bounds back to the opposite
/// side. Only the ship wraps; other entities recycle or decay instead.
pub fn wrap_position(position: &mut Vec2, wrap: &WrapBounds) {
    if position.x < wrap.min_x {
        position.x = wrap.right_entry_x;
    } else if position.x > wrap.max_x {
        position.x = wrap.left_entry_x;
    }
    if position.y < wrap.min_y {
        position.y = wrap.bottom_entry_y;
    } else if position.y > wrap.max_y {
        position.y = wrap.top_entry_y;
    }
}
