//! Headless demo runner
//!
//! Steps the simulation at 60 Hz for a few seconds of scripted play and
//! logs what happened. Useful as a smoke test of the snapshot and event
//! interfaces without any window, renderer or audio device.

use asteroids::config::Config;
use asteroids::prelude::*;

/// Seconds of simulated play
const DEMO_SECONDS: u32 = 20;

fn scripted_input(tracker: &mut InputTracker, frame: u64) -> InputState {
    // Thrust in bursts, sweep the heading, fire a short salvo each second.
    let thrust = frame % 120 < 60;
    let turn_right = frame % 300 < 150;
    let fire_held = frame % 60 < 3;
    tracker.tick(thrust, false, turn_right, fire_held)
}

fn main() {
    asteroids::foundation::logging::init();

    let config = GameConfig::load_or_default("asteroids.ron");
    let mut game = Game::new(config);
    let mut clock = FixedTimestep::new(60);
    let mut tracker = InputTracker::new();

    log::info!("running {DEMO_SECONDS}s of scripted play");

    let mut sounds_heard = 0usize;
    for _ in 0..DEMO_SECONDS * 60 {
        // Headless: feed the clock exactly one frame of wall time.
        for _ in 0..clock.advance(clock.step_seconds()) {
            let input = scripted_input(&mut tracker, game.frame());
            game.update(&input);
        }
        sounds_heard += game.drain_sounds().len();

        if game.frame() % 300 == 0 {
            log::info!(
                "frame {:5}: score {:4}, lives {}, {} asteroids / {} bullets / {} particles live",
                game.frame(),
                game.score(),
                game.lives(),
                game.active_asteroids().count(),
                game.active_bullets().count(),
                game.active_particles().count(),
            );
        }
        if game.is_game_over() {
            break;
        }
    }

    log::info!(
        "done: frame {}, final score {}, lives {}, {} sound events emitted, game over: {}",
        game.frame(),
        game.score(),
        game.lives(),
        sounds_heard,
        game.is_game_over(),
    );
}
