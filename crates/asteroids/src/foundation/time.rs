//! Time management utilities
//!
//! The simulation runs on a fixed logical clock decoupled from the
//! presentation layer's refresh rate, so it can be stepped headlessly.

/// Upper bound on logical steps returned by a single [`FixedTimestep::advance`]
/// call, so a long stall cannot snowball into an unbounded catch-up burst.
const MAX_STEPS_PER_ADVANCE: u32 = 8;

/// Fixed-timestep accumulator.
///
/// Feed it wall-clock elapsed time; it answers how many whole logical steps
/// the simulation should run to catch up.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step_seconds: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// Create an accumulator running at the given logical rate
    pub fn new(steps_per_second: u32) -> Self {
        Self {
            step_seconds: 1.0 / steps_per_second as f32,
            accumulator: 0.0,
        }
    }

    /// Length of one logical step in seconds
    pub fn step_seconds(&self) -> f32 {
        self.step_seconds
    }

    /// Accumulate elapsed wall-clock time and return the number of whole
    /// logical steps to run now. Capped at a small burst size; excess time
    /// beyond the cap is dropped rather than replayed.
    pub fn advance(&mut self, elapsed_seconds: f32) -> u32 {
        self.accumulator += elapsed_seconds;
        let mut steps = 0;
        while self.accumulator >= self.step_seconds && steps < MAX_STEPS_PER_ADVANCE {
            self.accumulator -= self.step_seconds;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_ADVANCE {
            self.accumulator = 0.0;
        }
        steps
    }
}
