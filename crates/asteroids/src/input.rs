//! Logical input signals
//!
//! The simulation never sees physical keys; a front end maps its device
//! input to these logical actions once per tick. `fire` is edge-triggered:
//! it must be true only on the tick the fire action was pressed, not while
//! it is held. [`InputTracker`] derives that edge from a raw held signal.

/// Logical input for one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Thrust action is held
    pub thrust: bool,

    /// Rotate-left action is held
    pub turn_left: bool,

    /// Rotate-right action is held
    pub turn_right: bool,

    /// Fire action was pressed this tick (edge, not level)
    pub fire: bool,
}

impl InputState {
    /// No input at all
    pub fn none() -> Self {
        Self::default()
    }
}

/// Converts raw held signals into a per-tick [`InputState`], deriving the
/// fire edge from the previous tick's state
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
    fire_was_held: bool,
}

impl InputTracker {
    /// Create a tracker with no prior input
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this tick's input from raw held signals. `fire_held` is the
    /// level state of the fire action; the returned `fire` is true only on
    /// the press edge.
    pub fn tick(&mut self, thrust: bool, turn_left: bool, turn_right: bool, fire_held: bool) -> InputState {
        let fire = fire_held && !self.fire_was_held;
        self.fire_was_held = fire_held;
        InputState {
            thrust,
            turn_left,
            turn_right,
            fire,
        }
    }
}
