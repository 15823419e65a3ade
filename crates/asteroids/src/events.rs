//! Sound event identifiers
//!
//! The core never touches an audio device. It queues discrete event
//! identifiers during a tick; the audio collaborator drains the queue and
//! maps each identifier to playback.

/// Number of frames between thrust sound repeats while thrust is held
pub const THRUST_SOUND_PERIOD: u64 = 15;

/// Number of frames between heartbeat beats
pub const HEARTBEAT_PERIOD: u64 = 60;

/// A discrete sound trigger emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// A bullet was fired
    Fire,

    /// A large asteroid split (also played when the ship is hit)
    BangLarge,

    /// A medium asteroid split
    BangMedium,

    /// A small asteroid was destroyed
    BangSmall,

    /// Engine rumble, repeated on a fixed frame cadence while thrusting
    Thrust,

    /// First tone of the alternating heartbeat
    Beat1,

    /// Second tone of the alternating heartbeat
    Beat2,
}
