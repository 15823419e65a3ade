//! Foundation utilities shared by the simulation modules

pub mod logging;
pub mod math;
pub mod time;
