//! Steering AI for STARFALL.
//!
//! Angle helpers and the homing behaviour used by autonomous enemies.

pub mod angles;
pub mod steer;

pub use starfall_core as core;

#[cfg(test)]
mod tests;
