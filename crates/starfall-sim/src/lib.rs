//! Simulation engine for Starfall.
//!
//! Owns the columnar ECS world, runs the per-frame systems in a fixed
//! order and produces FrameSnapshots for whatever draws the game.

pub mod ecs;
pub mod engine;
pub mod hit;
pub mod systems;
pub mod world_setup;

pub use engine::{SimulationEngine, TickStats};
pub use starfall_core as core;
