//! Starfall headless driver.
//!
//! Runs the simulation on its own game loop thread and feeds it a scripted,
//! seeded play session instead of live keyboard input.

pub mod game_loop;
pub mod session;

pub use starfall_core as core;
