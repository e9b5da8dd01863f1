//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus the frame delta and whatever per-tick parameters they need.
//! They do not own state. All state lives in components.

pub mod ai;
pub mod animation;
pub mod collision;
pub mod input;
pub mod invulnerability;
pub mod lifecycle;
pub mod movement;
pub mod snapshot;
