//! Steering behaviours.
//!
//! Pure functions that compute a new facing and velocity for one autonomous
//! entity from its current state and the tick's target point.
//! No ECS dependency; operates on plain data.

use glam::Vec2;

use starfall_core::enums::AiKind;
use starfall_core::types::facing;

use crate::angles::{bearing_to, turn_toward};

/// Input to the steering evaluation for a single entity.
pub struct SteerContext {
    pub kind: AiKind,
    pub position: Vec2,
    pub rotation: f32,
    /// Point to home in on, usually the player's position.
    pub target: Vec2,
    pub max_velocity: f32,
    pub max_turning_speed: f32,
    pub dt: f32,
}

/// Output of the steering evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteerUpdate {
    pub rotation: f32,
    pub velocity: Vec2,
}

/// Evaluate steering for one entity. `None` leaves the entity untouched.
pub fn evaluate(ctx: &SteerContext) -> Option<SteerUpdate> {
    match ctx.kind {
        AiKind::None => None,
        AiKind::Homing => Some(homing(ctx)),
    }
}

fn homing(ctx: &SteerContext) -> SteerUpdate {
    // Sitting on the target: keep the current heading.
    let rotation = match bearing_to(ctx.position, ctx.target) {
        Some(bearing) => turn_toward(ctx.rotation, bearing, ctx.max_turning_speed * ctx.dt),
        None => ctx.rotation,
    };

    SteerUpdate {
        rotation,
        velocity: facing(rotation) * ctx.max_velocity,
    }
}
