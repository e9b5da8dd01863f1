//! Player movement input.
//!
//! Held directions accelerate the ship along their axis up to the speed
//! clamp; an axis with no input eases back toward zero.

use glam::Vec2;

use starfall_core::commands::MoveIntent;
use starfall_core::config::InputConfig;

use crate::ecs::{EntityId, World};

/// Apply a frame of held keys to the player's velocity.
/// Returns false when the player is gone or has no Velocity.
pub fn run(world: &mut World, player: EntityId, intent: MoveIntent, config: &InputConfig) -> bool {
    match world.velocity_mut(player) {
        Some(vel) => {
            vel.0 = steer_velocity(vel.0, intent, config);
            true
        }
        None => false,
    }
}

/// New velocity after one frame of input.
pub fn steer_velocity(vel: Vec2, intent: MoveIntent, config: &InputConfig) -> Vec2 {
    Vec2::new(
        axis(vel.x, intent.right, intent.left, config),
        axis(vel.y, intent.down, intent.up, config),
    )
}

fn axis(mut v: f32, positive: bool, negative: bool, config: &InputConfig) -> f32 {
    let limit = config.max_speed;
    if positive {
        v = (v + config.acceleration).clamp(-limit, limit);
    }
    if negative {
        v = (v - config.acceleration).clamp(-limit, limit);
    }
    if !positive && !negative {
        v += (0.0 - v) * config.decay;
    }
    v
}
