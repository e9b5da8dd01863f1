//! AI steering system: turns autonomous entities toward the tick's target.
//!
//! Calls the steering behaviours from starfall-steering, then writes the
//! resulting facing and velocity back into the world.

use glam::Vec2;

use starfall_steering::steer::{evaluate, SteerContext};

use crate::ecs::World;

/// Steer every entity with Flags + Position + Rotation + Velocity + AiInfo.
/// `target` is usually the player's position; with no target nothing steers.
/// Returns the number of entities steered.
pub fn run(world: &mut World, dt: f32, target: Option<Vec2>) -> usize {
    let Some(target) = target else {
        return 0;
    };

    let mut steered = 0;
    for idx in world.alive_entities() {
        if world.flags[idx].is_none() {
            continue;
        }
        let (Some(ai), Some(pos), Some(rot)) =
            (world.ai[idx], world.positions[idx], world.rotations[idx])
        else {
            continue;
        };
        if world.velocities[idx].is_none() {
            continue;
        }

        let ctx = SteerContext {
            kind: ai.kind,
            position: pos.0,
            rotation: rot.0,
            target,
            max_velocity: ai.max_velocity,
            max_turning_speed: ai.max_turning_speed,
            dt,
        };

        if let Some(update) = evaluate(&ctx) {
            if let Some(rot) = &mut world.rotations[idx] {
                rot.0 = update.rotation;
            }
            if let Some(vel) = &mut world.velocities[idx] {
                vel.0 = update.velocity;
            }
            steered += 1;
        }
    }
    steered
}
