//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt,
//! then turns the entity to face its direction of travel.

use starfall_core::types::heading_of;

use crate::ecs::World;

/// Run kinematic integration for all entities with Position + Velocity + Rotation.
pub fn run(world: &mut World, dt: f32) {
    for idx in world.alive_entities() {
        let vel = match world.velocities[idx] {
            Some(v) => v,
            None => continue,
        };
        let (Some(pos), Some(rot)) = (&mut world.positions[idx], &mut world.rotations[idx]) else {
            continue;
        };

        pos.0 += vel.0 * dt;

        // A stationary entity keeps its last heading
        if let Some(heading) = heading_of(vel.0) {
            rot.0 = heading;
        }
    }
}
