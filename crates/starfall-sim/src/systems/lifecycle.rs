//! Lifecycle system: death processing and particle expiry.
//!
//! Neither pass touches the entity set directly. Deaths and expiries are
//! recorded in the command buffer, which the caller applies afterwards.

use log::debug;

use starfall_core::components::{Animation, Flags};

use crate::ecs::{CommandBuffer, World};
use crate::world_setup::explosion_bundle;

/// Explosion left behind by EXPLODE_ON_DEATH entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionTemplate {
    pub animation: Animation,
    /// Scale for a dying entity that has none.
    pub fallback_scale: f32,
}

/// Counts from one death pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeathResult {
    /// Entities queued for removal because their health ran out.
    pub deaths: u32,
    /// Explosion particles queued to replace them.
    pub explosions: u32,
}

/// Queue removal of every non-particle entity with Health + Flags whose
/// health is at or below zero. EXPLODE_ON_DEATH entities leave a particle
/// at their last position.
pub fn run_deaths(
    world: &World,
    explosion: &ExplosionTemplate,
    buffer: &mut CommandBuffer,
) -> DeathResult {
    let mut result = DeathResult::default();

    for idx in world.alive_entities() {
        let (Some(health), Some(flags)) = (world.healths[idx], world.flags[idx]) else {
            continue;
        };
        if flags.contains(Flags::PARTICLE) || health.0 > 0 {
            continue;
        }
        let Some(id) = world.id_at(idx) else {
            continue;
        };

        if flags.contains(Flags::EXPLODE_ON_DEATH) {
            if let Some(pos) = world.positions[idx] {
                let scale = world.scales[idx].map_or(explosion.fallback_scale, |s| s.0);
                let rotation = world.rotations[idx].map_or(0.0, |r| r.0);
                buffer.spawn(explosion_bundle(explosion, pos, rotation, scale));
                result.explosions += 1;
            }
        }

        debug!("{id} died at {} hp", health.0);
        buffer.despawn(id);
        result.deaths += 1;
    }

    result
}

/// Queue removal of every PARTICLE whose animation has reached its last frame.
/// Returns the number of particles queued.
pub fn run_particle_expiry(world: &World, buffer: &mut CommandBuffer) -> u32 {
    let mut expired = 0;
    for idx in world.alive_entities() {
        let (Some(flags), Some(anim)) = (world.flags[idx], world.animations[idx]) else {
            continue;
        };
        if !flags.contains(Flags::PARTICLE) || !anim.is_last_frame() {
            continue;
        }
        if let Some(id) = world.id_at(idx) {
            buffer.despawn(id);
            expired += 1;
        }
    }
    expired
}
