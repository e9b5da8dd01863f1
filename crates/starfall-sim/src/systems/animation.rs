//! Animation clock: advances sprite frames on a per-entity timer.

use crate::ecs::World;

/// Accumulate `dt` on every Animation and step the frame once the
/// accumulator passes one frame period, wrapping at the sheet's frame count.
pub fn run(world: &mut World, dt: f32) {
    for anim in world.animations.iter_mut().flatten() {
        // A zero fps sheet is a still image
        if anim.fps <= 0.0 {
            continue;
        }

        anim.elapsed += dt;
        if anim.elapsed > 1.0 / anim.fps {
            anim.elapsed = 0.0;
            anim.frame = (anim.frame + 1) % anim.frame_count();
        }
    }
}
