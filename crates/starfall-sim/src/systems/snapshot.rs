//! Snapshot builder: reads the ECS world and produces a FrameSnapshot.
//!
//! Read-only; it never modifies the world.

use starfall_core::enums::GamePhase;
use starfall_core::state::{FrameSnapshot, SpriteView};
use starfall_core::types::SimTime;

use crate::ecs::{EntityId, World};

/// Build the renderer's view of the current frame.
/// Every live entity with Position + Animation becomes a sprite.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: Option<EntityId>,
) -> FrameSnapshot {
    let sprites = world
        .alive_entities()
        .into_iter()
        .filter_map(|idx| {
            let pos = world.positions[idx]?;
            let anim = world.animations[idx]?;
            Some(SpriteView {
                entity: idx as u32,
                x: pos.0.x,
                y: pos.0.y,
                rotation: world.rotations[idx].map_or(0.0, |r| r.0),
                scale: world.scales[idx].map_or(1.0, |s| s.0),
                sheet: anim.sheet.id,
                source: anim.source_rect(),
                immune: world.iframes[idx].is_some_and(|im| im.is_immune()),
            })
        })
        .collect();

    let player_health = player.and_then(|id| world.health(id)).map(|h| h.0);
    let player_position = player
        .and_then(|id| world.position(id))
        .map(|p| p.0.to_array());

    FrameSnapshot {
        tick: time.tick,
        elapsed_secs: time.elapsed_secs,
        phase,
        player_health,
        player_position,
        entity_count: world.entity_count(),
        sprites,
    }
}
