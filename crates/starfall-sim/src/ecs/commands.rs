//! Deferred structural changes.
//!
//! Systems never spawn or despawn while iterating; they record the change
//! here and the orchestrator applies the buffer once the pass is over.

use log::trace;

use super::entity::EntityId;
use super::world::{EntityBundle, World};

#[derive(Debug, Clone)]
pub enum Deferred {
    Spawn(Box<EntityBundle>),
    Despawn(EntityId),
}

/// What a flush actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub spawned: usize,
    pub despawned: usize,
}

#[derive(Debug, Default)]
pub struct CommandBuffer {
    ops: Vec<Deferred>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, bundle: EntityBundle) {
        self.ops.push(Deferred::Spawn(Box::new(bundle)));
    }

    pub fn despawn(&mut self, id: EntityId) {
        self.ops.push(Deferred::Despawn(id));
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply queued changes in the order they were recorded, leaving the buffer empty.
    /// Despawns of ids that already died are skipped.
    pub fn apply(&mut self, world: &mut World) -> FlushSummary {
        let mut summary = FlushSummary::default();
        for op in self.ops.drain(..) {
            match op {
                Deferred::Spawn(bundle) => {
                    let id = world.spawn_bundle(*bundle);
                    trace!("spawned {id}");
                    summary.spawned += 1;
                }
                Deferred::Despawn(id) => {
                    if world.despawn(id) {
                        trace!("despawned {id}");
                        summary.despawned += 1;
                    }
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_core::types::Position;

    #[test]
    fn nothing_happens_until_apply() {
        let mut world = World::new();
        let e = world.spawn();
        let mut buffer = CommandBuffer::new();

        buffer.despawn(e);
        buffer.spawn(EntityBundle {
            position: Some(Position::new(3.0, 4.0)),
            ..Default::default()
        });
        assert_eq!(buffer.len(), 2);
        assert!(world.is_alive(e));
        assert_eq!(world.entity_count(), 1);

        let summary = buffer.apply(&mut world);
        assert_eq!(
            summary,
            FlushSummary {
                spawned: 1,
                despawned: 1
            }
        );
        assert!(buffer.is_empty());
        assert!(!world.is_alive(e));
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn duplicate_despawn_counts_once() {
        let mut world = World::new();
        let e = world.spawn();
        let mut buffer = CommandBuffer::new();
        buffer.despawn(e);
        buffer.despawn(e);
        assert_eq!(buffer.apply(&mut world).despawned, 1);
    }
}
