use starfall_core::components::*;
use starfall_core::types::{Position, Rotation, Scale, Velocity};

use super::entity::{EntityAllocator, EntityId};

/// Full set of components for a new entity. `None` fields are left unattached.
#[derive(Debug, Clone, Default)]
pub struct EntityBundle {
    pub position: Option<Position>,
    pub velocity: Option<Velocity>,
    pub rotation: Option<Rotation>,
    pub scale: Option<Scale>,
    pub health: Option<Health>,
    pub hitbox: Option<HitBox>,
    pub team: Option<Team>,
    pub iframes: Option<IFrames>,
    pub flags: Option<Flags>,
    pub animation: Option<Animation>,
    pub ai: Option<AiInfo>,
    pub player: Option<Player>,
}

/// SoA (Struct of Arrays) ECS World.
/// Each component type has its own Vec<Option<T>> storage, indexed by entity index.
#[derive(Default)]
pub struct World {
    allocator: EntityAllocator,

    // Component storage, one Vec per component type
    pub positions: Vec<Option<Position>>,
    pub velocities: Vec<Option<Velocity>>,
    pub rotations: Vec<Option<Rotation>>,
    pub scales: Vec<Option<Scale>>,
    pub healths: Vec<Option<Health>>,
    pub hitboxes: Vec<Option<HitBox>>,
    pub teams: Vec<Option<Team>>,
    pub iframes: Vec<Option<IFrames>>,
    pub flags: Vec<Option<Flags>>,
    pub animations: Vec<Option<Animation>>,
    pub ai: Vec<Option<AiInfo>>,
    pub players: Vec<Option<Player>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an entity with no components.
    pub fn spawn(&mut self) -> EntityId {
        let id = self.allocator.allocate();
        let idx = id.slot();

        // Grow all storage to accommodate
        while self.positions.len() <= idx {
            self.positions.push(None);
            self.velocities.push(None);
            self.rotations.push(None);
            self.scales.push(None);
            self.healths.push(None);
            self.hitboxes.push(None);
            self.teams.push(None);
            self.iframes.push(None);
            self.flags.push(None);
            self.animations.push(None);
            self.ai.push(None);
            self.players.push(None);
        }

        id
    }

    /// Allocate an entity and attach every component in the bundle.
    pub fn spawn_bundle(&mut self, bundle: EntityBundle) -> EntityId {
        let id = self.spawn();
        let idx = id.slot();
        self.positions[idx] = bundle.position;
        self.velocities[idx] = bundle.velocity;
        self.rotations[idx] = bundle.rotation;
        self.scales[idx] = bundle.scale;
        self.healths[idx] = bundle.health;
        self.hitboxes[idx] = bundle.hitbox;
        self.teams[idx] = bundle.team;
        self.iframes[idx] = bundle.iframes;
        self.flags[idx] = bundle.flags;
        self.animations[idx] = bundle.animation;
        self.ai[idx] = bundle.ai;
        self.players[idx] = bundle.player;
        id
    }

    /// Remove an entity and all of its components. Stale ids are ignored.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        if !self.allocator.is_alive(id) {
            return false;
        }
        let idx = id.slot();
        self.positions[idx] = None;
        self.velocities[idx] = None;
        self.rotations[idx] = None;
        self.scales[idx] = None;
        self.healths[idx] = None;
        self.hitboxes[idx] = None;
        self.teams[idx] = None;
        self.iframes[idx] = None;
        self.flags[idx] = None;
        self.animations[idx] = None;
        self.ai[idx] = None;
        self.players[idx] = None;
        self.allocator.deallocate(id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.allocator.is_alive(id)
    }

    /// Id of the live entity in a storage slot.
    pub fn id_at(&self, idx: usize) -> Option<EntityId> {
        self.allocator.id_at(idx)
    }

    pub fn entity_count(&self) -> usize {
        (0..self.allocator.capacity())
            .filter(|&i| self.allocator.is_slot_live(i))
            .count()
    }

    /// Iterate over all alive entity indices
    pub fn alive_entities(&self) -> Vec<usize> {
        (0..self.allocator.capacity())
            .filter(|&i| self.allocator.is_slot_live(i))
            .collect()
    }

    /// Delete every entity carrying a Flags component. Returns how many were removed.
    pub fn clear_flagged(&mut self) -> usize {
        let doomed: Vec<EntityId> = self
            .alive_entities()
            .into_iter()
            .filter(|&idx| self.flags[idx].is_some())
            .filter_map(|idx| self.id_at(idx))
            .collect();
        doomed.into_iter().filter(|&id| self.despawn(id)).count()
    }

    // --- Checked accessors for code holding an id across ticks ---

    pub fn position(&self, id: EntityId) -> Option<Position> {
        if !self.is_alive(id) {
            return None;
        }
        self.positions[id.slot()]
    }

    pub fn rotation(&self, id: EntityId) -> Option<Rotation> {
        if !self.is_alive(id) {
            return None;
        }
        self.rotations[id.slot()]
    }

    pub fn health(&self, id: EntityId) -> Option<Health> {
        if !self.is_alive(id) {
            return None;
        }
        self.healths[id.slot()]
    }

    pub fn velocity_mut(&mut self, id: EntityId) -> Option<&mut Velocity> {
        if !self.is_alive(id) {
            return None;
        }
        self.velocities[id.slot()].as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_despawn() {
        let mut world = World::new();
        let e = world.spawn();
        assert!(world.is_alive(e));
        assert_eq!(world.entity_count(), 1);

        assert!(world.despawn(e));
        assert!(!world.is_alive(e));
        assert_eq!(world.entity_count(), 0);
        assert!(!world.despawn(e));
    }

    #[test]
    fn component_storage() {
        let mut world = World::new();
        let e = world.spawn_bundle(EntityBundle {
            position: Some(Position::new(10.0, 20.0)),
            velocity: Some(Velocity::new(1.0, -2.0)),
            ..Default::default()
        });
        let idx = e.slot();

        assert!(world.positions[idx].is_some());
        assert!(world.velocities[idx].is_some());
        assert!(world.healths[idx].is_none());

        world.despawn(e);
        assert!(world.positions[idx].is_none());
        assert!(world.velocities[idx].is_none());
    }

    #[test]
    fn stale_id_reads_nothing() {
        let mut world = World::new();
        let old = world.spawn_bundle(EntityBundle {
            position: Some(Position::new(1.0, 1.0)),
            health: Some(Health(5)),
            ..Default::default()
        });
        world.despawn(old);

        let new = world.spawn_bundle(EntityBundle {
            position: Some(Position::new(9.0, 9.0)),
            health: Some(Health(1)),
            ..Default::default()
        });
        assert_eq!(new.index, old.index);
        assert_eq!(world.position(old), None);
        assert_eq!(world.health(old), None);
        assert_eq!(world.health(new), Some(Health(1)));
    }

    #[test]
    fn clear_flagged_spares_unflagged() {
        let mut world = World::new();
        let flagged = world.spawn_bundle(EntityBundle {
            flags: Some(Flags::NONE),
            ..Default::default()
        });
        let bare = world.spawn();

        assert_eq!(world.clear_flagged(), 1);
        assert!(!world.is_alive(flagged));
        assert!(world.is_alive(bare));
    }
}
