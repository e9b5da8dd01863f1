use serde::{Deserialize, Serialize};

/// Generational entity handle. A stale handle (slot reused since) fails liveness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId {
    pub index: u32,
    pub generation: u32,
}

impl EntityId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn slot(&self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}g{}", self.index, self.generation)
    }
}

/// Hands out entity slots and recycles freed ones with a bumped generation.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    generations: Vec<u32>,
    live: Vec<bool>,
    free_indices: Vec<u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> EntityId {
        if let Some(index) = self.free_indices.pop() {
            self.live[index as usize] = true;
            EntityId::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            self.live.push(true);
            EntityId::new(index, 0)
        }
    }

    /// Free a slot. Returns false for stale or unknown ids.
    pub fn deallocate(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.generations[id.slot()] = self.generations[id.slot()].wrapping_add(1);
        self.live[id.slot()] = false;
        self.free_indices.push(id.index);
        true
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.generations.get(id.slot()) == Some(&id.generation) && self.live[id.slot()]
    }

    /// Id of the entity currently occupying a slot, if any.
    pub fn id_at(&self, index: usize) -> Option<EntityId> {
        match self.live.get(index) {
            Some(true) => Some(EntityId::new(index as u32, self.generations[index])),
            _ => None,
        }
    }

    pub fn is_slot_live(&self, index: usize) -> bool {
        self.live.get(index).copied().unwrap_or(false)
    }

    /// Number of slots ever allocated.
    pub fn capacity(&self) -> usize {
        self.generations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_and_deallocate() {
        let mut alloc = EntityAllocator::new();
        let e0 = alloc.allocate();
        assert_eq!(e0.index, 0);
        assert_eq!(e0.generation, 0);
        assert!(alloc.is_alive(e0));

        assert!(alloc.deallocate(e0));
        assert!(!alloc.is_alive(e0));

        let e0_reuse = alloc.allocate();
        assert_eq!(e0_reuse.index, 0);
        assert_eq!(e0_reuse.generation, 1);
        assert!(alloc.is_alive(e0_reuse));
        assert!(!alloc.is_alive(e0));
    }

    #[test]
    fn double_free_is_ignored() {
        let mut alloc = EntityAllocator::new();
        let e0 = alloc.allocate();
        assert!(alloc.deallocate(e0));
        assert!(!alloc.deallocate(e0));

        // Only one reuse of slot 0 is handed out.
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_eq!(a.index, 0);
        assert_eq!(b.index, 1);
    }

    #[test]
    fn sequential_allocation() {
        let mut alloc = EntityAllocator::new();
        let e0 = alloc.allocate();
        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        assert_eq!(e0.index, 0);
        assert_eq!(e1.index, 1);
        assert_eq!(e2.index, 2);
        assert_eq!(alloc.capacity(), 3);
    }
}
