//! Object identity with generational indices
//!
//! Every object in a scene gets an [`ObjectId`]: a slot index plus a
//! generation counter. When an object is removed its slot may be reused, but
//! the generation is bumped first, so an id held for a removed object (for
//! example the camera's tracking target) never matches its replacement.

/// Stable handle to an object in a [`Scene`](super::Scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    index: u32,
    generation: u32,
}

impl ObjectId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Hands out and retires [`ObjectId`]s
#[derive(Debug, Default)]
pub struct IdAllocator {
    /// Current generation of each slot
    generations: Vec<u32>,
    /// Retired slots available for reuse (LIFO)
    free_indices: Vec<u32>,
    alive_count: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ObjectId {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped on free
            ObjectId::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            ObjectId::new(index, 0)
        }
    }

    /// Retire an id. Returns false if it was already stale.
    pub fn free(&mut self, id: ObjectId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.generations[id.index as usize] += 1;
        self.free_indices.push(id.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.generations
            .get(id.index as usize)
            .is_some_and(|&generation| generation == id.generation)
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut ids = IdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert_ne!(a, b);
        assert_eq!(ids.alive_count(), 2);

        assert!(ids.free(a));
        assert!(!ids.free(a));
        assert!(!ids.is_alive(a));
        assert!(ids.is_alive(b));
        assert_eq!(ids.alive_count(), 1);
    }

    #[test]
    fn test_reused_slot_gets_new_generation() {
        let mut ids = IdAllocator::new();
        let old = ids.allocate();
        ids.free(old);

        let new = ids.allocate();
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(!ids.is_alive(old));
        assert!(ids.is_alive(new));
    }
}
