use std::sync::Arc;

use dashmap::DashMap;

use waystones_core::error::{Result, WaystonesError};
use waystones_core::{BlockPos, Waystone, WaystoneId};

use super::WaystoneDirectory;

/// In-memory directory:
/// - `id -> Waystone`
/// - `pos -> id`
#[derive(Default)]
pub struct InMemoryDirectory {
    by_id: DashMap<WaystoneId, Arc<Waystone>>,
    by_pos: DashMap<BlockPos, WaystoneId>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            by_id: DashMap::new(),
            by_pos: DashMap::new(),
        }
    }

    /// Register a waystone. Ids and positions must both be free.
    pub fn insert(&self, waystone: Waystone) -> Result<Arc<Waystone>> {
        let id = waystone.id();
        let pos = waystone.pos();
        if self.by_id.contains_key(&id) {
            return Err(WaystonesError::InvalidState(format!("waystone {id} already registered")));
        }
        if self.by_pos.contains_key(&pos) {
            return Err(WaystonesError::InvalidState(format!("position {pos} already holds a waystone")));
        }

        let waystone = Arc::new(waystone);
        self.by_pos.insert(pos, id);
        self.by_id.insert(id, Arc::clone(&waystone));
        Ok(waystone)
    }

    /// Remove and invalidate. Handles held elsewhere observe `is_valid() == false`.
    pub fn remove(&self, id: WaystoneId) -> Option<Arc<Waystone>> {
        let (_, waystone) = self.by_id.remove(&id)?;
        self.by_pos.remove(&waystone.pos());
        waystone.invalidate();
        Some(waystone)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl WaystoneDirectory for InMemoryDirectory {
    fn resolve(&self, id: WaystoneId) -> Option<Arc<Waystone>> {
        self.by_id.get(&id).map(|r| Arc::clone(r.value()))
    }

    fn waystone_at(&self, pos: BlockPos) -> Option<Arc<Waystone>> {
        let id = *self.by_pos.get(&pos)?.value();
        self.resolve(id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn remove_invalidates_and_unindexes() {
        let dir = InMemoryDirectory::new();
        let pos = BlockPos::new(0, 64, 0);
        let w = dir.insert(Waystone::new(WaystoneId(1), "Spawn", pos)).unwrap();

        assert!(dir.waystone_at(pos).is_some());
        dir.remove(WaystoneId(1));

        assert!(!w.is_valid());
        assert!(dir.waystone_at(pos).is_none());
        assert!(dir.resolve(WaystoneId(1)).is_none());
        assert!(dir.is_empty());
    }

    #[test]
    fn duplicate_position_is_rejected() {
        let dir = InMemoryDirectory::new();
        let pos = BlockPos::new(5, 5, 5);
        dir.insert(Waystone::new(WaystoneId(1), "A", pos)).unwrap();
        let err = dir.insert(Waystone::new(WaystoneId(2), "B", pos)).unwrap_err();
        assert_eq!(err.code().as_str(), "INVALID_STATE");
    }
}
