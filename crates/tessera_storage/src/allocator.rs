//! Entity identity allocation and recycling.
//!
//! The `EntityAllocator` issues identities from a monotonically growing
//! counter and recycles destroyed identities through a LIFO free list.

use tessera_foundation::{Entity, Error, Result};

/// Issues and recycles entity identities.
///
/// Every identity in `1..=last` is either live or present exactly once on
/// the free list. A per-identity state table mirrors the free list so that
/// validity checks are O(1) and double destruction is rejected.
#[derive(Debug, Clone)]
pub struct EntityAllocator {
    /// Highest identity ever issued.
    last: u32,
    /// Recycled identities, most recently freed last.
    free_list: Vec<Entity>,
    /// `freed[id]` is true while `id` sits on the free list. Slot 0 is null.
    freed: Vec<bool>,
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityAllocator {
    /// Creates an empty allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty allocator with room for `capacity` identities.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut freed = Vec::with_capacity(capacity.saturating_add(1));
        freed.push(false);
        Self {
            last: 0,
            free_list: Vec::with_capacity(capacity),
            freed,
        }
    }

    /// Issues an identity.
    ///
    /// Pops the most recently freed identity when one is available,
    /// otherwise issues `last + 1`.
    ///
    /// # Panics
    ///
    /// Panics if all `u32::MAX` identities are live.
    pub fn create(&mut self) -> Entity {
        if let Some(entity) = self.free_list.pop() {
            self.freed[entity.index()] = false;
            return entity;
        }

        assert!(self.last < u32::MAX, "entity identity space exhausted");
        self.last += 1;
        self.freed.push(false);
        Entity::new(self.last)
    }

    /// Returns an identity to the free list.
    ///
    /// Destroying the null entity or an identity that was never issued does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `DoubleDestroy` if the identity is already on the free list.
    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        if entity.is_null() || entity.id() > self.last {
            return Ok(());
        }

        let slot = &mut self.freed[entity.index()];
        if *slot {
            return Err(Error::double_destroy(entity));
        }
        *slot = true;
        self.free_list.push(entity);
        Ok(())
    }

    /// Returns true if the identity is non-null, issued, and not freed.
    #[must_use]
    pub fn is_valid(&self, entity: Entity) -> bool {
        !entity.is_null() && entity.id() <= self.last && !self.freed[entity.index()]
    }

    /// Returns the highest identity ever issued.
    #[must_use]
    pub fn last(&self) -> Entity {
        Entity::new(self.last)
    }

    /// Returns the number of identities waiting for reuse.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Returns the number of live identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last as usize - self.free_list.len()
    }

    /// Returns true if no identity is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all live identities in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        (1..=self.last)
            .map(Entity::new)
            .filter(|entity| !self.freed[entity.index()])
    }
}
