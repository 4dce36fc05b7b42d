//! Sparse-set storage for a single component type.
//!
//! A `SparseSet<T>` keeps three structures in lockstep:
//! - a sparse index mapping each entity to its dense slot
//! - the dense entity array, one entity per occupied slot
//! - the dense value array, parallel to the entity array
//!
//! Removal is a swap-remove: the last slot moves into the hole, so the
//! dense position of whichever entity occupied the last slot changes.

use std::any::type_name;
use std::collections::HashMap;

use tessera_foundation::{Entity, Error, Result};

/// Dense storage of `T` values keyed by entity.
#[derive(Debug, Clone)]
pub struct SparseSet<T> {
    /// Entity to dense slot.
    sparse: HashMap<Entity, usize>,
    /// Dense entities, parallel to `values`.
    entities: Vec<Entity>,
    /// Dense component values.
    values: Vec<T>,
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sparse: HashMap::new(),
            entities: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty set with room for `capacity` components.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sparse: HashMap::with_capacity(capacity),
            entities: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if `entity` has a value in this set.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.sparse
            .get(&entity)
            .is_some_and(|&slot| self.entities.get(slot) == Some(&entity))
    }

    /// Attaches `value` to `entity` and returns a handle to the stored value.
    ///
    /// The handle stays valid until the next insert or remove on this set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntity` for the null entity and `DuplicateComponent`
    /// if `entity` already has a value. The stored value is left untouched.
    pub fn emplace(&mut self, entity: Entity, value: T) -> Result<&mut T> {
        self.emplace_with(entity, || value)
    }

    /// Like [`emplace`](Self::emplace), but builds the value only once the
    /// slot is known to be free.
    ///
    /// # Errors
    ///
    /// Same as [`emplace`](Self::emplace).
    pub fn emplace_with(&mut self, entity: Entity, make: impl FnOnce() -> T) -> Result<&mut T> {
        if entity.is_null() {
            return Err(Error::invalid_entity(entity));
        }
        if self.contains(entity) {
            return Err(Error::duplicate_component(entity, type_name::<T>()));
        }

        let value = make();
        let slot = self.values.len();
        self.sparse.insert(entity, slot);
        self.entities.push(entity);
        self.values.push(value);
        Ok(&mut self.values[slot])
    }

    /// Detaches and returns the value of `entity`, if any.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.sparse.remove(&entity)?;
        let last = self.entities.len() - 1;

        if slot != last {
            let moved = self.entities[last];
            self.sparse.insert(moved, slot);
        }
        self.entities.swap_remove(slot);
        Some(self.values.swap_remove(slot))
    }

    /// Returns the value of `entity`, if any.
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        let slot = *self.sparse.get(&entity)?;
        self.values.get(slot)
    }

    /// Returns the value of `entity` mutably, if any.
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = *self.sparse.get(&entity)?;
        self.values.get_mut(slot)
    }

    /// Returns the dense slot of `entity`, if any.
    #[must_use]
    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.sparse.get(&entity).copied()
    }

    /// Entities in dense order.
    ///
    /// Dense order is insertion order, reshuffled by every swap-remove.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Values in dense order, parallel to [`entities`](Self::entities).
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Values in dense order, mutably.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Iterates over `(entity, value)` pairs in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.values.iter())
    }

    /// Iterates over `(entity, value)` pairs in dense order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.values.iter_mut())
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
