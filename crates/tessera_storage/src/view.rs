//! Multi-type intersection iteration.
//!
//! A view walks the dense entity array of its lead type's store and yields
//! each entity that also holds every other listed type. Nothing is
//! materialized: the lead store's length and contents are re-read on every
//! step.
//!
//! Two flavors exist:
//! - [`View`] borrows the registry, so no structural change can happen
//!   while it is alive. Each matching entity is yielded exactly once, in
//!   lead-store dense order.
//! - [`ViewCursor`] holds only a position and is advanced against a
//!   registry passed to each call, so the caller may attach, detach or
//!   destroy between steps.
//!
//! # Mutation during a cursor traversal
//!
//! Removing a lead-type component swap-removes it: the entity in the last
//! dense slot moves into the hole. If the hole is behind the cursor, the
//! moved entity is never visited in this pass. Entities gaining the lead
//! type during the pass are appended and will be visited, because the
//! length is re-read. Changing membership of the other listed types only
//! affects whether entities not yet visited pass the filter.
//!
//! Detaching and re-attaching the lead type on an entity the cursor has
//! already passed appends it again, so it is yielded a second time in the
//! same pass. The detach also moves the last unvisited entity into the
//! hole behind the cursor, so that entity is skipped.

use std::any::TypeId;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use tessera_foundation::{Entity, Result};

use crate::erased::{Component, ErasedStore};
use crate::registry::Registry;
use crate::set::ComponentSet;
use crate::sparse::SparseSet;

/// Lazy iterator over entities holding every type in `S`.
///
/// Created by [`Registry::view_all`].
pub struct View<'r, S: ComponentSet> {
    registry: &'r Registry,
    /// Store of the lead type; `None` if the type was never attached.
    lead: Option<&'r SparseSet<S::Lead>>,
    /// Stores of the remaining types in listed order; `None` if any of them
    /// was never attached.
    filters: Option<Vec<&'r dyn ErasedStore>>,
    /// Next dense slot of the lead store to examine.
    cursor: usize,
    _set: PhantomData<fn() -> S>,
}

impl<'r, S: ComponentSet> View<'r, S> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        let type_ids = S::type_ids();
        let filters = type_ids[1..]
            .iter()
            .map(|type_id| registry.erased(*type_id))
            .collect();

        Self {
            registry,
            lead: registry.storage::<S::Lead>(),
            filters,
            cursor: 0,
            _set: PhantomData,
        }
    }

    /// Number of entities in the lead store, an upper bound on the results.
    #[must_use]
    pub fn lead_len(&self) -> usize {
        self.lead.map_or(0, SparseSet::len)
    }

    /// Reads a component of an entity, typically one yielded by this view.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::get`].
    pub fn get<T: Component>(&self, entity: Entity) -> Result<&'r T> {
        self.registry.get::<T>(entity)
    }

    fn matches(filters: &[&dyn ErasedStore], entity: Entity) -> bool {
        filters.iter().all(|store| store.contains(entity))
    }
}

impl<S: ComponentSet> Iterator for View<'_, S> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        let lead = self.lead?;
        let filters = self.filters.as_deref()?;

        while let Some(&entity) = lead.entities().get(self.cursor) {
            self.cursor += 1;
            if Self::matches(filters, entity) {
                return Some(entity);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.filters.is_none() {
            return (0, Some(0));
        }
        (0, Some(self.lead_len().saturating_sub(self.cursor)))
    }
}

impl<S: ComponentSet> FusedIterator for View<'_, S> {}

/// Detached traversal position over entities holding every type in `S`.
///
/// Every call to [`next`](Self::next) resolves the stores again and re-reads
/// the lead store, so the registry may be mutated between calls. An entity
/// can then be skipped or yielded twice in one pass; see the module
/// documentation for when.
pub struct ViewCursor<S: ComponentSet> {
    /// Type ids of the non-lead types in listed order.
    filters: Box<[TypeId]>,
    /// Next dense slot of the lead store to examine.
    position: usize,
    _set: PhantomData<fn() -> S>,
}

impl<S: ComponentSet> Clone for ViewCursor<S> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            position: self.position,
            _set: PhantomData,
        }
    }
}

impl<S: ComponentSet> fmt::Debug for ViewCursor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewCursor")
            .field("types", &S::type_names())
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl<S: ComponentSet> Default for ViewCursor<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ComponentSet> ViewCursor<S> {
    /// Creates a cursor at the start of the lead store.
    #[must_use]
    pub fn new() -> Self {
        let type_ids = S::type_ids();
        Self {
            filters: Box::from(&type_ids[1..]),
            position: 0,
            _set: PhantomData,
        }
    }

    /// Advances to the next matching entity in the registry's current state.
    pub fn next(&mut self, registry: &Registry) -> Option<Entity> {
        let lead = registry.storage::<S::Lead>()?;

        while let Some(&entity) = lead.entities().get(self.position) {
            self.position += 1;
            if self
                .filters
                .iter()
                .all(|type_id| registry.contains_type(*type_id, entity))
            {
                return Some(entity);
            }
        }
        None
    }

    /// Dense slot of the lead store the next call will examine first.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewinds to the start of the lead store.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
