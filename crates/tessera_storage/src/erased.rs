//! Type-erased access to component stores.
//!
//! The registry holds stores of unrelated component types side by side.
//! `ErasedStore` is the capability set every store exposes without its
//! component type: membership, removal by entity, and a typed downcast.

use std::any::{Any, type_name};

use tessera_foundation::Entity;

use crate::sparse::SparseSet;

/// Marker for types that can be attached to entities.
///
/// Components are plain data. The store may move them at any structural
/// change, so a component must not rely on a fixed address.
pub trait Component: Any {}

impl<T> Component for T where T: Any {}

/// Uniform interface over `SparseSet<T>` for any component type `T`.
pub trait ErasedStore: Any {
    /// Detaches the entity's component, if it has one.
    ///
    /// Returns true if a component was removed.
    fn remove_entity(&mut self, entity: Entity) -> bool;

    /// Returns true if the entity has a component in this store.
    fn contains(&self, entity: Entity) -> bool;

    /// Returns the number of components in this store.
    fn len(&self) -> usize;

    /// Returns true if the store holds no components.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type name of the stored component.
    fn component_name(&self) -> &'static str;

    /// Upcast for downcasting to the concrete store.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete store.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStore for SparseSet<T> {
    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.remove(entity).is_some()
    }

    fn contains(&self, entity: Entity) -> bool {
        SparseSet::contains(self, entity)
    }

    fn len(&self) -> usize {
        SparseSet::len(self)
    }

    fn component_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
