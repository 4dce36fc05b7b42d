//! The registry: entity lifecycle and per-type component stores.
//!
//! The `Registry` is the single entry point for creating and destroying
//! entities and for attaching, reading and detaching components. It owns
//! one [`SparseSet`] per component type, created lazily the first time the
//! type is attached, and keyed by the type's `TypeId`.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use tessera_foundation::{Entity, Error, ErrorContext, Result};
use tracing::{debug, trace, warn};

use crate::allocator::EntityAllocator;
use crate::config::RegistryConfig;
use crate::erased::{Component, ErasedStore};
use crate::set::ComponentSet;
use crate::sparse::SparseSet;
use crate::view::View;

/// Owner of all entities and component stores.
///
/// Stores live as long as the registry, even once empty.
pub struct Registry {
    /// Entity identity allocation.
    entities: EntityAllocator,
    /// One store per component type.
    stores: HashMap<TypeId, Box<dyn ErasedStore>>,
    /// Capacity hints.
    config: RegistryConfig,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entities", &self.entities.len())
            .field("stores", &self.stores.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Registry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entities: EntityAllocator::with_capacity(config.entity_capacity),
            stores: HashMap::new(),
            config,
        }
    }

    /// Returns the configuration this registry was built with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // --- Entity Operations ---

    /// Creates an entity with no components.
    pub fn create(&mut self) -> Entity {
        let entity = self.entities.create();
        trace!(entity = entity.id(), "created entity");
        entity
    }

    /// Destroys an entity, detaching every component it holds.
    ///
    /// Destroying the null entity or an identity that was never issued
    /// does nothing.
    ///
    /// # Errors
    ///
    /// Returns `DoubleDestroy` if the entity was already destroyed and has
    /// not been reissued since.
    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        if entity.is_null() {
            return Ok(());
        }
        // Recycle before purging: a rejected double destroy leaves every
        // store untouched.
        if let Err(err) = self.entities.destroy(entity) {
            warn!(entity = entity.id(), "rejected double destroy");
            return Err(err.with_context(ErrorContext::operation("Registry::destroy")));
        }

        let purged = self
            .stores
            .values_mut()
            .map(|store| store.remove_entity(entity))
            .filter(|removed| *removed)
            .count();
        trace!(entity = entity.id(), purged, "destroyed entity");
        Ok(())
    }

    /// Returns true if the entity is live.
    #[must_use]
    pub fn is_valid(&self, entity: Entity) -> bool {
        self.entities.is_valid(entity)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if no entity is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over live entities in ascending identity order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter()
    }

    // --- Component Operations ---

    /// Attaches `value` to `entity` and returns a handle to the stored value.
    ///
    /// The handle stays valid until the next structural change to the
    /// store of `T`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntity` if the entity is not live and
    /// `DuplicateComponent` if it already has a `T`.
    pub fn emplace<T: Component>(&mut self, entity: Entity, value: T) -> Result<&mut T> {
        self.emplace_with(entity, || value)
    }

    /// Like [`emplace`](Self::emplace), but builds the value only after the
    /// entity has been checked.
    ///
    /// # Errors
    ///
    /// Same as [`emplace`](Self::emplace).
    pub fn emplace_with<T: Component>(
        &mut self,
        entity: Entity,
        make: impl FnOnce() -> T,
    ) -> Result<&mut T> {
        const OPERATION: &str = "Registry::emplace";

        self.validate(entity, OPERATION)?;
        trace!(
            entity = entity.id(),
            component = type_name::<T>(),
            "attaching component"
        );
        self.assure::<T>()?
            .emplace_with(entity, make)
            .map_err(|err| err.with_context(ErrorContext::operation(OPERATION)))
    }

    /// Detaches and returns the entity's `T`, if it has one.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        let value = self.typed_mut::<T>()?.remove(entity)?;
        trace!(
            entity = entity.id(),
            component = type_name::<T>(),
            "detached component"
        );
        Some(value)
    }

    /// Returns true if the entity has a `T`.
    ///
    /// Never creates a store.
    #[must_use]
    pub fn all_of<T: Component>(&self, entity: Entity) -> bool {
        self.storage::<T>()
            .is_some_and(|store| store.contains(entity))
    }

    /// Returns true if the entity has every type in `S`.
    ///
    /// Types are checked in listed order and checking stops at the first
    /// missing one.
    #[must_use]
    pub fn all_of_set<S: ComponentSet>(&self, entity: Entity) -> bool {
        S::type_ids()
            .iter()
            .all(|type_id| self.contains_type(*type_id, entity))
    }

    /// Returns true if the entity has a component of the type with this id.
    #[must_use]
    pub fn contains_type(&self, type_id: TypeId, entity: Entity) -> bool {
        self.erased(type_id)
            .is_some_and(|store| store.contains(entity))
    }

    /// Returns the entity's `T`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntity` if the entity is not live and
    /// `MissingComponent` if it has no `T` or no `T` was ever attached.
    pub fn get<T: Component>(&self, entity: Entity) -> Result<&T> {
        const OPERATION: &str = "Registry::get";

        self.validate(entity, OPERATION)?;
        self.storage::<T>()
            .and_then(|store| store.get(entity))
            .ok_or_else(|| missing::<T>(entity, OPERATION))
    }

    /// Returns the entity's `T` mutably.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T> {
        const OPERATION: &str = "Registry::get_mut";

        self.validate(entity, OPERATION)?;
        self.typed_mut::<T>()
            .and_then(|store| store.get_mut(entity))
            .ok_or_else(|| missing::<T>(entity, OPERATION))
    }

    // --- Stores ---

    /// Returns the store of `T`, if one was created.
    #[must_use]
    pub fn storage<T: Component>(&self) -> Option<&SparseSet<T>> {
        self.erased(TypeId::of::<T>())?
            .as_any()
            .downcast_ref::<SparseSet<T>>()
    }

    /// Returns the number of component stores.
    #[must_use]
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Returns the type-erased store for a component type id.
    pub(crate) fn erased(&self, type_id: TypeId) -> Option<&dyn ErasedStore> {
        self.stores.get(&type_id).map(|store| &**store)
    }

    fn typed_mut<T: Component>(&mut self) -> Option<&mut SparseSet<T>> {
        self.stores
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<SparseSet<T>>()
    }

    /// Resolves the store of `T`, creating it on first use.
    fn assure<T: Component>(&mut self) -> Result<&mut SparseSet<T>> {
        let capacity = self.config.store_capacity;
        let count = self.stores.len() + 1;

        self.stores
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                debug!(
                    component = type_name::<T>(),
                    stores = count,
                    "created component store"
                );
                Box::new(SparseSet::<T>::with_capacity(capacity))
            })
            .as_any_mut()
            .downcast_mut::<SparseSet<T>>()
            .ok_or_else(|| {
                Error::internal(format!("store for {} has the wrong type", type_name::<T>()))
            })
    }

    fn validate(&self, entity: Entity, operation: &'static str) -> Result<()> {
        if self.entities.is_valid(entity) {
            Ok(())
        } else {
            Err(Error::invalid_entity(entity).with_context(ErrorContext::operation(operation)))
        }
    }

    // --- Views ---

    /// Creates a view over the entities holding every type in `S`.
    ///
    /// The first type of `S` is the lead type: its store's dense order is
    /// the iteration order. Put the rarest component first.
    #[must_use]
    pub fn view_all<S: ComponentSet>(&self) -> View<'_, S> {
        View::new(self)
    }
}

fn missing<T>(entity: Entity, operation: &'static str) -> Error {
    Error::missing_component(entity, type_name::<T>())
        .with_context(ErrorContext::operation(operation))
}
