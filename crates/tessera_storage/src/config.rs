//! Configuration for a [`Registry`](crate::Registry).

/// Capacity hints applied when a registry and its stores are created.
///
/// Hints only pre-size allocations; they never limit how many entities or
/// components a registry can hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Identities to reserve room for in the allocator.
    pub entity_capacity: usize,

    /// Components to reserve room for in every newly created store.
    pub store_capacity: usize,
}

impl RegistryConfig {
    /// Creates a configuration for simulations with thousands of entities.
    #[must_use]
    pub fn large() -> Self {
        Self {
            entity_capacity: 4096,
            store_capacity: 1024,
        }
    }

    /// Builder method to set the entity capacity hint.
    #[must_use]
    pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
        self.entity_capacity = capacity;
        self
    }

    /// Builder method to set the per-store capacity hint.
    #[must_use]
    pub fn with_store_capacity(mut self, capacity: usize) -> Self {
        self.store_capacity = capacity;
        self
    }
}
