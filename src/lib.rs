//! Tessera - Sparse-set entity-component runtime
//!
//! This crate re-exports all layers of the Tessera system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tessera_storage:    allocator, sparse sets, registry, views
//! Layer 0: tessera_foundation: core types (Entity, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use tessera::prelude::*;
//!
//! struct Position(f32);
//! struct Velocity(f32);
//!
//! let mut registry = Registry::new();
//! let e = registry.create();
//! registry.emplace(e, Position(0.0))?;
//! registry.emplace(e, Velocity(2.0))?;
//!
//! let moving: Vec<Entity> = registry.view_all::<(Velocity, Position)>().collect();
//! assert_eq!(moving, vec![e]);
//!
//! registry.destroy(e)?;
//! assert!(!registry.all_of::<Position>(e));
//! # Ok::<(), tessera::foundation::Error>(())
//! ```

pub use tessera_foundation as foundation;
pub use tessera_storage as storage;

/// Commonly used types.
pub mod prelude {
    pub use tessera_foundation::{Entity, Error, ErrorKind, Result};
    pub use tessera_storage::{
        Component, ComponentSet, Registry, RegistryConfig, SparseSet, View, ViewCursor,
    };
}
