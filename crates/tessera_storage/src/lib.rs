//! Sparse-set component stores, entity registry, and views for Tessera.
//!
//! This crate provides:
//! - [`EntityAllocator`] - Identity issue and recycling
//! - [`SparseSet`] - O(1) per-type component storage
//! - [`ErasedStore`] - Type-erased store interface
//! - [`Registry`] - Entity lifecycle and component access
//! - [`View`] / [`ViewCursor`] - Multi-type intersection iteration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod allocator;
pub mod config;
pub mod erased;
pub mod registry;
pub mod set;
pub mod sparse;
pub mod view;

pub use allocator::EntityAllocator;
pub use config::RegistryConfig;
pub use erased::{Component, ErasedStore};
pub use registry::Registry;
pub use set::ComponentSet;
pub use sparse::SparseSet;
pub use view::{View, ViewCursor};
