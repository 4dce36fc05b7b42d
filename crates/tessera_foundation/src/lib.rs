//! Core types for Tessera.
//!
//! This crate provides:
//! - [`Entity`] - Opaque entity identities with a reserved null value
//! - [`Error`] - Error types shared by every storage layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{Error, ErrorContext, ErrorKind, Result};
