//! Error types for the Tessera system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::entity::Entity;

/// Result type used by every fallible Tessera operation.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tessera operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate component error.
    #[must_use]
    pub fn duplicate_component(entity: Entity, component: &'static str) -> Self {
        Self::new(ErrorKind::DuplicateComponent { entity, component })
    }

    /// Creates a missing component error.
    #[must_use]
    pub fn missing_component(entity: Entity, component: &'static str) -> Self {
        Self::new(ErrorKind::MissingComponent { entity, component })
    }

    /// Creates an invalid entity error.
    #[must_use]
    pub fn invalid_entity(entity: Entity) -> Self {
        Self::new(ErrorKind::InvalidEntity(entity))
    }

    /// Creates a double destroy error.
    #[must_use]
    pub fn double_destroy(entity: Entity) -> Self {
        Self::new(ErrorKind::DoubleDestroy(entity))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the entity this error is about, if any.
    #[must_use]
    pub fn entity(&self) -> Option<Entity> {
        match &self.kind {
            ErrorKind::DuplicateComponent { entity, .. }
            | ErrorKind::MissingComponent { entity, .. }
            | ErrorKind::InvalidEntity(entity)
            | ErrorKind::DoubleDestroy(entity) => Some(*entity),
            ErrorKind::Internal(_) => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A component of this type is already attached to the entity.
    #[error("duplicate component: {component} already attached to {entity}")]
    DuplicateComponent {
        /// The entity the component was attached to.
        entity: Entity,
        /// Type name of the component.
        component: &'static str,
    },

    /// The entity has no component of this type, or no store for the type exists.
    #[error("missing component: {component} on {entity}")]
    MissingComponent {
        /// The entity that was queried.
        entity: Entity,
        /// Type name of the component.
        component: &'static str,
    },

    /// The entity is null, was never issued, or has been destroyed.
    #[error("invalid entity: {0}")]
    InvalidEntity(Entity),

    /// The entity was destroyed while already on the free list.
    #[error("entity destroyed twice: {0}")]
    DoubleDestroy(Entity),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the operation that failed, e.g. `Registry::emplace`.
    pub operation: Option<&'static str>,
    /// Free-form notes added along the call path.
    pub notes: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context naming the failed operation.
    #[must_use]
    pub fn operation(name: &'static str) -> Self {
        Self {
            operation: Some(name),
            notes: Vec::new(),
        }
    }

    /// Adds a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        for note in &self.notes {
            write!(f, "\n  {note}")?;
        }
        Ok(())
    }
}
