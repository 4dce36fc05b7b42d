//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tessera_foundation::{Entity, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_duplicate_component() {
    let err = Error::duplicate_component(Entity::new(4), "game::Position");
    assert!(matches!(err.kind, ErrorKind::DuplicateComponent { .. }));
    assert_eq!(err.entity(), Some(Entity::new(4)));
}

#[test]
fn error_missing_component() {
    let err = Error::missing_component(Entity::new(4), "game::Velocity");
    assert!(matches!(err.kind, ErrorKind::MissingComponent { .. }));
}

#[test]
fn error_invalid_entity() {
    let err = Error::invalid_entity(Entity::NULL);
    assert_eq!(err.kind, ErrorKind::InvalidEntity(Entity::NULL));
}

#[test]
fn error_double_destroy() {
    let err = Error::double_destroy(Entity::new(8));
    assert_eq!(err.kind, ErrorKind::DoubleDestroy(Entity::new(8)));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn display_names_component_and_entity() {
    let msg = format!("{}", Error::missing_component(Entity::new(5), "game::Health"));
    assert!(msg.contains("game::Health"));
    assert!(msg.contains("#5"));
}

#[test]
fn display_double_destroy() {
    let msg = format!("{}", Error::double_destroy(Entity::new(8)));
    assert!(msg.contains("twice"));
    assert!(msg.contains("#8"));
}

#[test]
fn display_internal() {
    let msg = format!("{}", Error::internal("store table corrupted"));
    assert!(msg.contains("store table corrupted"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::invalid_entity(Entity::new(1));
    assert!(err.context.is_none());
}

#[test]
fn context_display() {
    let ctx = ErrorContext::operation("Registry::get")
        .with_note("first note")
        .with_note("second note");
    let rendered = format!("{ctx}");

    assert!(rendered.starts_with("in Registry::get"));
    assert!(rendered.contains("first note"));
    assert!(rendered.contains("second note"));
}

#[test]
fn errors_are_std_errors() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::invalid_entity(Entity::NULL));
}
