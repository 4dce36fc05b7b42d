//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Entity and Error.

mod errors;
