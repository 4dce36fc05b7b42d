//! Entity identities.

use std::fmt;

/// Opaque entity identity.
///
/// An entity is nothing but a non-zero integer. The value `0` is reserved
/// as [`Entity::NULL`] and is never issued by an allocator.
///
/// Identities carry no generation counter: once an identity is recycled,
/// a handle kept from its previous life compares equal to the new one.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Entity(u32);

impl Entity {
    /// The reserved "no entity" identity.
    pub const NULL: Entity = Entity(0);

    /// Wraps a raw identity value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns true if this is the null identity.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Returns the identity as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Entity {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Entity(null)")
        } else {
            write!(f, "Entity({})", self.0)
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
