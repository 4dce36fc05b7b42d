//! Ordered lists of component types.
//!
//! A view is parameterized by a tuple of component types, e.g.
//! `(Position, Velocity)`. The first element is the *lead* type whose store
//! drives iteration; the rest are membership filters checked in order.

use std::any::{TypeId, type_name};

use crate::erased::Component;

/// Ordered, non-empty list of component types.
///
/// Implemented for tuples of one to eight component types.
pub trait ComponentSet: 'static {
    /// The lead type, whose store supplies the iteration domain.
    type Lead: Component;

    /// Number of types in the list.
    const LEN: usize;

    /// Type ids in listed order, lead first.
    fn type_ids() -> Box<[TypeId]>;

    /// Type names in listed order, lead first.
    fn type_names() -> Box<[&'static str]>;
}

macro_rules! impl_component_set {
    ($lead:ident $(, $rest:ident)*) => {
        impl<$lead: Component $(, $rest: Component)*> ComponentSet for ($lead, $($rest,)*) {
            type Lead = $lead;

            const LEN: usize = [stringify!($lead) $(, stringify!($rest))*].len();

            fn type_ids() -> Box<[TypeId]> {
                Box::from([TypeId::of::<$lead>() $(, TypeId::of::<$rest>())*])
            }

            fn type_names() -> Box<[&'static str]> {
                Box::from([type_name::<$lead>() $(, type_name::<$rest>())*])
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
