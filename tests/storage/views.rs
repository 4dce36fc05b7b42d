//! Integration tests for views
//!
//! Tests intersection correctness, lead-type ordering, and the documented
//! behavior of cursors when the registry changes mid-traversal.

use tessera_foundation::Entity;
use tessera_storage::{Registry, ViewCursor};

struct A;
struct B;
struct C;
#[allow(dead_code)]
struct D;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position(f32);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Velocity(f32);

/// Entities 1, 2, 3 where 1 has {A, B}, 2 has {A}, 3 has {A, B, C}.
fn abc_registry() -> (Registry, Entity, Entity, Entity) {
    let mut registry = Registry::new();
    let e1 = registry.create();
    let e2 = registry.create();
    let e3 = registry.create();

    registry.emplace(e1, A).unwrap();
    registry.emplace(e1, B).unwrap();
    registry.emplace(e2, A).unwrap();
    registry.emplace(e3, A).unwrap();
    registry.emplace(e3, B).unwrap();
    registry.emplace(e3, C).unwrap();

    (registry, e1, e2, e3)
}

fn drain<S: tessera_storage::ComponentSet>(
    cursor: &mut ViewCursor<S>,
    registry: &Registry,
) -> Vec<Entity> {
    let mut out = Vec::new();
    while let Some(e) = cursor.next(registry) {
        out.push(e);
    }
    out
}

// =============================================================================
// Intersection Correctness
// =============================================================================

#[test]
fn view_a_b_yields_one_and_three() {
    let (registry, e1, _, e3) = abc_registry();
    let found: Vec<_> = registry.view_all::<(A, B)>().collect();
    assert_eq!(found, vec![e1, e3]);
}

#[test]
fn view_a_b_c_yields_three() {
    let (registry, _, _, e3) = abc_registry();
    let found: Vec<_> = registry.view_all::<(A, B, C)>().collect();
    assert_eq!(found, vec![e3]);
}

#[test]
fn view_of_never_attached_type_is_empty() {
    let (registry, ..) = abc_registry();
    assert_eq!(registry.view_all::<(D,)>().next(), None);
    assert_eq!(registry.view_all::<(A, D)>().next(), None);
    assert_eq!(registry.view_all::<(D, A)>().next(), None);
}

#[test]
fn view_follows_lead_dense_order_after_swap_remove() {
    let (mut registry, e1, e2, e3) = abc_registry();
    registry.remove::<A>(e1);

    // A's dense order is now [e3, e2].
    let found: Vec<_> = registry.view_all::<(A,)>().collect();
    assert_eq!(found, vec![e3, e2]);
}

#[test]
fn destroyed_entities_leave_every_view() {
    let (mut registry, e1, e2, e3) = abc_registry();
    registry.destroy(e3).unwrap();

    assert_eq!(registry.view_all::<(A, B)>().collect::<Vec<_>>(), vec![e1]);
    assert_eq!(registry.view_all::<(C,)>().count(), 0);
    assert_eq!(registry.view_all::<(A,)>().count(), 2);
    assert!(registry.view_all::<(A,)>().all(|e| e == e1 || e == e2));
}

#[test]
fn view_reads_components_of_results() {
    let mut registry = Registry::new();
    for i in 0..5 {
        let e = registry.create();
        registry.emplace(e, Position(i as f32)).unwrap();
        if i % 2 == 1 {
            registry.emplace(e, Velocity(10.0)).unwrap();
        }
    }

    let view = registry.view_all::<(Velocity, Position)>();
    let positions: Vec<f32> = registry
        .view_all::<(Velocity, Position)>()
        .map(|e| view.get::<Position>(e).unwrap().0)
        .collect();
    assert_eq!(positions, vec![1.0, 3.0]);
}

// =============================================================================
// Mutation During Cursor Traversal
// =============================================================================

#[test]
fn cursor_allows_mutating_components_while_walking() {
    let mut registry = Registry::new();
    for i in 0..4 {
        let e = registry.create();
        registry.emplace(e, Position(0.0)).unwrap();
        registry.emplace(e, Velocity(i as f32)).unwrap();
    }

    let mut cursor = ViewCursor::<(Velocity, Position)>::new();
    while let Some(e) = cursor.next(&registry) {
        let v = *registry.get::<Velocity>(e).unwrap();
        registry.get_mut::<Position>(e).unwrap().0 += v.0;
    }

    let total: f32 = registry
        .storage::<Position>()
        .unwrap()
        .values()
        .iter()
        .map(|p| p.0)
        .sum();
    assert_eq!(total, 6.0);
}

#[test]
fn removing_current_lead_skips_swapped_in_entity() {
    let mut registry = Registry::new();
    let entities: Vec<_> = (0..5).map(|_| registry.create()).collect();
    for &e in &entities {
        registry.emplace(e, A).unwrap();
    }

    // Detach A from every entity as it is visited.
    let mut cursor = ViewCursor::<(A,)>::new();
    let mut visited = Vec::new();
    while let Some(e) = cursor.next(&registry) {
        visited.push(e);
        registry.remove::<A>(e);
    }

    // Each removal pulls the last entity into the slot just visited, so the
    // cursor steps past it.
    assert_eq!(visited, vec![entities[0], entities[1], entities[2]]);
    let remaining: Vec<_> = registry.view_all::<(A,)>().collect();
    assert_eq!(remaining, vec![entities[4], entities[3]]);
}

#[test]
fn readding_visited_lead_revisits_entity() {
    let (mut registry, e1, e2, e3) = abc_registry();
    let mut cursor = ViewCursor::<(A,)>::new();

    assert_eq!(cursor.next(&registry), Some(e1));
    registry.remove::<A>(e1);
    registry.emplace(e1, A).unwrap();

    // A went [e1, e2, e3] -> [e3, e2] -> [e3, e2, e1]: e1 is yielded again
    // and e3, now behind the cursor, is not.
    let mut visited = vec![e1];
    visited.extend(drain(&mut cursor, &registry));
    assert_eq!(visited, vec![e1, e2, e1]);
    assert!(registry.all_of_set::<(A,)>(e3));
}

#[test]
fn destroying_during_traversal_is_tolerated() {
    let (mut registry, e1, e2, e3) = abc_registry();
    let mut cursor = ViewCursor::<(A,)>::new();

    assert_eq!(cursor.next(&registry), Some(e1));
    registry.destroy(e2).unwrap();

    // A was [e1, e2, e3]; e3 moved into e2's slot, still ahead of the cursor.
    assert_eq!(drain(&mut cursor, &registry), vec![e3]);
}

#[test]
fn entities_gaining_lead_are_visited_in_same_pass() {
    let (mut registry, e1, e2, e3) = abc_registry();
    let mut cursor = ViewCursor::<(A, B)>::new();

    assert_eq!(cursor.next(&registry), Some(e1));
    let late = registry.create();
    registry.emplace(late, A).unwrap();
    registry.emplace(late, B).unwrap();

    assert_eq!(drain(&mut cursor, &registry), vec![e3, late]);
    assert!(!registry.all_of::<B>(e2));
}

#[test]
fn non_lead_changes_only_affect_unvisited_entities() {
    let (mut registry, e1, e2, e3) = abc_registry();
    let mut cursor = ViewCursor::<(A, B)>::new();

    assert_eq!(cursor.next(&registry), Some(e1));
    registry.remove::<B>(e1);
    registry.emplace(e2, B).unwrap();

    assert_eq!(drain(&mut cursor, &registry), vec![e2, e3]);
}
