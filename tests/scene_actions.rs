use stratboard::action::{ListAction, SceneAction};
use stratboard::attach::resolved_position;
use stratboard::object::{
    Actor, ActorRole, ObjectCategory, SceneObject, Tether, TetherKind, Waymark, WaymarkKind, Zone,
    ZoneShape,
};
use stratboard::persistence::SceneSource;
use stratboard::scene::Grid;
use stratboard::store::SceneStore;

fn actor(id: u64, x: f32, y: f32) -> SceneObject {
    Actor::new(id, format!("actor-{id}"), ActorRole::Healer, x, y).into()
}

fn waymark(id: u64, kind: WaymarkKind) -> SceneObject {
    Waymark::new(id, kind, 0.0, 0.0).into()
}

fn zone(id: u64) -> SceneObject {
    Zone::new(id, ZoneShape::Circle { radius: 30.0 }, 0.0, 0.0).into()
}

/// A step interleaving categories: zone, actor, waymark, actor.
fn seeded_store() -> SceneStore {
    let mut store = SceneStore::new();
    store.dispatch(SceneAction::AddObjects {
        objects: vec![
            zone(1),
            actor(2, 10.0, 0.0),
            waymark(3, WaymarkKind::A),
            actor(4, 20.0, 0.0),
        ],
        next_id: 5,
    });
    store
}

fn kinds(store: &SceneStore) -> Vec<&'static str> {
    store.current_step().objects.iter().map(|o| o.kind()).collect()
}

#[test]
fn test_arena_setters() {
    let mut store = SceneStore::new();
    store.dispatch(SceneAction::SetArenaWidth(800.0));
    store.dispatch(SceneAction::SetArenaGrid(Grid::Radial { rings: 3, spokes: 8 }));
    store.dispatch(SceneAction::SetArenaBackground(Some("sepulchre".into())));

    let arena = &store.scene().arena;
    assert_eq!(arena.width, 800.0);
    assert_eq!(arena.grid, Grid::Radial { rings: 3, spokes: 8 });
    assert_eq!(arena.background.as_deref(), Some("sepulchre"));
}

#[test]
fn test_category_remove_counts_within_category() {
    let mut store = seeded_store();
    // Remove the second actor: index 1 within the Actors category.
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Actors,
        action: ListAction::Remove(1),
    });

    let step = store.current_step();
    assert_eq!(step.objects.len(), 3);
    assert!(step.contains(2));
    assert!(!step.contains(4));
}

#[test]
fn test_category_move_keeps_other_categories_in_place() {
    let mut store = seeded_store();
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Actors,
        action: ListAction::Move { from: 0, to: 1 },
    });

    // Zone and waymark keep their slots; the two actors swapped.
    assert_eq!(kinds(&store), vec!["zone", "actor", "waymark", "actor"]);
    let ids: Vec<u64> = store.current_step().objects.iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![1, 4, 3, 2]);
}

#[test]
fn test_category_set_replaces_only_that_category() {
    let mut store = seeded_store();
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Actors,
        action: ListAction::Set(vec![actor(5, 1.0, 1.0)]),
    });

    assert_eq!(kinds(&store), vec!["zone", "actor", "waymark"]);
    assert!(store.current_step().contains(5));
    assert!(!store.current_step().contains(2));
}

#[test]
fn test_category_append_and_replace() {
    let mut store = seeded_store();
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Tethers,
        action: ListAction::Append(Tether::new(5, 2, 4, TetherKind::Line).into()),
    });
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Markers,
        action: ListAction::Replace(0, waymark(6, WaymarkKind::B)),
    });

    let step = store.current_step();
    assert!(step.contains(5));
    assert!(step.contains(6));
    assert!(!step.contains(3));
}

#[test]
fn test_out_of_range_list_indices_are_ignored() {
    let mut store = seeded_store();
    let before = store.state().clone();
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Markers,
        action: ListAction::Remove(7),
    });
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Zones,
        action: ListAction::Move { from: 0, to: 3 },
    });
    assert_eq!(store.state().scene, before.scene);
}

#[test]
fn test_update_objects_replaces_by_id() {
    let mut store = seeded_store();
    let mut moved = actor(2, 99.0, 99.0);
    moved.position_mut().unwrap().pinned = true;
    store.dispatch(SceneAction::UpdateObjects(vec![moved]));

    let step = store.current_step();
    let updated = step.object(2).unwrap();
    let pos = resolved_position(step, updated);
    assert_eq!((pos.x, pos.y), (99.0, 99.0));
    assert!(updated.position().unwrap().pinned);
}

#[test]
fn test_remove_leaves_dangling_references_alone() {
    let mut store = seeded_store();
    store.dispatch(SceneAction::List {
        category: ObjectCategory::Tethers,
        action: ListAction::Append(Tether::new(5, 2, 4, TetherKind::Far).into()),
    });
    store.dispatch(SceneAction::RemoveObjects(vec![4]));

    // No cascading delete: the tether still names the removed object.
    let step = store.current_step();
    let tether = step.object(5).unwrap().tether().unwrap();
    assert_eq!(tether.end_id, 4);
    assert!(!step.contains(4));
}

#[test]
fn test_step_lifecycle() {
    let mut store = seeded_store();
    store.dispatch(SceneAction::AddStep);
    assert_eq!(store.scene().steps.len(), 2);
    assert_eq!(store.state().current_step, 1);
    assert!(store.current_step().objects.is_empty());

    store.dispatch(SceneAction::SetStep(0));
    assert_eq!(store.state().current_step, 0);

    // Out-of-range selection is ignored.
    store.dispatch(SceneAction::SetStep(9));
    assert_eq!(store.state().current_step, 0);

    store.dispatch(SceneAction::RemoveStep(0));
    assert_eq!(store.scene().steps.len(), 1);
    assert_eq!(store.state().current_step, 0);
}

#[test]
fn test_removing_last_step_leaves_fresh_one() {
    let mut store = seeded_store();
    store.dispatch(SceneAction::RemoveStep(0));

    assert_eq!(store.scene().steps.len(), 1);
    assert!(store.current_step().objects.is_empty());
    // The allocator survives; ids are never reused.
    assert_eq!(store.scene().next_id, 5);
}

#[test]
fn test_set_source_attaches_handle() {
    let mut store = SceneStore::new();
    assert!(store.state().source.is_none());
    let source = SceneSource::new_slot("week 3 prog");
    store.dispatch(SceneAction::SetSource(Some(source.clone())));
    assert_eq!(store.state().source.as_ref(), Some(&source));

    store.dispatch(SceneAction::SetSource(None));
    assert!(store.state().source.is_none());
}
