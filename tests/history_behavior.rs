use stratboard::action::SceneAction;
use stratboard::object::{Actor, ActorRole, SceneObject};
use stratboard::scene::ArenaShape;
use stratboard::state::EditorState;
use stratboard::store::SceneStore;

fn actor(id: u64, x: f32, y: f32) -> SceneObject {
    Actor::new(id, format!("actor-{id}"), ActorRole::Dps, x, y).into()
}

fn sample_actions() -> Vec<SceneAction> {
    vec![
        SceneAction::AddObjects {
            objects: vec![actor(1, 10.0, 10.0)],
            next_id: 2,
        },
        SceneAction::SetArenaShape(ArenaShape::Circle),
        SceneAction::AddStep,
        SceneAction::AddObjects {
            objects: vec![actor(2, 20.0, 20.0)],
            next_id: 3,
        },
        SceneAction::RemoveObjects(vec![2]),
    ]
}

#[test]
fn test_full_rewind_restores_initial_state() {
    let initial = EditorState::new();
    let mut store = SceneStore::with_state(initial.clone());

    let actions = sample_actions();
    let count = actions.len();
    for action in actions {
        store.dispatch(action);
    }
    assert_ne!(*store.state(), initial);

    for _ in 0..count {
        assert!(store.undo());
    }
    assert_eq!(*store.state(), initial);
    assert!(!store.can_undo());
}

#[test]
fn test_undo_then_redo_restores_newest_state() {
    let mut store = SceneStore::new();
    for action in sample_actions() {
        store.dispatch(action);
    }
    let newest = store.state().clone();

    assert!(store.undo());
    assert!(store.undo());
    assert!(store.redo());
    assert!(store.redo());
    assert_eq!(*store.state(), newest);
    assert!(!store.can_redo());
}

#[test]
fn test_new_edit_clears_redo_history() {
    let mut store = SceneStore::new();
    store.dispatch(SceneAction::SetArenaShape(ArenaShape::Circle));
    assert!(store.undo());
    assert!(store.can_redo());

    store.dispatch(SceneAction::SetArenaWidth(400.0));
    assert!(!store.can_redo());
    assert!(!store.redo());
}

#[test]
fn test_undo_on_empty_history_is_a_no_op() {
    let mut store = SceneStore::new();
    let before = store.state().clone();
    assert!(!store.undo());
    assert!(!store.redo());
    assert_eq!(*store.state(), before);
}

#[test]
fn test_history_limit_bounds_undo_depth() {
    const LIMIT: usize = 3;
    let mut store = SceneStore::with_history_limit(EditorState::new(), LIMIT);

    for width in [100.0, 200.0, 300.0, 400.0] {
        store.dispatch(SceneAction::SetArenaWidth(width));
    }

    // Exactly LIMIT undos reach the oldest retained snapshot.
    for _ in 0..LIMIT {
        assert!(store.undo());
    }
    assert_eq!(store.scene().arena.width, 100.0);
    // The initial state fell off the back.
    assert!(!store.undo());
    assert_eq!(store.scene().arena.width, 100.0);
}
