use stratboard::object::{Actor, ActorRole, SceneObject, Tether, TetherKind};
use stratboard::persistence::{self, PersistenceError};
use stratboard::scene::{ArenaShape, Grid, Scene, Step};
use stratboard::upgrade::{SCENE_FORMAT_VERSION, upgrade_scene_value};

fn sample_scene() -> Scene {
    let mut scene = Scene::new();
    scene.arena.shape = ArenaShape::Circle;
    scene.arena.grid = Grid::Radial { rings: 2, spokes: 8 };
    let a = scene.allocate_id();
    let b = scene.allocate_id();
    let t = scene.allocate_id();
    scene.steps[0].objects = vec![
        Actor::new(a, "MT", ActorRole::Tank, -40.0, 0.0).into(),
        Actor::new(b, "OT", ActorRole::Tank, 40.0, 0.0).into(),
        Tether::new(t, a, b, TetherKind::Close).into(),
    ];
    scene
}

#[test]
fn test_scene_round_trips_through_json() {
    let scene = sample_scene();
    let json = persistence::scene_to_json(&scene).unwrap();
    let restored = persistence::scene_from_json(&json).unwrap();
    assert_eq!(restored, scene);
}

#[test]
fn test_scene_round_trips_through_file() {
    let scene = sample_scene();
    let path = std::env::temp_dir().join("stratboard_roundtrip_test.json");
    persistence::save_scene(&path, &scene).unwrap();
    let restored = persistence::load_scene(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(restored, scene);
}

#[test]
fn test_newer_format_version_is_rejected() {
    let json = format!(
        r#"{{ "version": {}, "scene": {{ "arena": {{}}, "steps": [], "next_id": 1 }} }}"#,
        SCENE_FORMAT_VERSION + 1
    );
    match persistence::scene_from_json(&json) {
        Err(PersistenceError::UnsupportedVersion(v)) => {
            assert_eq!(v, SCENE_FORMAT_VERSION + 1);
        }
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }
}

/// A v1 document: no facing record on rotatable objects, no pinned flag.
fn v1_document() -> serde_json::Value {
    serde_json::json!({
        "version": 1,
        "scene": {
            "arena": {
                "shape": "rectangle",
                "width": 600.0,
                "height": 600.0,
                "grid": "none"
            },
            "steps": [
                {
                    "objects": [
                        {
                            "type": "actor",
                            "id": 1,
                            "name": "MT",
                            "role": "tank",
                            "position": { "x": 10.0, "y": 20.0 }
                        },
                        {
                            "type": "enemy",
                            "id": 2,
                            "name": "boss",
                            "position": { "x": 0.0, "y": 0.0 }
                        }
                    ]
                }
            ],
            "next_id": 3
        }
    })
}

/// A v2 document: draw points still stored as coordinate pairs.
fn v2_document() -> serde_json::Value {
    serde_json::json!({
        "version": 2,
        "scene": {
            "arena": {
                "shape": "circle",
                "width": 400.0,
                "height": 400.0,
                "grid": "none"
            },
            "steps": [
                {
                    "objects": [
                        {
                            "type": "draw",
                            "id": 1,
                            "position": { "x": 5.0, "y": 5.0, "pinned": false },
                            "points": [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
                            "brush_width": 3.0,
                            "color": [255, 255, 255, 255]
                        }
                    ]
                }
            ],
            "next_id": 2
        }
    })
}

#[test]
fn test_v1_load_backfills_facing_and_pinned() {
    let scene = persistence::scene_from_json(&v1_document().to_string()).unwrap();
    let step = &scene.steps[0];

    let actor = step.object(1).unwrap();
    let facing = actor.facing().unwrap();
    assert_eq!(facing.rotation, 0.0);
    assert!(!facing.omni);
    assert!(!actor.position().unwrap().pinned);

    // Enemies predate omni too; the upgrade restores their default.
    let enemy = step.object(2).unwrap();
    assert!(enemy.facing().unwrap().omni);
}

#[test]
fn test_v2_load_flattens_draw_points() {
    let scene = persistence::scene_from_json(&v2_document().to_string()).unwrap();
    let SceneObject::Draw(draw) = scene.steps[0].object(1).unwrap() else {
        panic!("expected a draw object");
    };
    assert_eq!(draw.points, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(draw.point_count(), 3);
}

#[test]
fn test_upgrade_is_idempotent() {
    let mut once = v2_document();
    upgrade_scene_value(&mut once);
    let mut twice = once.clone();
    upgrade_scene_value(&mut twice);
    assert_eq!(once, twice);
    assert_eq!(once["version"], serde_json::json!(SCENE_FORMAT_VERSION));
}

#[test]
fn test_upgrade_leaves_current_documents_unchanged() {
    let scene = sample_scene();
    let json = persistence::scene_to_json(&scene).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let before = value.clone();
    upgrade_scene_value(&mut value);
    assert_eq!(value, before);
}

#[test]
fn test_empty_step_and_missing_fields_survive_load() {
    let json = r#"{
        "version": 3,
        "scene": {
            "arena": { "shape": "rectangle", "width": 600.0, "height": 600.0, "grid": "none" },
            "steps": [ { "objects": [] } ],
            "next_id": 1
        }
    }"#;
    let scene = persistence::scene_from_json(json).unwrap();
    assert_eq!(scene.steps.len(), 1);
    assert_eq!(scene.steps[0], Step::default());
    assert_eq!(scene.arena.shape, ArenaShape::Rectangle);
    assert!(scene.arena.background.is_none());
}
