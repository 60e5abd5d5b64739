//! Schema upgrade for persisted scenes.
//!
//! Runs over the raw JSON value on every load, before deserialization, and
//! backfills whatever the writing version did not know about yet. The pass
//! is idempotent: running it on an already-current document changes
//! nothing but the version stamp it re-asserts.
//!
//! Format history:
//! - v1: rotatable objects carried no `facing` record, positions no
//!   `pinned` flag.
//! - v2: draw `points` was a list of `[x, y]` pairs.
//! - v3: flat `[x0, y0, ...]` point array; all capability fields present.

use serde_json::{Map, Value, json};

/// The scene format version this build reads and writes.
pub const SCENE_FORMAT_VERSION: u32 = 3;

/// Version recorded in a file envelope; pre-versioning files count as 1.
pub fn envelope_version(value: &Value) -> u32 {
    value
        .get("version")
        .and_then(Value::as_u64)
        .unwrap_or(1) as u32
}

/// Upgrade a file envelope in place to [`SCENE_FORMAT_VERSION`].
pub fn upgrade_scene_value(value: &mut Value) {
    let from_version = envelope_version(value);

    if let Some(steps) = value
        .get_mut("scene")
        .and_then(|scene| scene.get_mut("steps"))
        .and_then(Value::as_array_mut)
    {
        for step in steps {
            let Some(objects) = step.get_mut("objects").and_then(Value::as_array_mut) else {
                continue;
            };
            for object in objects {
                if let Some(object) = object.as_object_mut() {
                    backfill_position(object);
                    backfill_facing(object);
                    flatten_draw_points(object);
                }
            }
        }
    }

    if let Some(envelope) = value.as_object_mut() {
        envelope.insert("version".into(), json!(SCENE_FORMAT_VERSION));
    }
    if from_version < SCENE_FORMAT_VERSION {
        log::info!("upgraded scene format v{from_version} -> v{SCENE_FORMAT_VERSION}");
    }
}

fn object_type(object: &Map<String, Value>) -> Option<&str> {
    object.get("type").and_then(Value::as_str)
}

fn is_rotatable_type(kind: &str) -> bool {
    matches!(kind, "actor" | "enemy" | "zone")
}

/// v1 positions predate the `pinned` flag.
fn backfill_position(object: &mut Map<String, Value>) {
    if let Some(position) = object.get_mut("position").and_then(Value::as_object_mut) {
        position
            .entry("pinned")
            .or_insert_with(|| Value::Bool(false));
    }
}

/// v1 rotatable objects carried no `facing` record at all, and early v2
/// files could omit `rotation` inside it.
fn backfill_facing(object: &mut Map<String, Value>) {
    let Some(kind) = object_type(object).map(str::to_owned) else {
        return;
    };
    if !is_rotatable_type(&kind) {
        return;
    }
    let default_omni = kind == "enemy";
    let facing = object
        .entry("facing")
        .or_insert_with(|| json!({ "rotation": 0.0, "omni": default_omni }));
    if let Some(facing) = facing.as_object_mut() {
        facing.entry("rotation").or_insert_with(|| json!(0.0));
        facing.entry("omni").or_insert_with(|| Value::Bool(false));
    }
}

/// v2 draw points were a list of `[x, y]` pairs; v3 inlines them into one
/// flat numeric array.
fn flatten_draw_points(object: &mut Map<String, Value>) {
    if object_type(object) != Some("draw") {
        return;
    }
    let Some(points) = object.get_mut("points").and_then(Value::as_array_mut) else {
        return;
    };
    let is_pair_list = points.first().is_some_and(Value::is_array);
    if !is_pair_list {
        return;
    }
    let flat: Vec<Value> = points
        .iter()
        .filter_map(Value::as_array)
        .flatten()
        .cloned()
        .collect();
    *points = flat;
}
