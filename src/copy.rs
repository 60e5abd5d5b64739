//! Cloning a set of objects into fresh identities.
//!
//! Cloned objects get new ids from the scene allocator and have their
//! internal references rewritten so the clone is self-consistent: links
//! into the copied set follow the clones, links out of it either stay on
//! the original object (tether endpoints) or are severed with the world
//! position/rotation baked in (position parents, facing targets).

use std::collections::{HashMap, HashSet};

use egui::{Pos2, Vec2};

use crate::attach::{resolved_position, resolved_rotation};
use crate::object::{ObjectId, SceneObject};
use crate::scene::Step;

/// Output of a copy: the cloned objects plus the advanced id allocator.
/// This is the exact payload of an add-objects action; there is no other
/// channel into a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyResult {
    pub objects: Vec<SceneObject>,
    pub next_id: ObjectId,
}

/// Clone `selection` (an ordered id list into `step`), optionally moving
/// the group so its center of mass lands on `target_center`.
///
/// Partially-copyable input never fails: a tether with no endpoint in the
/// selection is omitted, and everything else degrades by detaching.
pub fn copy_objects(
    step: &Step,
    selection: &[ObjectId],
    target_center: Option<Pos2>,
    next_id: ObjectId,
) -> CopyResult {
    let sources: Vec<&SceneObject> = selection
        .iter()
        .filter_map(|id| step.object(*id))
        .filter(|o| is_copyable(o, selection))
        .collect();
    if sources.is_empty() {
        return CopyResult {
            objects: Vec::new(),
            next_id,
        };
    }

    let offset = match target_center {
        Some(center) => center - group_center(step, &sources),
        None => Vec2::ZERO,
    };

    let mut next_id = next_id;
    let mut remap: HashMap<ObjectId, ObjectId> = HashMap::new();
    for source in &sources {
        remap.insert(source.id(), next_id);
        next_id += 1;
    }

    let mut objects = Vec::with_capacity(sources.len());
    for source in &sources {
        let mut clone = (*source).clone();
        clone.set_id(remap[&source.id()]);

        if let Some(tether) = clone.tether_mut() {
            // A tether can pass the selection filter while both endpoints
            // still fail the copy filter (chained tethers).
            if !remap.contains_key(&tether.start_id) && !remap.contains_key(&tether.end_id) {
                continue;
            }
            if let Some(new_start) = remap.get(&tether.start_id) {
                tether.start_id = *new_start;
            }
            if let Some(new_end) = remap.get(&tether.end_id) {
                tether.end_id = *new_end;
            }
            objects.push(clone);
            continue;
        }

        // Facing first: baking a rotation needs the attachments still
        // intact in the source step.
        if let Some(facing) = source.facing() {
            if let Some(target_id) = facing.target_id {
                match remap.get(&target_id) {
                    Some(new_target) => {
                        if let Some(facing) = clone.facing_mut() {
                            facing.target_id = Some(*new_target);
                        }
                    }
                    None => {
                        let baked = resolved_rotation(step, source);
                        if let Some(facing) = clone.facing_mut() {
                            facing.target_id = None;
                            facing.rotation = baked;
                        }
                    }
                }
            }
        }

        if let Some(position) = source.position() {
            match position.parent_id {
                // Parent copied too: the pair moves rigidly, relative
                // offset untouched.
                Some(parent_id) if remap.contains_key(&parent_id) => {
                    if let Some(position) = clone.position_mut() {
                        position.parent_id = Some(remap[&parent_id]);
                    }
                }
                // Parent left behind: detach, landing at the original
                // world position plus the group offset.
                Some(_) => {
                    let absolute = resolved_position(step, source);
                    if let Some(position) = clone.position_mut() {
                        position.parent_id = None;
                        position.x = absolute.x + offset.x;
                        position.y = absolute.y + offset.y;
                    }
                }
                None => {
                    if let Some(position) = clone.position_mut() {
                        position.x += offset.x;
                        position.y += offset.y;
                    }
                }
            }
        }

        objects.push(clone);
    }

    log::debug!(
        "copied {} of {} selected objects, next_id now {}",
        objects.len(),
        selection.len(),
        next_id
    );
    CopyResult { objects, next_id }
}

/// Movables always copy; a tether copies only if it keeps at least one
/// endpoint inside the selection.
fn is_copyable(object: &SceneObject, selection: &[ObjectId]) -> bool {
    match object.tether() {
        Some(tether) => selection.contains(&tether.start_id) || selection.contains(&tether.end_id),
        None => object.is_movable(),
    }
}

/// Center of mass of the copy set, weighing each rigid sub-group once.
///
/// Objects whose parent chain leads to another member of the set are
/// omitted so an attached child does not double-count its root's location.
fn group_center(step: &Step, sources: &[&SceneObject]) -> Pos2 {
    let ids: HashSet<ObjectId> = sources.iter().map(|o| o.id()).collect();
    let mut sum = Vec2::ZERO;
    let mut count = 0;
    for source in sources {
        if !source.is_movable() || is_interconnected(step, source, &ids) {
            continue;
        }
        sum += resolved_position(step, source).to_vec2();
        count += 1;
    }
    if count == 0 {
        return Pos2::ZERO;
    }
    (sum / count as f32).to_pos2()
}

/// Whether an object's position-parent chain, walked upward, leads to
/// another member of `ids`.
fn is_interconnected(step: &Step, object: &SceneObject, ids: &HashSet<ObjectId>) -> bool {
    let mut current = object.position().and_then(|p| p.parent_id);
    let mut hops = 0;
    while let Some(parent_id) = current {
        if ids.contains(&parent_id) {
            return true;
        }
        hops += 1;
        if hops > step.objects.len() {
            // Corrupt parent cycle; give up rather than loop.
            return false;
        }
        current = step
            .object(parent_id)
            .and_then(|p| p.position())
            .and_then(|p| p.parent_id);
    }
    false
}
