//! Position and facing attachment over the objects of a step.
//!
//! Attached objects store parent-relative coordinates; everything here
//! resolves those into world space, computes the cycle-safe set of legal
//! attachment targets, and performs the attach/detach edits themselves.
//! Dangling references never fail: a missing parent or facing target just
//! falls back to the object's own stored coordinates.

use std::collections::HashSet;

use egui::{Pos2, Vec2};

use crate::geometry::{bearing, rotate_offset, unrotate_offset};
use crate::object::{AttachAnchor, ObjectId, SceneObject};
use crate::scene::Step;

// Position and rotation resolution are mutually recursive: a parent facing
// one of its own attached children is legal, and hand-edited documents may
// even contain outright parent cycles. Past this depth resolution returns
// stored coordinates instead of recursing further.
const MAX_PARENT_DEPTH: usize = 64;

/// World-space position of an object, following its parent chain.
pub fn resolved_position(step: &Step, object: &SceneObject) -> Pos2 {
    position_at_depth(step, object, 0)
}

/// World-space rotation of an object in degrees.
///
/// With a facing target set, this is the bearing towards the target plus
/// the stored rotation offset; otherwise the stored rotation itself.
pub fn resolved_rotation(step: &Step, object: &SceneObject) -> f32 {
    rotation_at_depth(step, object, 0)
}

fn position_at_depth(step: &Step, object: &SceneObject, depth: usize) -> Pos2 {
    let Some(position) = object.position() else {
        return Pos2::ZERO;
    };
    if depth >= MAX_PARENT_DEPTH {
        return position.point();
    }
    let parent = position
        .parent_id
        .and_then(|id| step.object(id))
        .filter(|p| p.is_movable());
    match parent {
        Some(parent) => {
            let parent_pos = position_at_depth(step, parent, depth + 1);
            let parent_rot = rotation_at_depth(step, parent, depth + 1);
            parent_pos + rotate_offset(position.offset(), parent_rot)
        }
        // Dangling parent: the stored coordinates count as absolute.
        None => position.point(),
    }
}

fn rotation_at_depth(step: &Step, object: &SceneObject, depth: usize) -> f32 {
    let Some(facing) = object.facing() else {
        return 0.0;
    };
    if depth >= MAX_PARENT_DEPTH {
        return facing.rotation;
    }
    let target = facing
        .target_id
        .and_then(|id| step.object(id))
        .filter(|t| t.is_movable());
    match target {
        Some(target) => {
            let own = position_at_depth(step, object, depth + 1);
            let target_pos = position_at_depth(step, target, depth + 1);
            bearing(own, target_pos) + facing.rotation
        }
        None => facing.rotation,
    }
}

/// Objects that may legally become the position parent of `selection`.
///
/// Computes the closure of the selection under "position-parent chain
/// re-enters the selection" as an iterative fixed point, then offers every
/// movable object outside that closure. Attaching the selection to any
/// offered target can therefore never form a cycle.
pub fn allowed_position_parents(step: &Step, selection: &[ObjectId]) -> Vec<ObjectId> {
    let mut excluded: HashSet<ObjectId> = selection.iter().copied().collect();
    loop {
        let mut changed = false;
        for object in step.movables() {
            if excluded.contains(&object.id()) {
                continue;
            }
            let parent = object.position().and_then(|p| p.parent_id);
            if let Some(parent_id) = parent {
                if excluded.contains(&parent_id) {
                    excluded.insert(object.id());
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    step.movables()
        .map(|o| o.id())
        .filter(|id| !excluded.contains(id))
        .collect()
}

/// Objects that may become the facing target of `selection`.
///
/// Only the selection itself is excluded. Facing resolution consumes
/// positions, not rotations, so a facing cycle cannot recurse; excluding
/// transitive facing-descendants would also forbid two objects facing each
/// other.
pub fn allowed_facing_targets(step: &Step, selection: &[ObjectId]) -> Vec<ObjectId> {
    let selected: HashSet<ObjectId> = selection.iter().copied().collect();
    step.movables()
        .map(|o| o.id())
        .filter(|id| !selected.contains(id))
        .collect()
}

/// Attach a batch of objects to one new position parent.
///
/// Each object lands at its variant's preferred anchor on the parent. An
/// anchor point chosen by more than one object in the batch is downgraded
/// to [`AttachAnchor::Anywhere`] for all of them so the batch does not
/// collapse into one spot. Returns updated copies of the affected objects;
/// the caller feeds them back through an update action.
pub fn attach_to_parent(
    step: &Step,
    selection: &[ObjectId],
    parent_id: ObjectId,
) -> Vec<SceneObject> {
    let Some(parent) = step.object(parent_id).filter(|p| p.is_movable()) else {
        log::warn!("attach target {parent_id} is missing or not movable");
        return Vec::new();
    };
    let parent_pos = resolved_position(step, parent);
    let parent_rot = resolved_rotation(step, parent);
    let parent_extent = parent.extent();

    let candidates: Vec<&SceneObject> = selection
        .iter()
        .filter(|id| **id != parent_id)
        .filter_map(|id| step.object(*id))
        .filter(|o| o.is_movable())
        .collect();

    let mut updated = Vec::with_capacity(candidates.len());
    for object in &candidates {
        let mut anchor = object.attach_anchor();
        if anchor.is_point_anchor() {
            let shared = candidates
                .iter()
                .filter(|o| o.attach_anchor() == anchor)
                .count();
            if shared > 1 {
                anchor = AttachAnchor::Anywhere;
            }
        }

        let offset = match anchor {
            AttachAnchor::Center => Vec2::ZERO,
            AttachAnchor::Top => Vec2::new(0.0, -parent_extent),
            AttachAnchor::BottomRight => Vec2::new(parent_extent, parent_extent),
            AttachAnchor::Anywhere | AttachAnchor::DontAttachByDefault => {
                let absolute = resolved_position(step, object);
                unrotate_offset(absolute - parent_pos, parent_rot)
            }
        };

        let mut object = (*object).clone();
        if let Some(position) = object.position_mut() {
            position.x = offset.x;
            position.y = offset.y;
            position.parent_id = Some(parent_id);
            if anchor.is_point_anchor() {
                position.pinned = true;
            }
        }
        updated.push(object);
    }
    updated
}

/// Detach an object from its position parent, baking its current world
/// position into its own coordinates. Clears `pinned`.
pub fn detach_position(step: &Step, object: &SceneObject) -> SceneObject {
    let mut object = object.clone();
    if object.position().is_some_and(|p| p.is_attached()) {
        let absolute = resolved_position(step, &object);
        if let Some(position) = object.position_mut() {
            position.x = absolute.x;
            position.y = absolute.y;
            position.parent_id = None;
            position.pinned = false;
        }
    }
    object
}

/// Detach an object from its facing target, baking the current world
/// rotation into the stored rotation.
pub fn detach_facing(step: &Step, object: &SceneObject) -> SceneObject {
    let mut object = object.clone();
    if object.facing().is_some_and(|f| f.is_facing()) {
        let rotation = resolved_rotation(step, &object);
        if let Some(facing) = object.facing_mut() {
            facing.rotation = rotation;
            facing.target_id = None;
        }
    }
    object
}
