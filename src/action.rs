//! The domain action vocabulary and its reducer.
//!
//! `reduce` is a pure function from `(state, action)` to a fresh state
//! value; the history container wraps it without knowing any of these
//! shapes. Out-of-range indices and unknown ids are defined no-ops, never
//! panics, and removing objects deliberately leaves dangling references
//! behind for resolution to tolerate.

use serde::{Deserialize, Serialize};

use crate::object::{ObjectCategory, ObjectId, SceneObject};
use crate::persistence::SceneSource;
use crate::scene::{ArenaShape, Grid, Step};
use crate::state::EditorState;

/// Positional edits of one object category within the current step.
///
/// Indices count only the category's own subsequence of the step's object
/// list; other categories keep their slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListAction {
    /// Replace the whole category.
    Set(Vec<SceneObject>),
    Append(SceneObject),
    Replace(usize, SceneObject),
    Remove(usize),
    /// Reorder within the category.
    Move { from: usize, to: usize },
}

/// Every edit the editor can apply to a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneAction {
    SetArenaShape(ArenaShape),
    SetArenaWidth(f32),
    SetArenaHeight(f32),
    SetArenaGrid(Grid),
    SetArenaBackground(Option<String>),

    /// A positional list edit of one category.
    List {
        category: ObjectCategory,
        action: ListAction,
    },

    /// Insert already-identified objects, advancing the allocator. This is
    /// the exact payload the copy engine produces.
    AddObjects {
        objects: Vec<SceneObject>,
        next_id: ObjectId,
    },
    RemoveObjects(Vec<ObjectId>),
    /// Replace objects wholesale, matched by id.
    UpdateObjects(Vec<SceneObject>),

    /// Append an empty step and select it.
    AddStep,
    RemoveStep(usize),
    SetStep(usize),

    /// Attach a persistence handle; opaque to the core.
    SetSource(Option<SceneSource>),
}

impl SceneAction {
    /// Short action name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SceneAction::SetArenaShape(_) => "set_arena_shape",
            SceneAction::SetArenaWidth(_) => "set_arena_width",
            SceneAction::SetArenaHeight(_) => "set_arena_height",
            SceneAction::SetArenaGrid(_) => "set_arena_grid",
            SceneAction::SetArenaBackground(_) => "set_arena_background",
            SceneAction::List { .. } => "list",
            SceneAction::AddObjects { .. } => "add_objects",
            SceneAction::RemoveObjects(_) => "remove_objects",
            SceneAction::UpdateObjects(_) => "update_objects",
            SceneAction::AddStep => "add_step",
            SceneAction::RemoveStep(_) => "remove_step",
            SceneAction::SetStep(_) => "set_step",
            SceneAction::SetSource(_) => "set_source",
        }
    }
}

/// The domain transition function wrapped by the history container.
pub fn reduce(state: &EditorState, action: &SceneAction) -> EditorState {
    let mut next = state.clone();
    match action {
        SceneAction::SetArenaShape(shape) => next.scene.arena.shape = *shape,
        SceneAction::SetArenaWidth(width) => next.scene.arena.width = *width,
        SceneAction::SetArenaHeight(height) => next.scene.arena.height = *height,
        SceneAction::SetArenaGrid(grid) => next.scene.arena.grid = grid.clone(),
        SceneAction::SetArenaBackground(background) => {
            next.scene.arena.background = background.clone();
        }

        SceneAction::List { category, action } => {
            apply_list_action(current_step_mut(&mut next), *category, action);
        }

        SceneAction::AddObjects { objects, next_id } => {
            current_step_mut(&mut next)
                .objects
                .extend(objects.iter().cloned());
            // The allocator never moves backwards, even on a stale payload.
            next.scene.next_id = next.scene.next_id.max(*next_id);
        }
        SceneAction::RemoveObjects(ids) => {
            current_step_mut(&mut next)
                .objects
                .retain(|o| !ids.contains(&o.id()));
        }
        SceneAction::UpdateObjects(objects) => {
            let step = current_step_mut(&mut next);
            for updated in objects {
                if let Some(existing) = step.object_mut(updated.id()) {
                    *existing = updated.clone();
                }
            }
        }

        SceneAction::AddStep => {
            next.scene.steps.push(Step::default());
            next.current_step = next.scene.steps.len() - 1;
        }
        SceneAction::RemoveStep(index) => {
            if *index < next.scene.steps.len() {
                next.scene.steps.remove(*index);
                if next.scene.steps.is_empty() {
                    next.scene.steps.push(Step::default());
                }
                if next.current_step > *index {
                    next.current_step -= 1;
                }
                next.current_step = next.current_step.min(next.scene.steps.len() - 1);
            }
        }
        SceneAction::SetStep(index) => {
            if *index < next.scene.steps.len() {
                next.current_step = *index;
            }
        }

        SceneAction::SetSource(source) => next.source = source.clone(),
    }
    next
}

fn current_step_mut(state: &mut EditorState) -> &mut Step {
    if state.scene.steps.is_empty() {
        state.scene.steps.push(Step::default());
    }
    let index = state.current_step.min(state.scene.steps.len() - 1);
    &mut state.scene.steps[index]
}

fn apply_list_action(step: &mut Step, category: ObjectCategory, action: &ListAction) {
    let slots = step.category_indices(category);
    match action {
        ListAction::Set(items) => {
            let mut incoming = items.iter().cloned();
            let mut vacated = Vec::new();
            for &slot in &slots {
                match incoming.next() {
                    Some(item) => step.objects[slot] = item,
                    None => vacated.push(slot),
                }
            }
            for slot in vacated.into_iter().rev() {
                step.objects.remove(slot);
            }
            step.objects.extend(incoming);
        }
        ListAction::Append(item) => step.objects.push(item.clone()),
        ListAction::Replace(index, item) => {
            if let Some(&slot) = slots.get(*index) {
                step.objects[slot] = item.clone();
            }
        }
        ListAction::Remove(index) => {
            if let Some(&slot) = slots.get(*index) {
                step.objects.remove(slot);
            }
        }
        ListAction::Move { from, to } => {
            if *from < slots.len() && *to < slots.len() && from != to {
                let mut items: Vec<SceneObject> =
                    slots.iter().map(|&slot| step.objects[slot].clone()).collect();
                let moved = items.remove(*from);
                items.insert(*to, moved);
                for (&slot, item) in slots.iter().zip(items) {
                    step.objects[slot] = item;
                }
            }
        }
    }
}
