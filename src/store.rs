//! The scene store: the single owner of the authoritative scene value.
//!
//! All mutation flows through [`SceneStore::dispatch`]; external
//! collaborators read the present state, never hold a mutable reference
//! into it. Dispatches apply strictly in submission order.

use crate::action::{self, SceneAction};
use crate::history::History;
use crate::scene::{Scene, Step};
use crate::state::EditorState;

/// History-wrapped editor state plus the domain reducer.
pub struct SceneStore {
    history: History<EditorState, SceneAction>,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::with_state(EditorState::new())
    }

    pub fn with_state(state: EditorState) -> Self {
        Self {
            history: History::new(state, action::reduce),
        }
    }

    /// A store retaining at most `limit` undo steps.
    pub fn with_history_limit(state: EditorState, limit: usize) -> Self {
        Self {
            history: History::with_limit(state, action::reduce, limit),
        }
    }

    pub fn state(&self) -> &EditorState {
        self.history.present()
    }

    pub fn scene(&self) -> &Scene {
        &self.state().scene
    }

    pub fn current_step(&self) -> &Step {
        self.state().current_step()
    }

    /// Apply one domain action.
    pub fn dispatch(&mut self, action: SceneAction) {
        log::debug!("dispatch {}", action.kind());
        self.history.dispatch(&action);
    }

    /// Step back one edit; no-op on empty history.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Step forward one undone edit; no-op when nothing has been undone.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
