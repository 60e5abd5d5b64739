use serde::{Deserialize, Serialize};

use crate::persistence::SceneSource;
use crate::scene::{Scene, Step};

/// Everything the store holds between dispatches: the authoritative scene,
/// the selected step, and where the scene lives on disk (if anywhere).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub scene: Scene,
    #[serde(default)]
    pub current_step: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SceneSource>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_scene(Scene::new())
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            current_step: 0,
            source: None,
        }
    }

    /// The selected step. The index is clamped; a scene always has at
    /// least one step.
    pub fn current_step(&self) -> &Step {
        let index = self.current_step.min(self.scene.steps.len().saturating_sub(1));
        &self.scene.steps[index]
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
