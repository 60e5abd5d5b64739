use serde::{Deserialize, Serialize};

use crate::object::{ObjectCategory, ObjectId, SceneObject};

/// Shape of the arena floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArenaShape {
    Rectangle,
    Circle,
}

/// Grid overlay drawn on the arena. Opaque to the editing core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grid {
    None,
    Rectangular { rows: u32, columns: u32 },
    Radial { rings: u32, spokes: u32 },
    CustomRectangular { row_ticks: Vec<f32>, column_ticks: Vec<f32> },
}

/// The arena: floor shape, dimensions, grid and background. The core
/// stores these for its consumers and never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub shape: ArenaShape,
    pub width: f32,
    pub height: f32,
    pub grid: Grid,
    /// Renderer-interpreted background key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            shape: ArenaShape::Rectangle,
            width: 600.0,
            height: 600.0,
            grid: Grid::Rectangular { rows: 4, columns: 4 },
            background: None,
        }
    }
}

/// One frame of the plan: an ordered collection of scene objects. List
/// order is z-order for the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Step {
    pub objects: Vec<SceneObject>,
}

impl Step {
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.object(id).is_some()
    }

    /// All objects with the movable capability, in list order.
    pub fn movables(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.is_movable())
    }

    /// Indices into `objects` belonging to one list category, in order.
    pub fn category_indices(&self, category: ObjectCategory) -> Vec<usize> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.category() == category)
            .map(|(i, _)| i)
            .collect()
    }
}

/// The root document: arena, ordered steps, and the id allocator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub arena: Arena,
    /// Never empty; a fresh scene holds one empty step.
    pub steps: Vec<Step>,
    /// Monotonic allocator, strictly greater than every id ever handed
    /// out in this scene's lifetime. Never reset on delete.
    pub next_id: ObjectId,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
            steps: vec![Step::default()],
            next_id: 1,
        }
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Allocate one fresh id, advancing the counter.
    pub fn allocate_id(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
