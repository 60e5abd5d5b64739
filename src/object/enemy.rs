use serde::{Deserialize, Serialize};

use super::common::{DEFAULT_ENEMY_EXTENT, Facing, Position};
use super::ObjectId;

/// An enemy token. Enemies default to omnidirectional facing; bosses with a
/// meaningful front get `omni` cleared by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: ObjectId,
    pub name: String,
    pub position: Position,
    #[serde(default = "Enemy::default_facing")]
    pub facing: Facing,
    /// Half-extent of the token ring, in scene units.
    #[serde(default = "Enemy::default_extent")]
    pub extent: f32,
}

impl Enemy {
    pub fn new(id: ObjectId, name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id,
            name: name.into(),
            position: Position::at(x, y),
            facing: Self::default_facing(),
            extent: DEFAULT_ENEMY_EXTENT,
        }
    }

    fn default_facing() -> Facing {
        Facing {
            omni: true,
            ..Facing::default()
        }
    }

    fn default_extent() -> f32 {
        DEFAULT_ENEMY_EXTENT
    }
}
