use serde::{Deserialize, Serialize};

use super::common::{DEFAULT_ACTOR_EXTENT, Facing, Position};
use super::ObjectId;

/// Party role, used by renderers to pick an icon and ring color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Tank,
    Healer,
    Dps,
    Any,
}

/// A party member on the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ObjectId,
    pub name: String,
    pub role: ActorRole,
    pub position: Position,
    #[serde(default)]
    pub facing: Facing,
    /// Half-extent of the token, in scene units.
    #[serde(default = "Actor::default_extent")]
    pub extent: f32,
}

impl Actor {
    pub fn new(id: ObjectId, name: impl Into<String>, role: ActorRole, x: f32, y: f32) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            position: Position::at(x, y),
            facing: Facing::default(),
            extent: DEFAULT_ACTOR_EXTENT,
        }
    }

    fn default_extent() -> f32 {
        DEFAULT_ACTOR_EXTENT
    }
}
