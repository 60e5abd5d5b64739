use serde::{Deserialize, Serialize};

mod actor;
mod common;
mod draw;
mod enemy;
mod tether;
mod waymark;
mod zone;

pub use actor::{Actor, ActorRole};
pub use common::{AttachAnchor, Facing, ObjectCategory, Position};
pub use draw::Draw;
pub use enemy::Enemy;
pub use tether::{Tether, TetherKind};
pub use waymark::{Waymark, WaymarkKind};
pub use zone::{Zone, ZoneShape};

/// Scene-unique object identity, allocated by the scene's `next_id`
/// counter. Never reused, never reassigned except while copying.
pub type ObjectId = u64;

/// Every kind of object that can appear in a step.
///
/// Variants compose the orthogonal capabilities from [`common`]: a movable
/// object carries a [`Position`], a rotatable one a [`Facing`], and a
/// tether two endpoint references and nothing else. Consumers test
/// capabilities through the accessors below instead of matching variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneObject {
    Actor(Actor),
    Enemy(Enemy),
    Waymark(Waymark),
    Zone(Zone),
    Draw(Draw),
    Tether(Tether),
}

impl SceneObject {
    pub fn id(&self) -> ObjectId {
        match self {
            SceneObject::Actor(o) => o.id,
            SceneObject::Enemy(o) => o.id,
            SceneObject::Waymark(o) => o.id,
            SceneObject::Zone(o) => o.id,
            SceneObject::Draw(o) => o.id,
            SceneObject::Tether(o) => o.id,
        }
    }

    /// Reassign the identity. Only the copy engine does this, on objects it
    /// has already cloned.
    pub fn set_id(&mut self, id: ObjectId) {
        match self {
            SceneObject::Actor(o) => o.id = id,
            SceneObject::Enemy(o) => o.id = id,
            SceneObject::Waymark(o) => o.id = id,
            SceneObject::Zone(o) => o.id = id,
            SceneObject::Draw(o) => o.id = id,
            SceneObject::Tether(o) => o.id = id,
        }
    }

    /// The object kind as a string, for logging and display.
    pub fn kind(&self) -> &'static str {
        match self {
            SceneObject::Actor(_) => "actor",
            SceneObject::Enemy(_) => "enemy",
            SceneObject::Waymark(_) => "waymark",
            SceneObject::Zone(_) => "zone",
            SceneObject::Draw(_) => "draw",
            SceneObject::Tether(_) => "tether",
        }
    }

    pub fn category(&self) -> ObjectCategory {
        match self {
            SceneObject::Actor(_) | SceneObject::Enemy(_) => ObjectCategory::Actors,
            SceneObject::Waymark(_) => ObjectCategory::Markers,
            SceneObject::Zone(_) => ObjectCategory::Zones,
            SceneObject::Draw(_) => ObjectCategory::Draws,
            SceneObject::Tether(_) => ObjectCategory::Tethers,
        }
    }

    /// The movable capability, if the variant has one.
    pub fn position(&self) -> Option<&Position> {
        match self {
            SceneObject::Actor(o) => Some(&o.position),
            SceneObject::Enemy(o) => Some(&o.position),
            SceneObject::Waymark(o) => Some(&o.position),
            SceneObject::Zone(o) => Some(&o.position),
            SceneObject::Draw(o) => Some(&o.position),
            SceneObject::Tether(_) => None,
        }
    }

    pub fn position_mut(&mut self) -> Option<&mut Position> {
        match self {
            SceneObject::Actor(o) => Some(&mut o.position),
            SceneObject::Enemy(o) => Some(&mut o.position),
            SceneObject::Waymark(o) => Some(&mut o.position),
            SceneObject::Zone(o) => Some(&mut o.position),
            SceneObject::Draw(o) => Some(&mut o.position),
            SceneObject::Tether(_) => None,
        }
    }

    /// The rotatable capability, if the variant has one.
    pub fn facing(&self) -> Option<&Facing> {
        match self {
            SceneObject::Actor(o) => Some(&o.facing),
            SceneObject::Enemy(o) => Some(&o.facing),
            SceneObject::Zone(o) => Some(&o.facing),
            SceneObject::Waymark(_) | SceneObject::Draw(_) | SceneObject::Tether(_) => None,
        }
    }

    pub fn facing_mut(&mut self) -> Option<&mut Facing> {
        match self {
            SceneObject::Actor(o) => Some(&mut o.facing),
            SceneObject::Enemy(o) => Some(&mut o.facing),
            SceneObject::Zone(o) => Some(&mut o.facing),
            SceneObject::Waymark(_) | SceneObject::Draw(_) | SceneObject::Tether(_) => None,
        }
    }

    pub fn tether(&self) -> Option<&Tether> {
        match self {
            SceneObject::Tether(t) => Some(t),
            _ => None,
        }
    }

    pub fn tether_mut(&mut self) -> Option<&mut Tether> {
        match self {
            SceneObject::Tether(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_movable(&self) -> bool {
        self.position().is_some()
    }

    pub fn is_rotatable(&self) -> bool {
        self.facing().is_some()
    }

    /// Where this variant prefers to land when attached to a new parent.
    pub fn attach_anchor(&self) -> AttachAnchor {
        match self {
            SceneObject::Actor(_) => AttachAnchor::Center,
            SceneObject::Enemy(_) => AttachAnchor::Top,
            SceneObject::Waymark(_) => AttachAnchor::BottomRight,
            SceneObject::Zone(_) => AttachAnchor::Anywhere,
            SceneObject::Draw(_) | SceneObject::Tether(_) => AttachAnchor::DontAttachByDefault,
        }
    }

    /// Half-extent of the object's footprint, used for anchor points on a
    /// parent. Tethers have no footprint.
    pub fn extent(&self) -> f32 {
        match self {
            SceneObject::Actor(o) => o.extent,
            SceneObject::Enemy(o) => o.extent,
            SceneObject::Waymark(_) => common::DEFAULT_WAYMARK_EXTENT,
            SceneObject::Zone(o) => o.shape.extent(),
            SceneObject::Draw(o) => {
                let mut max = 0.0f32;
                for pair in o.points.chunks_exact(2) {
                    max = max.max(pair[0].abs()).max(pair[1].abs());
                }
                max
            }
            SceneObject::Tether(_) => 0.0,
        }
    }
}

impl From<Actor> for SceneObject {
    fn from(value: Actor) -> Self {
        SceneObject::Actor(value)
    }
}

impl From<Enemy> for SceneObject {
    fn from(value: Enemy) -> Self {
        SceneObject::Enemy(value)
    }
}

impl From<Waymark> for SceneObject {
    fn from(value: Waymark) -> Self {
        SceneObject::Waymark(value)
    }
}

impl From<Zone> for SceneObject {
    fn from(value: Zone) -> Self {
        SceneObject::Zone(value)
    }
}

impl From<Draw> for SceneObject {
    fn from(value: Draw) -> Self {
        SceneObject::Draw(value)
    }
}

impl From<Tether> for SceneObject {
    fn from(value: Tether) -> Self {
        SceneObject::Tether(value)
    }
}
